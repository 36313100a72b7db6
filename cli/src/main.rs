mod benchmarking;
mod error;
mod logger;
mod path_args;

use clap::{AppSettings, ArgEnum, Args, Parser, Subcommand};
use const_format::{formatcp, str_index};
use error::{CliError, CliResult};
use gentzen::{
    ast::FreshNames,
    parser,
    prover::{Config, Prover, RecordingObserver},
};
use git_version::git_version;
use path_args::{get_formula_files_from_paths, read_formulas, read_formulas_from_path};
use std::{
    fs::File,
    io::{self, IsTerminal},
};

// `git describe --all` will try to find any ref (including tags) that describes the current commit.
// Release tags look like `gentzen-0.1.0`, so they are excluded to get the branch name instead.
const GIT_BRANCH_NAME: &str = git_version!(
    args = ["--all", "--exclude", "gentzen-*"],
    fallback = "heads/none",
);
const GIT_COMMIT_HASH: &str = git_version!(fallback = "unknown");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const VERSION_STRING: &str = formatcp!(
    "{} [git {} {}]",
    APP_VERSION,
    // By default, `git describe` returns something like "heads/main". We ignore the "heads/" part
    // to get only the branch name
    str_index!(GIT_BRANCH_NAME, 6..),
    GIT_COMMIT_HASH,
);

#[derive(Parser)]
#[clap(
    name = "gentzen",
    version = VERSION_STRING,
    setting = AppSettings::DeriveDisplayOrder
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Sets the maximum logging level.
    #[clap(arg_enum, global = true, long = "log", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Disables output coloring.
    #[clap(global = true, long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parses formulas and prints them back.
    Parse(ParseCommandOptions),

    /// Decides whether formulas are valid.
    Prove(ProveCommandOptions),

    /// Proves the formulas in a series of files and records performance statistics.
    Bench(BenchCommandOptions),
}

#[derive(Args)]
struct Input {
    /// The formulas to read.
    formulas: Vec<String>,

    /// Also reads formulas from a file, one per line. Blank lines and lines starting with `#` are
    /// ignored. If the path is `-`, the formulas are read from the standard input.
    #[clap(short, long)]
    file: Option<String>,
}

#[derive(Args, Clone, Copy)]
struct SearchOptions {
    /// The maximum nesting depth of the proof search.
    #[clap(long)]
    max_depth: Option<usize>,

    /// The maximum number of sequents visited while proving one formula.
    #[clap(long)]
    max_steps: Option<usize>,

    /// Removes both search limits. The search may then run forever on some formulas.
    #[clap(long, conflicts_with_all = &["max-depth", "max-steps"])]
    unbounded: bool,
}

fn build_config(
    SearchOptions {
        max_depth,
        max_steps,
        unbounded,
    }: SearchOptions,
) -> Config {
    if unbounded {
        return Config::new().unbounded();
    }
    let mut config = Config::new();
    if let Some(value) = max_depth {
        config = config.max_depth(value);
    }
    if let Some(value) = max_steps {
        config = config.max_steps(value);
    }
    config
}

#[derive(Args)]
struct ParseCommandOptions {
    #[clap(flatten)]
    input: Input,
}

#[derive(Args)]
struct ProveCommandOptions {
    #[clap(flatten)]
    input: Input,

    #[clap(flatten)]
    search: SearchOptions,

    /// Prints every sequent visited and every witness tried during the search.
    #[clap(long)]
    trace: bool,
}

#[derive(Args)]
struct BenchCommandOptions {
    #[clap(flatten)]
    search: SearchOptions,

    /// Number of times to run the benchmark for each formula.
    #[clap(short, long, default_value_t = 1)]
    num_runs: usize,

    /// Number of jobs to run simultaneously when running the benchmark.
    #[clap(short = 'j', long, default_value_t = 1)]
    num_jobs: usize,

    /// The formula files on which the benchmark will be run. If a directory is passed, it will be
    /// searched recursively for `.fol` files.
    files: Vec<String>,
}

#[derive(ArgEnum, Clone)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let colors_enabled = !cli.no_color && std::io::stderr().is_terminal();
    if let Err(e) = logger::init(cli.log_level.into(), colors_enabled) {
        eprintln!("couldn't set up logger: {}", e);
    }

    let result = match cli.command {
        Command::Parse(options) => parse_command(options),
        Command::Prove(options) => prove_command(options),
        Command::Bench(options) => bench_command(options),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn get_formulas(input: &Input) -> CliResult<Vec<String>> {
    let mut formulas = input.formulas.clone();
    if let Some(path) = &input.file {
        formulas.extend(read_formulas_from_path(path)?);
    }
    if formulas.is_empty() {
        return Err(CliError::NoFormulas);
    }
    Ok(formulas)
}

fn parse_command(options: ParseCommandOptions) -> CliResult<()> {
    for text in get_formulas(&options.input)? {
        println!("{}", parser::parse(&text)?);
    }
    Ok(())
}

fn prove_command(options: ProveCommandOptions) -> CliResult<()> {
    let formulas = get_formulas(&options.input)?;
    let config = build_config(options.search);

    for text in &formulas {
        let formula = parser::parse(text)?;
        let names = FreshNames::new();
        let verdict = if options.trace {
            let mut recorder = RecordingObserver::new();
            let verdict = Prover::new(&names, config.clone())
                .with_observer(&mut recorder)
                .prove(&formula);
            for line in recorder.lines() {
                println!("{}", line);
            }
            verdict
        } else {
            Prover::new(&names, config.clone()).prove(&formula)
        };

        if formulas.len() == 1 {
            println!("{}", verdict);
        } else {
            println!("{}: {}", formula, verdict);
        }
    }
    Ok(())
}

fn bench_command(options: BenchCommandOptions) -> CliResult<()> {
    let files = get_formula_files_from_paths(options.files.iter().map(String::as_str))?;
    let mut instances = Vec::new();
    for path in files {
        let formulas = read_formulas(io::BufReader::new(File::open(&path)?))?;
        for (i, formula) in formulas.into_iter().enumerate() {
            instances.push((format!("{}#{}", path.display(), i + 1), formula));
        }
    }
    if instances.is_empty() {
        log::warn!("no formulas found");
        return Ok(());
    }

    log::info!(
        "running benchmark on {} formulas, doing {} runs each",
        instances.len(),
        options.num_runs
    );

    let config = build_config(options.search);
    let results =
        benchmarking::run_benchmark(&instances, options.num_runs, options.num_jobs, &config)?;
    if results.is_empty() {
        println!("no benchmark data collected");
        return Ok(());
    }
    if results.num_errors() > 0 {
        log::warn!("{} errors encountered during benchmark", results.num_errors());
    }
    results.print();
    Ok(())
}
