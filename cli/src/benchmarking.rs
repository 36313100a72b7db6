use crate::error::{CliError, CliResult};
use crossbeam_queue::ArrayQueue;
use gentzen::{
    ast::FreshNames,
    parser,
    prover::{Config, Prover, Verdict},
};
use std::{
    collections::BTreeMap,
    thread,
    time::{Duration, Instant},
};

#[derive(Debug, Clone, Copy)]
struct JobDescriptor<'a> {
    name: &'a str,
    formula: &'a str,
    run_index: usize,
}

#[derive(Debug, Clone)]
pub struct RunMeasurement {
    pub parsing: Duration,
    pub proving: Duration,
    pub total: Duration,
    pub visited: usize,
    pub verdict: Verdict,
}

#[derive(Debug, Default)]
pub struct BenchmarkResults {
    runs: BTreeMap<String, Vec<RunMeasurement>>,
    num_errors: usize,
}

impl BenchmarkResults {
    fn add_run_measurement(&mut self, name: &str, measurement: RunMeasurement) {
        self.runs.entry(name.to_owned()).or_default().push(measurement);
    }

    fn register_error(&mut self) {
        self.num_errors += 1;
    }

    fn combine(mut a: Self, b: Self) -> Self {
        for (name, runs) in b.runs {
            a.runs.entry(name).or_default().extend(runs);
        }
        a.num_errors += b.num_errors;
        a
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn print(&self) {
        fn average(runs: &[RunMeasurement], f: impl Fn(&RunMeasurement) -> Duration) -> Duration {
            let total: Duration = runs.iter().map(f).sum();
            total / runs.len().max(1) as u32
        }

        let (mut valid, mut invalid, mut inconclusive) = (0, 0, 0);
        let mut total_time = Duration::ZERO;
        for (name, runs) in &self.runs {
            let Some(first) = runs.first() else {
                continue;
            };
            match first.verdict {
                Verdict::Valid => valid += 1,
                Verdict::Invalid => invalid += 1,
                Verdict::Inconclusive(_) => inconclusive += 1,
            }
            total_time += runs.iter().map(|r| r.total).sum::<Duration>();
            println!(
                "{}: {} ({} sequents, parsing: {:?}, proving: {:?}, total: {:?})",
                name,
                first.verdict,
                first.visited,
                average(runs, |r| r.parsing),
                average(runs, |r| r.proving),
                average(runs, |r| r.total),
            );
        }
        println!(
            "{} valid, {} invalid, {} inconclusive, {} errors",
            valid, invalid, inconclusive, self.num_errors
        );
        println!("total time: {:?}", total_time);
    }
}

fn run_job(
    job: JobDescriptor,
    names: &FreshNames,
    config: &Config,
) -> Result<RunMeasurement, gentzen::Error> {
    let total = Instant::now();

    let parsing = Instant::now();
    let formula = parser::parse(job.formula)?;
    let parsing = parsing.elapsed();

    let proving = Instant::now();
    let mut prover = Prover::new(names, config.clone());
    let verdict = prover.prove(&formula);
    let proving = proving.elapsed();

    Ok(RunMeasurement {
        parsing,
        proving,
        total: total.elapsed(),
        visited: prover.statistics().visited,
        verdict,
    })
}

fn worker_thread(
    jobs_queue: &ArrayQueue<JobDescriptor>,
    names: &FreshNames,
    config: &Config,
) -> BenchmarkResults {
    let mut results = BenchmarkResults::default();

    while let Some(job) = jobs_queue.pop() {
        match run_job(job, names, config) {
            Ok(measurement) => results.add_run_measurement(job.name, measurement),
            Err(e) => {
                log::error!("encountered error in '{}' (run {}): {}", job.name, job.run_index, e);
                results.register_error();
            }
        }
    }

    results
}

/// Proves every formula in `instances` `num_runs` times, using `num_jobs` worker threads. Each
/// instance is a pair of a display name and the text of the formula.
///
/// All workers share one allocator, so fresh symbols stay unique across the whole benchmark.
pub fn run_benchmark(
    instances: &[(String, String)],
    num_runs: usize,
    num_jobs: usize,
    config: &Config,
) -> CliResult<BenchmarkResults> {
    const STACK_SIZE: usize = 128 * 1024 * 1024;

    let jobs_queue = ArrayQueue::new((instances.len() * num_runs).max(1));
    for run_index in 0..num_runs {
        for (name, formula) in instances {
            let job = JobDescriptor { name, formula, run_index };
            jobs_queue.force_push(job);
        }
    }
    let names = FreshNames::new();

    thread::scope(|s| -> CliResult<BenchmarkResults> {
        let (jobs_queue, names) = (&jobs_queue, &names);

        // Every worker must be spawned before the first `join`
        #[allow(clippy::needless_collect)]
        let workers = (0..num_jobs.max(1))
            .map(|_| {
                thread::Builder::new()
                    .stack_size(STACK_SIZE)
                    .spawn_scoped(s, move || worker_thread(jobs_queue, names, config))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut results = BenchmarkResults::default();
        for w in workers {
            let worker_results = w.join().map_err(|_| CliError::WorkerPanicked)?;
            results = BenchmarkResults::combine(results, worker_results);
        }
        Ok(results)
    })
}
