use crate::error::{CliError, CliResult};
use std::{
    ffi::OsStr,
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

const FORMULA_FILE_EXTENSION: &str = "fol";

fn get_formula_files_from_dir(path: PathBuf, acc: &mut Vec<PathBuf>) -> CliResult<()> {
    let file_type = fs::metadata(&path)?.file_type();
    if file_type.is_file() {
        if path.extension() == Some(OsStr::new(FORMULA_FILE_EXTENSION)) {
            acc.push(path);
        }
    } else if file_type.is_dir() {
        for entry in fs::read_dir(path)? {
            get_formula_files_from_dir(entry?.path(), acc)?;
        }
    } else {
        // `fs::metadata` follows symlinks, so this should only be reachable if the path is
        // something weird like a device file
        return Err(CliError::NotAFileOrDirectory(path));
    }
    Ok(())
}

/// Collects the formula files named by `paths`. Files are taken as they are, and directories are
/// searched recursively for `.fol` files.
pub fn get_formula_files_from_paths<'a, T>(paths: T) -> CliResult<Vec<PathBuf>>
where
    T: Iterator<Item = &'a str>,
{
    let mut result = Vec::new();
    for p in paths {
        let file_type = fs::metadata(p)?.file_type();
        if file_type.is_file() {
            result.push(p.into());
        } else {
            get_formula_files_from_dir(p.into(), &mut result)?;
        }
    }
    Ok(result)
}

/// Reads one formula per line from `input`. Blank lines and lines starting with `#` are skipped.
pub fn read_formulas(input: impl BufRead) -> io::Result<Vec<String>> {
    let mut result = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            result.push(line.to_owned());
        }
    }
    Ok(result)
}

/// Reads the formulas in `path`, or in the standard input if `path` is `-`.
pub fn read_formulas_from_path(path: &str) -> io::Result<Vec<String>> {
    if path == "-" {
        read_formulas(io::stdin().lock())
    } else {
        read_formulas(io::BufReader::new(fs::File::open(path)?))
    }
}
