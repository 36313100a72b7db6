use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no formulas given")]
    NoFormulas,

    #[error("'{}' is not a file or directory", .0.display())]
    NotAFileOrDirectory(PathBuf),

    #[error("a benchmark worker thread panicked")]
    WorkerPanicked,

    #[error(transparent)]
    Gentzen(#[from] gentzen::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
