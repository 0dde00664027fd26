use std::path::PathBuf;

use crate::cli::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Args(#[from] ParseError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("cannot open log file {}: {source}", path.display())]
    Log {
        path: PathBuf,
        source: std::io::Error,
    },
}
