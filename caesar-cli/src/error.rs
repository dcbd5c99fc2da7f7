//! Error type for the CLI front end.
//!
//! Usage errors (unknown mode, missing or non-numeric shift) are
//! reported by clap itself; only runtime failures surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
