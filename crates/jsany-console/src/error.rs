//! Error types for the console sink.

use thiserror::Error;

/// Failures while writing a log line.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("failed to write log line: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
