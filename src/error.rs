//! Error types for logger construction and log calls

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the logger
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A configuration value had the wrong type
    #[error("bad argument #{position} '{name}' (expected {expected}, got {actual})")]
    InvalidArgument {
        /// 1-based position of the value in the constructor's parameter list
        position: usize,
        /// Parameter name
        name: &'static str,
        /// Expected type
        expected: &'static str,
        /// Type that was actually supplied
        actual: String,
    },

    /// The log directory does not exist or cannot be probed
    #[error("path '{}' is not an accessible directory: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A message template could not be expanded with the given arguments
    #[error("bad format string: {0}")]
    Format(String),

    /// The configuration text could not be parsed
    #[error("invalid logger configuration: {0}")]
    Config(String),

    /// Opening or writing the log file or console failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LoggerError>;
