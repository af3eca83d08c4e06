//! daylog - per-day file logging with colored console echo
//!
//! A [`Logger`] stamps each message with the time, its namespace, a severity
//! and the caller's source location, appends it to a file named after the
//! namespace and the current date, and optionally echoes a colored copy to
//! the console. Logging at ERROR or FATAL ends the process.
//!
//! ```no_run
//! use daylog::{fmt_args, Logger, LoggerConfig};
//!
//! # fn main() -> daylog::Result<()> {
//! let logger = Logger::new(
//!     LoggerConfig::new("App")
//!         .with_directory("/tmp/logs")
//!         .with_console(true),
//! )?;
//! logger.log("Value is %d", &fmt_args!["INFO", 42])?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use logging::{FormatArg, LevelArg, Logger, Severity, ShutdownHook};
