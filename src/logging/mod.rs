//! Logging system
//!
//! Severity levels, message formatting, the day-file [`Logger`], log file
//! retention and a bridge from `tracing` events.

mod ansi;
mod format;
mod layer;
mod logger;
mod retention;
mod severity;
mod shutdown;

pub use ansi::strip_ansi;
pub use format::{sprintf, FormatArg};
pub use layer::{init_tracing, LoggerLayer};
pub use logger::{Logger, Truthy};
pub use retention::{cleanup_old_logs, cleanup_old_logs_with_retention, DEFAULT_RETENTION_DAYS};
pub use severity::{LevelArg, Severity};
pub use shutdown::{ProcessExit, ShutdownHook, FATAL_EXIT_CODE};
