//! What happens after an ERROR or FATAL line has been written

use super::severity::Severity;

/// Exit status used for terminal severities
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the host after a terminal-severity log line
///
/// The default [`ProcessExit`] terminates the process. Hosts with their own
/// main loop (a game engine, a GUI runtime) can install a hook that asks the
/// loop to quit instead.
pub trait ShutdownHook: Send + Sync {
    fn shutdown(&self, level: Severity, code: i32);
}

/// Terminates the process with `std::process::exit`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl ShutdownHook for ProcessExit {
    fn shutdown(&self, level: Severity, code: i32) {
        tracing::debug!("Exiting after {} log line with status {}", level.name(), code);
        std::process::exit(code);
    }
}

impl<F> ShutdownHook for F
where
    F: Fn(Severity, i32) + Send + Sync,
{
    fn shutdown(&self, level: Severity, code: i32) {
        self(level, code)
    }
}
