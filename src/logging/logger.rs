//! Per-namespace day-file logger
//!
//! Each [`Logger`] appends to `<directory><namespace>_<suffix>.log`, where the
//! suffix is today's date rendered with the logger's file suffix pattern. The
//! file is opened, written and closed on every call so nothing is buffered
//! when the process ends abruptly.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use crossterm::style::Color;

use super::ansi::{console_header, console_line, strip_ansi};
use super::format::{sprintf, FormatArg};
use super::severity::{LevelArg, Severity};
use super::shutdown::{ProcessExit, ShutdownHook, FATAL_EXIT_CODE};
use crate::config::{is_valid_file_suffix, LoggerConfig, DEFAULT_FILE_SUFFIX};
use crate::error::{LoggerError, Result};

/// Time of day prefix for every line
const TIME_FORMAT: &str = "%H:%M:%S";

/// Header emitted after a terminal-severity line
const BAD_NEWS: &str = "SOMETHING BAD HAPPENED";

/// Values that can act as an `expect` condition
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Truthy for std::result::Result<T, E> {
    fn is_truthy(&self) -> bool {
        self.is_ok()
    }
}

/// A namespaced logger writing one file per period
pub struct Logger {
    namespace: String,
    /// Always ends with a path separator
    directory: PathBuf,
    console: bool,
    file_suffix: String,
    level: Severity,
    console_out: Mutex<Box<dyn Write + Send>>,
    shutdown: Box<dyn ShutdownHook>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("directory", &self.directory)
            .field("console", &self.console)
            .field("file_suffix", &self.file_suffix)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a logger and write its construction header
    ///
    /// Fails with [`LoggerError::Path`] if the configured directory does not
    /// exist or cannot be probed; no file is created in that case.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let directory = normalize_directory(&config.directory)?;

        let file_suffix = if is_valid_file_suffix(&config.file_suffix) {
            config.file_suffix
        } else {
            tracing::warn!(
                "Invalid file suffix '{}', using {}",
                config.file_suffix,
                DEFAULT_FILE_SUFFIX
            );
            DEFAULT_FILE_SUFFIX.to_string()
        };

        let logger = Self {
            namespace: config.namespace,
            directory,
            console: config.console,
            file_suffix,
            level: Severity::DEFAULT,
            console_out: Mutex::new(Box::new(io::stdout())),
            shutdown: Box::new(ProcessExit),
        };

        let header = sprintf(&config.header, &config.header_args)?;
        let now = Local::now();
        logger.append(&now, &header_line(&now, &header))?;

        tracing::debug!(
            "Logger '{}' writing to {}",
            logger.namespace,
            logger.log_file_path_at(&now).display()
        );

        Ok(logger)
    }

    /// Create a logger for `namespace` in the current directory
    pub fn with_namespace(namespace: impl Into<String>) -> Result<Self> {
        Self::new(LoggerConfig::new(namespace))
    }

    /// Replace the console sink (stdout by default)
    pub fn with_console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console_out = Mutex::new(Box::new(writer));
        self
    }

    /// Replace what happens after an ERROR or FATAL line
    pub fn with_shutdown_hook(mut self, hook: impl ShutdownHook + 'static) -> Self {
        self.shutdown = Box::new(hook);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Log directory, always with a trailing separator
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn console_enabled(&self) -> bool {
        self.console
    }

    pub fn set_console(&mut self, enabled: bool) {
        self.console = enabled;
    }

    /// Level used by [`Logger::log`] when no level is named
    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }

    /// File that lines logged now are appended to
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file_path_at(&Local::now())
    }

    /// File that lines logged at `when` are appended to
    pub fn log_file_path_at(&self, when: &DateTime<Local>) -> PathBuf {
        self.directory.join(format!(
            "{}_{}.log",
            self.namespace,
            when.format(&self.file_suffix)
        ))
    }

    /// Set the default level from an ordinal or a name
    ///
    /// Unknown levels reset the default to DEBUG instead of failing.
    pub fn set_level(&mut self, level: impl Into<LevelArg>) {
        let level = level.into();
        self.level = level.resolve().unwrap_or_else(|| {
            tracing::warn!("Unknown log level {:?}, using {}", level, Severity::DEFAULT);
            Severity::DEFAULT
        });
    }

    /// Set the file suffix date pattern
    ///
    /// Empty or unparseable patterns reset to `%Y-%m-%d` instead of failing.
    pub fn set_file_suffix(&mut self, pattern: &str) {
        if is_valid_file_suffix(pattern) {
            self.file_suffix = pattern.to_string();
        } else {
            tracing::warn!(
                "Invalid file suffix '{}', using {}",
                pattern,
                DEFAULT_FILE_SUFFIX
            );
            self.file_suffix = DEFAULT_FILE_SUFFIX.to_string();
        }
    }

    /// Log a message
    ///
    /// If the first argument is a string naming a severity it is taken as the
    /// level and the rest are the format arguments; otherwise every argument
    /// is a format argument and the default level applies.
    ///
    /// ERROR and FATAL end the process after the line is written. If the
    /// line cannot be written the I/O error is returned and the shutdown hook
    /// is not called.
    #[track_caller]
    pub fn log(&self, message: impl AsRef<str>, args: &[FormatArg]) -> Result<()> {
        let named = args
            .first()
            .and_then(FormatArg::as_str)
            .and_then(Severity::parse);
        let (level, args) = match named {
            Some(level) => (level, &args[1..]),
            None => (self.level, args),
        };
        self.emit(level, Location::caller(), message.as_ref(), args)
    }

    /// Log a message at an explicit level
    #[track_caller]
    pub fn log_at(
        &self,
        level: Severity,
        message: impl AsRef<str>,
        args: &[FormatArg],
    ) -> Result<()> {
        self.emit(level, Location::caller(), message.as_ref(), args)
    }

    /// Log only when `condition` is falsy, then hand the condition back
    #[track_caller]
    pub fn expect<T: Truthy>(
        &self,
        condition: T,
        message: impl AsRef<str>,
        args: &[FormatArg],
    ) -> Result<T> {
        if !condition.is_truthy() {
            self.log(message, args)?;
        }
        Ok(condition)
    }

    /// Write a header line; empty or missing text is a no-op
    pub fn header(&self, message: Option<&str>, args: &[FormatArg]) -> Result<()> {
        match message {
            Some(text) if !text.is_empty() => {
                let text = sprintf(text, args)?;
                self.write_header(&Local::now(), &text, None)
            }
            _ => Ok(()),
        }
    }

    fn emit(
        &self,
        level: Severity,
        caller: &Location<'_>,
        message: &str,
        args: &[FormatArg],
    ) -> Result<()> {
        let text = sprintf(message, args)?;
        let site = format!("{}:{}", caller.file(), caller.line());
        // A failed write reaches the caller even at terminal levels
        self.write_record(level, &site, &text)?;

        if level.is_terminal() {
            let header = self.write_header(&Local::now(), BAD_NEWS, Some(Color::Red));
            self.shutdown.shutdown(level, FATAL_EXIT_CODE);
            return header;
        }
        Ok(())
    }

    /// Write one formatted line to the file and the console
    ///
    /// Never triggers shutdown; callers decide what a terminal level means.
    pub(crate) fn write_record(&self, level: Severity, site: &str, text: &str) -> Result<()> {
        let now = Local::now();
        let time = now.format(TIME_FORMAT).to_string();

        let line = format!(
            "{} [{} {}] {}: {}",
            time,
            self.namespace,
            level.name(),
            site,
            text
        );
        self.append(&now, &strip_ansi(&line))?;

        if self.console {
            self.echo(&console_line(&time, &self.namespace, level, site, text))?;
        }
        Ok(())
    }

    fn write_header(&self, now: &DateTime<Local>, text: &str, color: Option<Color>) -> Result<()> {
        self.append(now, &header_line(now, &strip_ansi(text)))?;
        if self.console {
            let time = now.format(TIME_FORMAT).to_string();
            self.echo(&console_header(&time, text, color))?;
        }
        Ok(())
    }

    fn append(&self, now: &DateTime<Local>, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_file_path_at(now))?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn echo(&self, line: &str) -> Result<()> {
        let mut out = self
            .console_out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

fn header_line(now: &DateTime<Local>, text: &str) -> String {
    format!("\n{} [{}]", now.format(TIME_FORMAT), text)
}

/// Check the directory exists and give it a trailing separator
fn normalize_directory(directory: &Path) -> Result<PathBuf> {
    let directory = if directory.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        directory.to_path_buf()
    };

    let metadata = fs::metadata(&directory).map_err(|source| LoggerError::Path {
        path: directory.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(LoggerError::Path {
            path: directory,
            source: io::Error::new(io::ErrorKind::Other, "not a directory"),
        });
    }

    // Joining an empty component appends the platform separator
    Ok(directory.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt_args;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    type Shutdowns = Arc<Mutex<Vec<(Severity, i32)>>>;

    fn logger_in(dir: &TempDir, console: bool) -> (Logger, Captured, Shutdowns) {
        let captured = Captured::default();
        let shutdowns: Shutdowns = Arc::default();
        let recorder = Arc::clone(&shutdowns);
        let logger = Logger::new(
            LoggerConfig::new("App")
                .with_directory(dir.path())
                .with_console(console),
        )
        .unwrap()
        .with_console_writer(captured.clone())
        .with_shutdown_hook(move |level: Severity, code: i32| {
            recorder.lock().unwrap().push((level, code))
        });
        (logger, captured, shutdowns)
    }

    fn file_lines(logger: &Logger) -> Vec<String> {
        fs::read_to_string(logger.log_file_path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn last_line(logger: &Logger) -> String {
        file_lines(logger)
            .into_iter()
            .filter(|l| !l.is_empty())
            .last()
            .unwrap()
    }

    #[test]
    fn test_file_name_uses_namespace_and_today() {
        let dir = TempDir::new().unwrap();
        let (logger, _, _) = logger_in(&dir, false);
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(
            logger.log_file_path(),
            dir.path().join(format!("App_{}.log", today))
        );
        assert!(logger.log_file_path().exists());
    }

    #[test]
    fn test_directory_gets_trailing_separator() {
        let dir = TempDir::new().unwrap();
        let (logger, _, _) = logger_in(&dir, false);
        let shown = logger.directory().to_string_lossy().into_owned();
        assert!(shown.ends_with(std::path::MAIN_SEPARATOR));
    }

    #[test]
    fn test_construction_writes_default_header() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, true);
        let content = fs::read_to_string(logger.log_file_path()).unwrap();
        assert!(content.starts_with('\n'));
        assert!(content.trim_end().ends_with("[AUTOGENERATED BY LOGGER]"));
        // The construction header goes to the file only
        assert!(captured.text().is_empty());
    }

    #[test]
    fn test_construction_header_with_args() {
        let dir = TempDir::new().unwrap();
        let logger = Logger::new(
            LoggerConfig::new("Build")
                .with_directory(dir.path())
                .with_header("Release %s (%d)", fmt_args!["1.2", 7]),
        )
        .unwrap();
        assert!(last_line(&logger).ends_with("[Release 1.2 (7)]"));
    }

    #[test]
    fn test_missing_directory_is_path_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let err = Logger::new(LoggerConfig::new("App").with_directory(&missing)).unwrap_err();
        assert!(matches!(err, LoggerError::Path { .. }));
        assert!(!missing.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_file_as_directory_is_path_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let err = Logger::new(LoggerConfig::new("App").with_directory(&file)).unwrap_err();
        assert!(matches!(err, LoggerError::Path { .. }));
    }

    #[test]
    fn test_log_with_named_level_and_args() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, true);

        let line = line!() + 1;
        logger.log("Value is %d", &fmt_args!["INFO", 42]).unwrap();

        let written = last_line(&logger);
        let expected_tail = format!("[App INFO.] {}:{}: Value is 42", file!(), line);
        assert!(written.ends_with(&expected_tail), "{}", written);
        assert_eq!(written.as_bytes()[2], b':');
        assert_eq!(written.as_bytes()[5], b':');

        let console = captured.text();
        assert!(console.contains('\x1b'));
        assert!(strip_ansi(&console).contains(&expected_tail));
    }

    #[test]
    fn test_log_without_level_uses_default_and_keeps_first_arg() {
        let dir = TempDir::new().unwrap();
        let (logger, _, _) = logger_in(&dir, false);
        logger.log("%s then %s", &fmt_args!["first", "second"]).unwrap();
        let written = last_line(&logger);
        assert!(written.contains("[App DEBUG]"));
        assert!(written.ends_with(": first then second"));
    }

    #[test]
    fn test_level_name_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let (logger, _, _) = logger_in(&dir, false);
        logger.log("careful", &fmt_args!["warn"]).unwrap();
        assert!(last_line(&logger).contains("[App WARN.]"));
    }

    #[test]
    fn test_every_level_writes_its_name() {
        let dir = TempDir::new().unwrap();
        let (logger, _, shutdowns) = logger_in(&dir, false);
        for level in Severity::ALL {
            logger.log_at(level, "at %s", &fmt_args![level.ordinal()]).unwrap();
            let written = file_lines(&logger)
                .into_iter()
                .filter(|l| l.contains(" [App "))
                .last()
                .unwrap();
            assert!(written.contains(&format!("[App {}]", level.name())), "{}", written);
        }
        assert_eq!(shutdowns.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_terminal_level_writes_bad_news_then_shuts_down() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, shutdowns) = logger_in(&dir, true);

        logger.log("disk gone", &fmt_args!["error"]).unwrap();

        let lines: Vec<_> = file_lines(&logger)
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect();
        let n = lines.len();
        assert!(lines[n - 2].contains("[App ERROR]"));
        assert!(lines[n - 2].ends_with("disk gone"));
        assert!(lines[n - 1].ends_with("[SOMETHING BAD HAPPENED]"));

        assert!(strip_ansi(&captured.text()).contains("[SOMETHING BAD HAPPENED]"));
        assert_eq!(*shutdowns.lock().unwrap(), vec![(Severity::Error, FATAL_EXIT_CODE)]);
    }

    #[test]
    fn test_non_terminal_levels_do_not_shut_down() {
        let dir = TempDir::new().unwrap();
        let (logger, _, shutdowns) = logger_in(&dir, false);
        logger.log_at(Severity::Warn, "fine", &[]).unwrap();
        assert!(shutdowns.lock().unwrap().is_empty());
    }

    #[test]
    fn test_ansi_stripped_in_file_kept_on_console() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, true);
        logger
            .log("\x1b[31mred\x1b[0m text", &fmt_args!["info"])
            .unwrap();

        let written = last_line(&logger);
        assert!(!written.contains('\x1b'));
        assert!(written.ends_with(": red text"));
        assert!(captured.text().contains("\x1b[31mred\x1b[0m text"));
    }

    #[test]
    fn test_console_disabled_writes_nothing_to_console() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, false);
        logger.log("quiet", &[]).unwrap();
        assert!(captured.text().is_empty());
    }

    #[test]
    fn test_expect_truthy_is_silent() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, true);
        let before = fs::read_to_string(logger.log_file_path()).unwrap();

        assert!(logger.expect(true, "msg", &[]).unwrap());
        assert_eq!(logger.expect(Some(3), "msg", &[]).unwrap(), Some(3));

        assert_eq!(fs::read_to_string(logger.log_file_path()).unwrap(), before);
        assert!(captured.text().is_empty());
    }

    #[test]
    fn test_expect_falsy_logs_with_external_call_site() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, true);

        let line = line!() + 1;
        let result = logger.expect(false, "msg", &fmt_args!["INFO"]).unwrap();

        assert!(!result);
        let written = last_line(&logger);
        assert!(written.ends_with(&format!("[App INFO.] {}:{}: msg", file!(), line)));
        assert_eq!(strip_ansi(captured.text().trim_end()), written);
    }

    #[test]
    fn test_header_writes_line_and_ignores_empty() {
        let dir = TempDir::new().unwrap();
        let (logger, captured, _) = logger_in(&dir, true);
        let before = fs::read_to_string(logger.log_file_path()).unwrap();

        logger.header(Some(""), &[]).unwrap();
        logger.header(None, &[]).unwrap();
        assert_eq!(fs::read_to_string(logger.log_file_path()).unwrap(), before);
        assert!(captured.text().is_empty());

        logger.header(Some("Round %d"), &fmt_args![2]).unwrap();
        assert!(last_line(&logger).ends_with("[Round 2]"));
        assert!(strip_ansi(&captured.text()).contains("[Round 2]"));
    }

    #[test]
    fn test_set_level() {
        let dir = TempDir::new().unwrap();
        let (mut logger, _, _) = logger_in(&dir, false);

        logger.set_level("warn");
        assert_eq!(logger.level(), Severity::Warn);
        logger.set_level(4);
        assert_eq!(logger.level(), Severity::Warn);
        logger.set_level("bogus");
        assert_eq!(logger.level(), Severity::Debug);
        logger.set_level(Severity::Trace);
        assert_eq!(logger.level(), Severity::Trace);
        logger.set_level(42);
        assert_eq!(logger.level(), Severity::Debug);
    }

    #[test]
    fn test_default_level_applies_to_log() {
        let dir = TempDir::new().unwrap();
        let (mut logger, _, _) = logger_in(&dir, false);
        logger.set_level("trace");
        logger.log("x", &[]).unwrap();
        assert!(last_line(&logger).contains("[App TRACE]"));
    }

    #[test]
    fn test_set_file_suffix() {
        let dir = TempDir::new().unwrap();
        let (mut logger, _, _) = logger_in(&dir, false);

        logger.set_file_suffix("%Y-%m");
        assert_eq!(logger.file_suffix(), "%Y-%m");
        let month = Local::now().format("%Y-%m").to_string();
        assert!(logger
            .log_file_path()
            .ends_with(format!("App_{}.log", month)));

        logger.set_file_suffix("");
        assert_eq!(logger.file_suffix(), DEFAULT_FILE_SUFFIX);
        logger.set_file_suffix("%!");
        assert_eq!(logger.file_suffix(), DEFAULT_FILE_SUFFIX);
    }

    #[test]
    fn test_unrenderable_file_suffix_falls_back() {
        let dir = TempDir::new().unwrap();
        let (mut logger, _, _) = logger_in(&dir, false);

        logger.set_file_suffix("%#z");
        assert_eq!(logger.file_suffix(), DEFAULT_FILE_SUFFIX);
        logger.log("still writable", &[]).unwrap();
        assert!(last_line(&logger).ends_with("still writable"));
    }

    #[test]
    fn test_constructor_falls_back_on_invalid_file_suffix() {
        let dir = TempDir::new().unwrap();
        for bad in ["", "%!", "%#z"] {
            let logger = Logger::new(
                LoggerConfig::new("A")
                    .with_directory(dir.path())
                    .with_file_suffix(bad),
            )
            .unwrap();
            assert_eq!(logger.file_suffix(), DEFAULT_FILE_SUFFIX);
            assert!(logger.log_file_path().exists());
        }
    }

    #[test]
    fn test_expect_err_result_logs() {
        let dir = TempDir::new().unwrap();
        let (logger, _, _) = logger_in(&dir, false);

        let result = logger
            .expect(Err::<(), _>("boom"), "lookup failed: %s", &fmt_args!["warn", "key"])
            .unwrap();

        assert_eq!(result, Err("boom"));
        assert!(last_line(&logger).ends_with("lookup failed: key"));
        assert!(last_line(&logger).contains("[App WARN.]"));
        assert!(logger.expect(Ok::<u8, ()>(1), "unused", &[]).unwrap().is_ok());
    }

    #[test]
    fn test_terminal_level_write_failure_returns_error_without_shutdown() {
        let dir = TempDir::new().unwrap();
        let logs = dir.path().join("logs");
        fs::create_dir(&logs).unwrap();
        let shutdowns: Shutdowns = Arc::default();
        let recorder = Arc::clone(&shutdowns);
        let logger = Logger::new(LoggerConfig::new("Gone").with_directory(&logs))
            .unwrap()
            .with_shutdown_hook(move |level: Severity, code: i32| {
                recorder.lock().unwrap().push((level, code))
            });

        fs::remove_dir_all(&logs).unwrap();
        let err = logger.log_at(Severity::Fatal, "lost", &[]).unwrap_err();

        assert!(matches!(err, LoggerError::Io(_)));
        assert!(shutdowns.lock().unwrap().is_empty());
    }

    #[test]
    fn test_bad_template_is_format_error() {
        let dir = TempDir::new().unwrap();
        let (logger, _, _) = logger_in(&dir, false);
        let before = fs::read_to_string(logger.log_file_path()).unwrap();
        let err = logger.log("%d items", &fmt_args!["info"]).unwrap_err();
        assert!(matches!(err, LoggerError::Format(_)));
        assert_eq!(fs::read_to_string(logger.log_file_path()).unwrap(), before);
    }

    #[test]
    fn test_loggers_with_different_namespaces_use_different_files() {
        let dir = TempDir::new().unwrap();
        let a = Logger::new(LoggerConfig::new("A").with_directory(dir.path())).unwrap();
        let b = Logger::new(LoggerConfig::new("B").with_directory(dir.path())).unwrap();
        a.log("from a", &[]).unwrap();
        b.log("from b", &[]).unwrap();
        assert_ne!(a.log_file_path(), b.log_file_path());
        assert!(last_line(&a).ends_with("from a"));
        assert!(last_line(&b).ends_with("from b"));
    }
}
