//! Severity levels
//!
//! Seven fixed levels, ordinal 0 through 6. Every level has a five character
//! display name (short names are padded with '.') and a console color.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Other = 0,
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
}

impl Severity {
    /// All levels in ordinal order
    pub const ALL: [Severity; 7] = [
        Severity::Other,
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Level used when a call does not name one
    pub const DEFAULT: Severity = Severity::Debug;

    /// Numeric ordinal (0-6)
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a level by ordinal
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Display name as written into log lines
    pub fn name(self) -> &'static str {
        match self {
            Severity::Other => "OTHER",
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO.",
            Severity::Warn => "WARN.",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Console color of the level name
    pub fn color(self) -> Color {
        match self {
            Severity::Other => Color::DarkGrey,
            Severity::Trace => Color::Green,
            Severity::Debug => Color::Cyan,
            Severity::Info => Color::Blue,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Fatal => Color::Magenta,
        }
    }

    /// Whether logging at this level ends the process
    pub fn is_terminal(self) -> bool {
        self >= Severity::Error
    }

    /// Match a level name, ignoring case and trailing punctuation
    ///
    /// `"info"`, `"INFO"` and `"Info."` all resolve to [`Severity::Info`].
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = input
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_punctuation());
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|level| level.name().trim_end_matches('.').eq_ignore_ascii_case(wanted))
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown severity '{}'", s))
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Severity::Trace,
            tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warn,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}

/// A level as supplied by a caller: an ordinal or a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelArg {
    Ordinal(i64),
    Name(String),
}

impl LevelArg {
    /// Resolve to a known level, if any
    pub fn resolve(&self) -> Option<Severity> {
        match self {
            LevelArg::Ordinal(n) => Severity::from_ordinal(*n),
            LevelArg::Name(name) => Severity::parse(name),
        }
    }
}

impl From<i64> for LevelArg {
    fn from(n: i64) -> Self {
        LevelArg::Ordinal(n)
    }
}

impl From<i32> for LevelArg {
    fn from(n: i32) -> Self {
        LevelArg::Ordinal(n.into())
    }
}

impl From<u8> for LevelArg {
    fn from(n: u8) -> Self {
        LevelArg::Ordinal(n.into())
    }
}

impl From<&str> for LevelArg {
    fn from(name: &str) -> Self {
        LevelArg::Name(name.to_string())
    }
}

impl From<String> for LevelArg {
    fn from(name: String) -> Self {
        LevelArg::Name(name)
    }
}

impl From<Severity> for LevelArg {
    fn from(level: Severity) -> Self {
        LevelArg::Ordinal(level.ordinal().into())
    }
}
