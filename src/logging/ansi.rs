//! ANSI escape handling
//!
//! File output never contains escape sequences; console output is styled with
//! crossterm and keeps whatever sequences the caller embedded in the message.

use std::sync::OnceLock;

use crossterm::style::{Color, Stylize};
use regex::Regex;

use super::severity::Severity;

fn escape_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // CSI sequences (SGR included), OSC strings, then two-byte escapes
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]")
            .expect("escape pattern is a valid regex")
    })
}

/// Remove every ANSI escape sequence from `text`
pub fn strip_ansi(text: &str) -> String {
    if !text.contains('\x1b') {
        return text.to_string();
    }
    escape_pattern().replace_all(text, "").into_owned()
}

/// Styled console rendition of a log line
///
/// Dim time, bold bracket with namespace and level, level name in its color,
/// message unstyled and untouched.
pub fn console_line(
    time: &str,
    namespace: &str,
    level: Severity,
    site: &str,
    message: &str,
) -> String {
    format!(
        "{} {}{} {}{} {} {}",
        time.dim(),
        "[".bold(),
        namespace.bold(),
        level.name().with(level.color()).bold(),
        "]".bold(),
        format!("{}:", site).dim(),
        message
    )
}

/// Styled console rendition of a header line
pub fn console_header(time: &str, text: &str, color: Option<Color>) -> String {
    let bracketed = format!("[{}]", text);
    let bracketed = match color {
        Some(color) => bracketed.with(color).bold(),
        None => bracketed.bold(),
    };
    format!("\n{} {}", time.dim(), bracketed)
}
