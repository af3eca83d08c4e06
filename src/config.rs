//! Logger configuration
//!
//! Every field has its own default, applied before any override. A config can
//! be built in code with the `with_*` setters or loaded from TOML, in which
//! case each value is type checked against its constructor position.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, Result};
use crate::logging::FormatArg;

/// Default namespace for loggers that do not set one
pub const DEFAULT_NAMESPACE: &str = "Logger";

/// Default date pattern appended to the namespace in file names
pub const DEFAULT_FILE_SUFFIX: &str = "%Y-%m-%d";

/// Default text of the header written at construction
pub const DEFAULT_HEADER: &str = "AUTOGENERATED BY LOGGER";

/// Configuration for a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Name shown in every line and used as the file name prefix
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Directory for log files; empty means the current directory
    #[serde(default)]
    pub directory: PathBuf,

    /// Echo lines to the console with color
    #[serde(default)]
    pub console: bool,

    /// chrono strftime pattern for the per-period file name suffix
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Header template written when the logger is created
    #[serde(default = "default_header")]
    pub header: String,

    /// Positional arguments for `header`
    #[serde(skip)]
    pub header_args: Vec<FormatArg>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_file_suffix() -> String {
    DEFAULT_FILE_SUFFIX.to_string()
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            directory: PathBuf::new(),
            console: false,
            file_suffix: default_file_suffix(),
            header: default_header(),
            header_args: Vec::new(),
        }
    }
}

/// Expected TOML type for each key, in constructor order
const FIELDS: &[(&str, &str)] = &[
    ("namespace", "string"),
    ("directory", "string"),
    ("console", "boolean"),
    ("file_suffix", "string"),
    ("header", "string"),
    ("header_args", "array"),
];

impl LoggerConfig {
    /// Config for `namespace` with every other field defaulted
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn with_file_suffix(mut self, file_suffix: impl Into<String>) -> Self {
        self.file_suffix = file_suffix.into();
        self
    }

    /// Set the construction header and its arguments
    pub fn with_header(mut self, header: impl Into<String>, args: Vec<FormatArg>) -> Self {
        self.header = header.into();
        self.header_args = args;
        self
    }

    /// Parse a TOML document, checking every known key's type
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| LoggerError::Config(e.to_string()))?;

        for (index, (name, expected)) in FIELDS.iter().enumerate() {
            if let Some(value) = table.get(*name) {
                if value.type_str() != *expected {
                    return Err(LoggerError::InvalidArgument {
                        position: index + 1,
                        name: *name,
                        expected: *expected,
                        actual: value.type_str().to_string(),
                    });
                }
            }
        }

        let header_args = match table.get("header_args") {
            Some(toml::Value::Array(values)) => values
                .iter()
                .map(|v| toml_to_arg(v, FIELDS.len()))
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        let mut config: LoggerConfig = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| LoggerError::Config(e.to_string()))?;
        config.header_args = header_args;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML (header arguments are not persisted)
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LoggerError::Config(e.to_string()))
    }
}

fn toml_to_arg(value: &toml::Value, position: usize) -> Result<FormatArg> {
    match value {
        toml::Value::String(s) => Ok(FormatArg::Str(s.clone())),
        toml::Value::Integer(n) => Ok(FormatArg::Int(*n)),
        toml::Value::Float(v) => Ok(FormatArg::Float(*v)),
        toml::Value::Boolean(b) => Ok(FormatArg::Bool(*b)),
        other => Err(LoggerError::InvalidArgument {
            position,
            name: "header_args",
            expected: "string, integer, float or boolean elements",
            actual: other.type_str().to_string(),
        }),
    }
}

/// Whether `pattern` is a usable file suffix date pattern
///
/// Some chrono specifiers parse but cannot be rendered (`%#z`), so the
/// pattern is also rendered once against the current time.
pub fn is_valid_file_suffix(pattern: &str) -> bool {
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", Local::now().format(pattern)).is_ok()
}
