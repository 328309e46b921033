//! Output sinks.
//!
//! # Data Flow
//! ```text
//! config destination token ("stdout", "STDERR", "/var/log/app.log")
//!     → AppenderSpec::from_value (classify token)
//!     → resolver.rs (open or reuse a sink)
//!     → SinkHandle attached to a LoggerNode
//!
//! Emission:
//!     Record → layout.rs (single text line)
//!     → console.rs / file.rs / memory.rs
//! ```
//!
//! # Design Decisions
//! - Sinks are shared `Arc<dyn Appender>` handles; one open file per path
//! - Writes are fire-and-forget for the caller; errors are reported, not raised
//! - No rotation or structured output

pub mod console;
pub mod file;
pub mod layout;
pub mod memory;
pub mod resolver;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::severity::Severity;

pub use console::{StderrAppender, StdoutAppender};
pub use file::FileAppender;
pub use memory::MemoryAppender;
pub use resolver::AppenderResolver;

/// A single log record.
#[derive(Debug, Clone)]
pub struct Record {
    pub severity: Severity,
    pub component: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Record {
    pub fn new(severity: Severity, component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            component: component.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A destination records are written to.
pub trait Appender: Send + Sync + fmt::Debug {
    /// Write one record.
    fn append(&self, record: &Record) -> std::io::Result<()>;

    /// Flush buffered output, if any.
    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }

    /// Which kind of destination this is, for introspection.
    fn kind(&self) -> AppenderKind;
}

/// Shared handle to a sink.
pub type SinkHandle = Arc<dyn Appender>;

/// Introspectable identity of a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppenderKind {
    Stdout,
    Stderr,
    File(PathBuf),
    Memory,
}

impl fmt::Display for AppenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppenderKind::Stdout => f.write_str("stdout"),
            AppenderKind::Stderr => f.write_str("stderr"),
            AppenderKind::File(path) => write!(f, "file:{}", path.display()),
            AppenderKind::Memory => f.write_str("memory"),
        }
    }
}

/// A destination as written in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppenderSpec {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl AppenderSpec {
    /// Classify a destination token. The stream keywords ignore ASCII case;
    /// any other non-empty string is a file path.
    pub fn parse(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case("stdout") {
            Ok(AppenderSpec::Stdout)
        } else if token.eq_ignore_ascii_case("stderr") {
            Ok(AppenderSpec::Stderr)
        } else if token.is_empty() {
            Err(Error::UnknownAppenderSpec("empty destination".to_string()))
        } else {
            Ok(AppenderSpec::File(PathBuf::from(token)))
        }
    }

    /// Classify a raw configuration value. Non-strings are rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(token) => AppenderSpec::parse(token),
            other => Err(Error::UnknownAppenderSpec(other.to_string())),
        }
    }
}

impl fmt::Display for AppenderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppenderSpec::Stdout => f.write_str("stdout"),
            AppenderSpec::Stderr => f.write_str("stderr"),
            AppenderSpec::File(path) => write!(f, "{}", path.display()),
        }
    }
}
