//! Error types shared by the configuration and hierarchy subsystems.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or compiling a logging configuration.
///
/// The first three variants are configuration errors: they are raised
/// synchronously by `compile` and are meant to abort startup.
#[derive(Debug, Error)]
pub enum Error {
    /// Level token outside the recognized spellings.
    #[error("invalid severity {0:?} (expected debug, info, warn, warning, err, error or fatal)")]
    InvalidSeverity(String),

    /// Destination that is neither a stream keyword nor a file path.
    #[error("unknown appender spec: {0}")]
    UnknownAppenderSpec(String),

    /// Entry that is neither a bare severity nor a `[severity, destinations...]` list.
    #[error("malformed logger spec for {component:?}: {reason}")]
    MalformedLoggerSpec { component: String, reason: String },

    /// Top-level configuration value is not a mapping.
    #[error("logging configuration must be a mapping, got {0}")]
    NotAMapping(String),

    /// Reading a config file or opening a file sink failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(component: &str, reason: impl Into<String>) -> Self {
        Error::MalformedLoggerSpec {
            component: component.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSeverity("loud".into());
        assert!(err.to_string().contains("\"loud\""));

        let err = Error::malformed("bad", "expected a string or a list");
        assert_eq!(
            err.to_string(),
            "malformed logger spec for \"bad\": expected a string or a list"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = Error::io("/nope", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(io.to_string().starts_with("I/O error on /nope"));
        assert!(std::error::Error::source(&io).is_some());
    }
}
