//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};

/// On-disk document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick the format from the file extension; JSON unless it ends in `.toml`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// Where a configuration comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// A file on disk.
    Path(PathBuf),
    /// An in-memory document.
    Literal(Value),
}

impl ConfigSource {
    /// Classify a raw value: a string is a path to the real document.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(path) => ConfigSource::Path(PathBuf::from(path)),
            other => ConfigSource::Literal(other),
        }
    }

    /// Produce the raw document.
    pub fn load(&self) -> Result<Value> {
        match self {
            ConfigSource::Path(path) => load_config(path),
            ConfigSource::Literal(value) => Ok(value.clone()),
        }
    }
}

/// Read a raw configuration document from `path`.
///
/// Only the syntax is checked here; shape and token errors come from
/// `validation.rs` when the document is compiled.
pub fn load_config(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_str(&content, Format::from_path(path))
}

/// Parse a document held in memory.
pub fn parse_str(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => Ok(serde_json::from_str(content)?),
        Format::Toml => {
            let table: toml::Table = toml::from_str(content)?;
            Ok(serde_json::to_value(table)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("logging.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("logging.TOML")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("logging.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("logging")), Format::Json);
    }

    #[test]
    fn test_parse_toml_matches_json() {
        let toml_doc = r#"
            default = "info"
            net = ["debug", "stderr"]
        "#;
        let from_toml = parse_str(toml_doc, Format::Toml).unwrap();
        assert_eq!(from_toml, json!({"default": "info", "net": ["debug", "stderr"]}));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.json");
        fs::write(&path, r#"{"default": "warn"}"#).unwrap();

        assert_eq!(load_config(&path).unwrap(), json!({"default": "warn"}));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse_str("{", Format::Json), Err(Error::Json(_))));
        assert!(matches!(parse_str("default = ", Format::Toml), Err(Error::Toml(_))));
    }

    #[test]
    fn test_string_value_is_a_path() {
        assert_eq!(
            ConfigSource::from_value(json!("/etc/app/logging.json")),
            ConfigSource::Path(PathBuf::from("/etc/app/logging.json"))
        );
        let literal = json!({"default": "debug"});
        assert_eq!(
            ConfigSource::from_value(literal.clone()).load().unwrap(),
            literal
        );
    }
}
