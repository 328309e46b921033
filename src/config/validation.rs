//! Configuration validation.
//!
//! # Responsibilities
//! - Check the shape of every entry (string, or list with a string head)
//! - Parse severities and classify destinations
//! - Produce an immutable `LoggingConfig`
//!
//! # Design Decisions
//! - Pure function: `&Value → Result<LoggingConfig>`
//! - Stops at the first bad entry; the error names the component
//! - Runs before the registry is touched, so a bad document changes nothing

use serde_json::Value;

use crate::appender::AppenderSpec;
use crate::config::schema::{LoggerSpec, LoggingConfig, ROOT_COMPONENT};
use crate::error::{Error, Result};
use crate::severity::Severity;

/// Validate a raw document.
pub fn validate_config(raw: &Value) -> Result<LoggingConfig> {
    let entries = match raw {
        Value::Object(entries) => entries,
        other => return Err(Error::NotAMapping(value_kind(other).to_string())),
    };

    let mut config = LoggingConfig::default();
    for (component, value) in entries {
        let spec = validate_entry(component, value)?;
        if component == ROOT_COMPONENT {
            config.root = spec;
        } else {
            config.components.push((component.clone(), spec));
        }
    }

    Ok(config)
}

/// Validate one `component => value` entry.
pub fn validate_entry(component: &str, value: &Value) -> Result<LoggerSpec> {
    match value {
        Value::String(level) => Ok(LoggerSpec::Level(Severity::parse(level)?)),
        Value::Array(items) => {
            let (head, destinations) = items
                .split_first()
                .ok_or_else(|| Error::malformed(component, "empty list, expected a severity first"))?;

            let level = match head {
                Value::String(level) => Severity::parse(level)?,
                other => {
                    return Err(Error::malformed(
                        component,
                        format!("list must start with a severity string, got {}", value_kind(other)),
                    ))
                }
            };

            let appenders = destinations
                .iter()
                .map(AppenderSpec::from_value)
                .collect::<Result<Vec<_>>>()?;

            Ok(LoggerSpec::Routed { level, appenders })
        }
        other => Err(Error::malformed(
            component,
            format!("expected a severity string or a list, got {}", value_kind(other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
