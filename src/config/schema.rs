//! Configuration schema definitions.
//!
//! The document is a mapping from component name to either a severity
//! string or a `[severity, destination, ...]` list. Values are parsed
//! into the types below by `validation.rs`; once built they are never
//! mutated.

use crate::appender::AppenderSpec;
use crate::severity::Severity;

/// Reserved component name that configures the root logger.
pub const ROOT_COMPONENT: &str = "default";

/// How one component is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerSpec {
    /// Level only; output goes through the parent's appenders.
    Level(Severity),

    /// Level plus an explicit, ordered destination list. Replaces the
    /// inherited appenders and stops propagation to the parent.
    Routed {
        level: Severity,
        appenders: Vec<AppenderSpec>,
    },
}

impl LoggerSpec {
    pub fn level(&self) -> Severity {
        match self {
            LoggerSpec::Level(level) => *level,
            LoggerSpec::Routed { level, .. } => *level,
        }
    }

    pub fn appenders(&self) -> Option<&[AppenderSpec]> {
        match self {
            LoggerSpec::Level(_) => None,
            LoggerSpec::Routed { appenders, .. } => Some(appenders),
        }
    }
}

/// A validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Spec for the root logger (`"default"`, or `info` when absent).
    pub root: LoggerSpec,

    /// Every other component in document order.
    pub components: Vec<(String, LoggerSpec)>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            root: LoggerSpec::Level(Severity::Info),
            components: Vec::new(),
        }
    }
}
