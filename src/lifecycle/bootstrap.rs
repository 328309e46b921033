//! Startup configuration.
//!
//! # Responsibilities
//! - Pick the configuration source (explicit, environment, built-in)
//! - Compile it into the registry once at process start
//!
//! # Design Decisions
//! - Fail fast: a bad configuration is returned, never defaulted over
//! - Built-in fallback is `{"default": "info"}`, or debug in debug mode

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde_json::{json, Value};

use crate::config::ConfigSource;
use crate::error::Result;
use crate::hierarchy::{registry, LoggerRegistry};

/// Path to a config file, or an inline JSON mapping.
pub const CONFIG_ENV: &str = "LOGWEAVE_CONFIG";

/// Selects the debug fallback when no config is given.
pub const DEBUG_ENV: &str = "LOGWEAVE_DEBUG";

/// Where startup configuration comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootstrapOptions {
    pub source: Option<ConfigSource>,
    pub debug: bool,
}

impl BootstrapOptions {
    /// Read `LOGWEAVE_CONFIG` and `LOGWEAVE_DEBUG`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(CONFIG_ENV).ok(), env::var(DEBUG_ENV).ok())
    }

    /// Build options from raw variable values. A config value starting
    /// with `{` is an inline JSON mapping; anything else is a path.
    pub fn from_vars(config: Option<String>, debug: Option<String>) -> Result<Self> {
        let source = match config.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(inline) if inline.starts_with('{') => {
                Some(ConfigSource::Literal(serde_json::from_str(inline)?))
            }
            Some(path) => Some(ConfigSource::Path(PathBuf::from(path))),
        };

        let debug = debug
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self { source, debug })
    }

    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Built-in document used when no source is configured.
    pub fn fallback(&self) -> Value {
        if self.debug {
            json!({"default": "debug"})
        } else {
            json!({"default": "info"})
        }
    }

    /// The document that bootstrap would compile.
    pub fn resolve(&self) -> Result<Value> {
        match &self.source {
            Some(source) => source.load(),
            None => Ok(self.fallback()),
        }
    }
}

/// Compile the configuration selected by `options` into `registry`.
pub fn bootstrap(registry: &LoggerRegistry, options: &BootstrapOptions) -> Result<()> {
    let raw = options.resolve()?;
    tracing::debug!(
        source = ?options.source,
        debug = options.debug,
        "Bootstrapping logging"
    );
    registry.compile(Some(&raw))
}

static INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Configure the global registry from the environment, once per process.
///
/// Calls after a successful one do nothing. A failed call can be retried.
pub fn init() -> Result<()> {
    let mut initialized = INITIALIZED.lock().unwrap_or_else(PoisonError::into_inner);
    if *initialized {
        return Ok(());
    }
    bootstrap(registry(), &BootstrapOptions::from_env()?)?;
    *initialized = true;
    Ok(())
}
