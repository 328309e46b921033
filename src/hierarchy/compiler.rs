//! Configuration compiler.
//!
//! # Responsibilities
//! - Validate a raw document into a `LoggingConfig`
//! - Resolve every destination to a sink
//! - Build a fresh tree and swap it into the registry
//!
//! # Design Decisions
//! - The new tree is built off to the side; the registry only changes on
//!   success, so a bad document leaves the previous configuration intact
//! - The swap discards every previous node and sink (no stale file handles)
//! - Root starts with a single stdout appender; an explicit list replaces it

use std::sync::Arc;

use serde_json::Value;

use crate::appender::{AppenderResolver, AppenderSpec};
use crate::config::{validate_config, LoggingConfig};
use crate::error::Result;
use crate::hierarchy::node::{Hierarchy, LoggerNode};
use crate::hierarchy::registry::LoggerRegistry;
use crate::observability::metrics;

/// Compile `raw` into `registry`.
pub fn compile(registry: &LoggerRegistry, raw: Option<&Value>) -> Result<()> {
    let raw = match raw {
        None | Some(Value::Null) => {
            registry.reset();
            metrics::record_compilation("reset");
            return Ok(());
        }
        Some(raw) => raw,
    };

    let built = validate_config(raw).and_then(|config| {
        let tree = build(&config)?;
        Ok((config, tree))
    });

    match built {
        Ok((config, tree)) => {
            registry.install(tree, Some(Arc::new(raw.clone())));
            metrics::record_compilation("ok");
            tracing::info!(
                root_level = %config.root.level(),
                components = config.components.len(),
                "Logging configured"
            );
            Ok(())
        }
        Err(e) => {
            metrics::record_compilation("error");
            tracing::error!(error = %e, "Logging configuration rejected");
            Err(e)
        }
    }
}

/// Build a tree from a validated configuration.
pub fn build(config: &LoggingConfig) -> Result<Hierarchy> {
    let mut resolver = AppenderResolver::new();

    let mut root = LoggerNode::root(config.root.level());
    root.appenders = match config.root.appenders() {
        Some(specs) => resolver.resolve_all(specs)?,
        None => vec![resolver.resolve(&AppenderSpec::Stdout)?],
    };
    let mut tree = Hierarchy::with_root(root);

    for (component, spec) in &config.components {
        let node = tree.node_mut(component);
        node.level = Some(spec.level());
        if let Some(specs) = spec.appenders() {
            node.appenders = resolver.resolve_all(specs)?;
            node.additive = false;
        }
        tracing::debug!(
            component = %component,
            level = %spec.level(),
            appenders = node.appenders.len(),
            additive = node.additive,
            "Logger compiled"
        );
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appender::AppenderKind;
    use crate::config::LoggerSpec;
    use crate::error::Error;
    use crate::severity::Severity;
    use serde_json::json;

    #[test]
    fn test_compile_none_resets() {
        let registry = LoggerRegistry::new();
        registry.compile(Some(&json!({"default": "debug", "a": "warn"}))).unwrap();

        compile(&registry, None).unwrap();
        assert!(registry.loggers().is_empty());
        assert!(registry.current_config().is_none());
        assert!(registry.root().appenders().is_empty());

        registry.compile(Some(&json!({"default": "debug"}))).unwrap();
        compile(&registry, Some(&Value::Null)).unwrap();
        assert_eq!(registry.root().level(), Severity::Info);
    }

    #[test]
    fn test_build_root_default_stdout() {
        let tree = build(&LoggingConfig::default()).unwrap();
        assert_eq!(tree.root().appender_kinds(), vec![AppenderKind::Stdout]);
        assert_eq!(tree.root().level, Some(Severity::Info));
    }

    #[test]
    fn test_build_root_explicit_list_replaces_stdout() {
        let config = LoggingConfig {
            root: LoggerSpec::Routed {
                level: Severity::Error,
                appenders: vec![AppenderSpec::Stderr],
            },
            components: vec![],
        };
        let tree = build(&config).unwrap();
        assert_eq!(tree.root().appender_kinds(), vec![AppenderKind::Stderr]);
        assert!(tree.root().additive);
    }

    #[test]
    fn test_shared_file_between_components() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let path_str = path.to_str().unwrap();

        let registry = LoggerRegistry::new();
        registry
            .compile(Some(&json!({
                "a": ["info", path_str],
                "b": ["info", path_str]
            })))
            .unwrap();

        let a = registry.get("a").appenders();
        let b = registry.get("b").appenders();
        assert!(Arc::ptr_eq(&a[0], &b[0]));
    }

    #[test]
    fn test_unopenable_file_aborts_compile() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LoggerRegistry::new();
        registry.compile(Some(&json!({"default": "warn"}))).unwrap();

        let err = registry
            .compile(Some(&json!({"x": ["info", dir.path().to_str().unwrap()]})))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(registry.root().level(), Severity::Warning);
    }
}
