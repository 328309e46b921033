//! Logger handles handed out by the registry.

use std::fmt;
use std::sync::Arc;

use crate::appender::{AppenderKind, Record, SinkHandle};
use crate::config::ROOT_COMPONENT;
use crate::hierarchy::node::{Hierarchy, ROOT_DISPLAY_NAME};
use crate::hierarchy::registry::LoggerRegistry;
use crate::observability::metrics;
use crate::severity::Severity;

/// A handle to one component's logger.
///
/// Handles hold a name, not a node: every call resolves the node in the
/// registry's current tree, so a handle taken before a recompile follows
/// the new configuration.
#[derive(Clone)]
pub struct Logger {
    registry: LoggerRegistry,
    name: Arc<str>,
}

impl Logger {
    pub(crate) fn new(registry: LoggerRegistry, name: &str) -> Self {
        Self {
            registry,
            name: Arc::from(name),
        }
    }

    pub(crate) fn root(registry: LoggerRegistry) -> Self {
        Self::new(registry, ROOT_COMPONENT)
    }

    /// Component name (`"default"` for root).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        Hierarchy::is_root(&self.name)
    }

    /// Effective severity threshold.
    pub fn level(&self) -> Severity {
        self.registry.read().effective_level(&self.name)
    }

    /// Level set on this node itself, if any.
    pub fn configured_level(&self) -> Option<Severity> {
        self.registry
            .read()
            .node(&self.name)
            .and_then(|node| node.level)
    }

    /// This node's own appenders (not the inherited ones).
    pub fn appenders(&self) -> Vec<SinkHandle> {
        self.registry
            .read()
            .node(&self.name)
            .map(|node| node.appenders.clone())
            .unwrap_or_default()
    }

    pub fn appender_kinds(&self) -> Vec<AppenderKind> {
        self.appenders().iter().map(|a| a.kind()).collect()
    }

    /// Every appender a record from this logger reaches.
    pub fn effective_appenders(&self) -> Vec<SinkHandle> {
        self.registry
            .read()
            .route(&self.name)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn additive(&self) -> bool {
        self.registry
            .read()
            .node(&self.name)
            .map(|node| node.additive)
            .unwrap_or(true)
    }

    /// The parent logger; `None` for root.
    pub fn parent(&self) -> Option<Logger> {
        let parent = self.registry.read().parent_name(&self.name)?.to_string();
        Some(Logger::new(self.registry.clone(), &parent))
    }

    /// Attach an extra sink to this node, creating the node if needed.
    pub fn add_appender(&self, sink: SinkHandle) {
        self.registry.write().node_mut(&self.name).appenders.push(sink);
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Emit a record. Sink failures are reported and otherwise ignored.
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        let tree = self.registry.read();
        if severity < tree.effective_level(&self.name) {
            return;
        }

        let component = if self.is_root() {
            ROOT_DISPLAY_NAME
        } else {
            self.name()
        };
        let record = Record::new(severity, component, message.to_string());

        for sink in tree.route(&self.name) {
            if let Err(e) = sink.append(&record) {
                metrics::record_appender_error();
                tracing::warn!(
                    component = %self.name,
                    appender = %sink.kind(),
                    error = %e,
                    "Failed to write log record"
                );
            }
        }
        metrics::record_emitted(severity);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(Severity::Fatal, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appender::MemoryAppender;
    use serde_json::json;

    fn capture(registry: &LoggerRegistry, component: &str) -> MemoryAppender {
        let sink = MemoryAppender::new();
        registry.get(component).add_appender(Arc::new(sink.clone()));
        sink
    }

    #[test]
    fn test_level_filtering() {
        let registry = LoggerRegistry::new();
        registry.compile(Some(&json!({"default": ["warning"]}))).unwrap();
        let sink = capture(&registry, "default");

        let logger = registry.get("app");
        logger.info("dropped");
        logger.warning("kept");
        logger.fatal("also kept");

        assert_eq!(sink.messages(), vec!["kept", "also kept"]);
        assert!(!logger.is_enabled(Severity::Debug));
        assert!(logger.is_enabled(Severity::Error));
    }

    #[test]
    fn test_additive_propagation_reaches_root() {
        let registry = LoggerRegistry::new();
        registry
            .compile(Some(&json!({"default": ["debug"], "app": "debug"})))
            .unwrap();
        let root_sink = capture(&registry, "default");
        let app_sink = capture(&registry, "app");

        registry.get("app::db").debug("query");

        assert_eq!(app_sink.messages(), vec!["query"]);
        assert_eq!(root_sink.messages(), vec!["query"]);
        assert_eq!(root_sink.records()[0].component, "app::db");
    }

    #[test]
    fn test_non_additive_stops_propagation() {
        let registry = LoggerRegistry::new();
        registry
            .compile(Some(&json!({"default": ["debug"], "net": ["debug"]})))
            .unwrap();
        let root_sink = capture(&registry, "default");
        let net_sink = capture(&registry, "net");

        registry.get("net").info("packet");

        assert_eq!(net_sink.len(), 1);
        assert!(root_sink.is_empty());
    }

    #[test]
    fn test_ancestor_level_not_rechecked() {
        let registry = LoggerRegistry::new();
        registry
            .compile(Some(&json!({"default": ["error"], "app": "debug"})))
            .unwrap();
        let root_sink = capture(&registry, "default");

        registry.get("app").debug("verbose");

        assert_eq!(root_sink.messages(), vec!["verbose"]);
    }

    #[test]
    fn test_root_records_use_display_name() {
        let registry = LoggerRegistry::new();
        registry.compile(Some(&json!({"default": ["info"]}))).unwrap();
        let sink = capture(&registry, "default");

        registry.root().info("hello");
        assert_eq!(sink.records()[0].component, ROOT_DISPLAY_NAME);
    }

    #[test]
    fn test_parent_lookup() {
        let registry = LoggerRegistry::new();
        registry.compile(Some(&json!({"app": "debug"}))).unwrap();

        let parent = registry.get("app::db::pool").parent().unwrap();
        assert_eq!(parent.name(), "app");
        assert!(parent.parent().unwrap().is_root());
        assert!(registry.root().parent().is_none());
    }

    #[test]
    fn test_handle_follows_recompile() {
        let registry = LoggerRegistry::new();
        registry.compile(Some(&json!({"net": "debug"}))).unwrap();
        let net = registry.get("net");
        assert_eq!(net.level(), Severity::Debug);

        registry.compile(Some(&json!({"net": "error"}))).unwrap();
        assert_eq!(net.level(), Severity::Error);
    }
}
