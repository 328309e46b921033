//! Logger nodes and the name-structured tree that holds them.
//!
//! # Responsibilities
//! - Store per-component level, appenders and additivity
//! - Resolve a component's parent by walking its `::`-separated name
//! - Compute effective level and the appender route for emission
//!
//! # Design Decisions
//! - Parents are found by name, not stored pointers: inserting `a` after
//!   `a::b` exists needs no fix-up
//! - A component without a node behaves like a fresh lazy node

use std::collections::HashMap;

use serde::Serialize;

use crate::appender::{AppenderKind, SinkHandle};
use crate::config::ROOT_COMPONENT;
use crate::severity::Severity;

/// Separator between name segments.
pub const SEPARATOR: &str = "::";

/// Component name printed on records emitted by the root logger.
pub const ROOT_DISPLAY_NAME: &str = "root";

/// A named logger in the hierarchy.
#[derive(Debug, Clone)]
pub struct LoggerNode {
    pub name: String,
    /// `None` inherits from the nearest ancestor. Always set on root.
    pub level: Option<Severity>,
    pub appenders: Vec<SinkHandle>,
    /// Whether records continue to the parent's appenders.
    pub additive: bool,
}

impl LoggerNode {
    /// A node as created on first lookup.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            appenders: Vec::new(),
            additive: true,
        }
    }

    pub fn root(level: Severity) -> Self {
        Self {
            name: ROOT_COMPONENT.to_string(),
            level: Some(level),
            appenders: Vec::new(),
            additive: true,
        }
    }

    pub fn appender_kinds(&self) -> Vec<AppenderKind> {
        self.appenders.iter().map(|a| a.kind()).collect()
    }
}

/// Yields `a::b::c`, `a::b`, `a`.
pub fn name_and_ancestors(name: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(name), |current| {
        current.rsplit_once(SEPARATOR).map(|(parent, _)| parent)
    })
}

/// Serializable view of one node, for introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub name: String,
    pub parent: Option<String>,
    pub level: Option<Severity>,
    pub effective_level: Severity,
    pub additive: bool,
    pub appenders: Vec<String>,
}

/// The whole logger tree.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    root: LoggerNode,
    nodes: HashMap<String, LoggerNode>,
}

impl Default for Hierarchy {
    /// Library baseline: root at info with nowhere to write.
    fn default() -> Self {
        Self::with_root(LoggerNode::root(Severity::Info))
    }
}

impl Hierarchy {
    pub fn with_root(root: LoggerNode) -> Self {
        Self {
            root,
            nodes: HashMap::new(),
        }
    }

    pub fn is_root(name: &str) -> bool {
        name == ROOT_COMPONENT
    }

    pub fn root(&self) -> &LoggerNode {
        &self.root
    }

    /// The node stored under exactly `name`.
    pub fn node(&self, name: &str) -> Option<&LoggerNode> {
        if Self::is_root(name) {
            Some(&self.root)
        } else {
            self.nodes.get(name)
        }
    }

    /// The node for `name`, created with defaults if missing.
    pub fn node_mut(&mut self, name: &str) -> &mut LoggerNode {
        if Self::is_root(name) {
            return &mut self.root;
        }
        self.nodes
            .entry(name.to_string())
            .or_insert_with(|| LoggerNode::new(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Root first, then every other node by name.
    pub fn summary(&self) -> Vec<NodeSummary> {
        std::iter::once(ROOT_COMPONENT.to_string())
            .chain(self.names())
            .filter_map(|name| {
                let node = self.node(&name)?;
                Some(NodeSummary {
                    parent: self.parent_name(&name).map(str::to_string),
                    level: node.level,
                    effective_level: self.effective_level(&name),
                    additive: node.additive,
                    appenders: node.appenders.iter().map(|a| a.kind().to_string()).collect(),
                    name,
                })
            })
            .collect()
    }

    /// Existing nodes from `name` upward, ending with root. Starts at the
    /// node for `name` when it exists.
    pub fn lineage<'s: 'n, 'n>(
        &'s self,
        name: &'n str,
    ) -> Box<dyn Iterator<Item = &'s LoggerNode> + 'n> {
        if Self::is_root(name) {
            return Box::new(std::iter::once(&self.root));
        }
        Box::new(
            name_and_ancestors(name)
                .filter_map(move |n| self.nodes.get(n))
                .chain(std::iter::once(&self.root)),
        )
    }

    /// Name of the parent node, `None` for root.
    pub fn parent_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if Self::is_root(name) {
            return None;
        }
        let parent = name_and_ancestors(name)
            .skip(1)
            .find(|ancestor| self.nodes.contains_key(*ancestor))
            .unwrap_or(ROOT_COMPONENT);
        Some(parent)
    }

    /// Level from the nearest configured node in the lineage.
    pub fn effective_level(&self, name: &str) -> Severity {
        self.lineage(name)
            .find_map(|node| node.level)
            .or(self.root.level)
            .unwrap_or(Severity::Info)
    }

    /// Appenders a record emitted at `name` reaches, in order.
    ///
    /// A missing node is additive with no appenders, so skipping it in the
    /// lineage gives the same route.
    pub fn route(&self, name: &str) -> Vec<&SinkHandle> {
        let mut sinks = Vec::new();
        for node in self.lineage(name) {
            sinks.extend(node.appenders.iter());
            if !node.additive {
                break;
            }
        }
        sinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appender::MemoryAppender;
    use std::sync::Arc;

    fn tree() -> Hierarchy {
        let mut root = LoggerNode::root(Severity::Warning);
        root.appenders.push(Arc::new(MemoryAppender::new()));
        let mut h = Hierarchy::with_root(root);
        h.node_mut("app").level = Some(Severity::Debug);
        h.node_mut("app::db::pool");
        h
    }

    #[test]
    fn test_ancestor_names() {
        let names: Vec<&str> = name_and_ancestors("a::b::c").collect();
        assert_eq!(names, vec!["a::b::c", "a::b", "a"]);
    }

    #[test]
    fn test_parent_skips_missing_intermediates() {
        let h = tree();
        assert_eq!(h.parent_name("app::db::pool"), Some("app"));
        assert_eq!(h.parent_name("app"), Some(ROOT_COMPONENT));
        assert_eq!(h.parent_name("other"), Some(ROOT_COMPONENT));
        assert_eq!(h.parent_name(ROOT_COMPONENT), None);
    }

    #[test]
    fn test_effective_level_inherits() {
        let h = tree();
        assert_eq!(h.effective_level("app::db::pool"), Severity::Debug);
        assert_eq!(h.effective_level("app::never::seen"), Severity::Debug);
        assert_eq!(h.effective_level("other"), Severity::Warning);
    }

    #[test]
    fn test_route_stops_at_non_additive() {
        let mut h = tree();
        assert_eq!(h.route("app::db::pool").len(), 1);

        let app = h.node_mut("app");
        app.additive = false;
        app.appenders.push(Arc::new(MemoryAppender::new()));
        app.appenders.push(Arc::new(MemoryAppender::new()));

        assert_eq!(h.route("app::db::pool").len(), 2);
        assert_eq!(h.route("other").len(), 1);
    }

    #[test]
    fn test_route_with_owned_name() {
        let h = tree();
        let name = format!("app::{}", "worker");
        let sinks = h.route(&name);
        drop(name);
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].kind(), crate::appender::AppenderKind::Memory);
    }

    #[test]
    fn test_summary_lists_root_first() {
        let summary = tree().summary();
        let names: Vec<&str> = summary.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![ROOT_COMPONENT, "app", "app::db::pool"]);
        assert_eq!(summary[0].appenders, vec!["memory".to_string()]);
        assert_eq!(summary[2].parent.as_deref(), Some("app"));
        assert_eq!(summary[2].level, None);
        assert_eq!(summary[2].effective_level, Severity::Debug);
    }

    #[test]
    fn test_baseline_writes_nowhere() {
        let h = Hierarchy::default();
        assert_eq!(h.effective_level("anything"), Severity::Info);
        assert!(h.route("anything").is_empty());
        assert!(h.names().is_empty());
    }
}
