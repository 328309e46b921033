//! Shared utilities for integration tests.

use std::sync::Arc;

use serde_json::Value;

use logweave::{LoggerRegistry, MemoryAppender};

/// A fresh registry compiled from `config`.
#[allow(dead_code)]
pub fn compiled(config: Value) -> LoggerRegistry {
    let registry = LoggerRegistry::new();
    registry.compile(Some(&config)).expect("config should compile");
    registry
}

/// Attach an in-memory sink to `component` and return it.
#[allow(dead_code)]
pub fn capture(registry: &LoggerRegistry, component: &str) -> MemoryAppender {
    let sink = MemoryAppender::new();
    registry.get(component).add_appender(Arc::new(sink.clone()));
    sink
}

/// Path inside `dir` as an owned string, for embedding in JSON configs.
#[allow(dead_code)]
pub fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}
