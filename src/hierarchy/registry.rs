//! Process-wide logger registry.
//!
//! # Responsibilities
//! - Hand out `Logger` handles by component name
//! - Create nodes lazily on first lookup
//! - Own the reset/compile lifecycle of the tree
//!
//! # Design Decisions
//! - One `RwLock` guards the whole tree: lookups and emission read,
//!   compile/reset swap the tree under the write lock
//! - Poisoned locks are recovered; the tree is only ever replaced whole
//! - The last raw document is published through `ArcSwapOption` so
//!   introspection never touches the lock

use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use arc_swap::ArcSwapOption;
use serde_json::Value;

use crate::error::Result;
use crate::hierarchy::compiler;
use crate::hierarchy::logger::Logger;
use crate::hierarchy::node::Hierarchy;

static GLOBAL: LazyLock<LoggerRegistry> = LazyLock::new(LoggerRegistry::new);

/// The process-wide registry.
pub fn registry() -> &'static LoggerRegistry {
    &GLOBAL
}

#[derive(Debug, Default)]
struct Shared {
    tree: RwLock<Hierarchy>,
    config: ArcSwapOption<Value>,
}

/// Lookup table from component name to logger.
///
/// Cloning is cheap and every clone sees the same tree.
#[derive(Debug, Clone, Default)]
pub struct LoggerRegistry {
    inner: Arc<Shared>,
}

impl LoggerRegistry {
    /// A registry at library defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger for `component`, creating its node if none exists.
    pub fn get(&self, component: &str) -> Logger {
        if !self.read().contains(component) {
            self.write().node_mut(component);
        }
        Logger::new(self.clone(), component)
    }

    /// The root logger.
    pub fn root(&self) -> Logger {
        Logger::root(self.clone())
    }

    /// Rebuild the tree from a raw document. `None` or `null` resets to
    /// library defaults. A failed compile leaves the current tree in place.
    pub fn compile(&self, raw: Option<&Value>) -> Result<()> {
        compiler::compile(self, raw)
    }

    /// Back to library defaults: root at info, no appenders, no other nodes.
    pub fn reset(&self) {
        self.install(Hierarchy::default(), None);
        tracing::debug!("Logger registry reset to defaults");
    }

    /// The last successfully compiled document, if any.
    pub fn current_config(&self) -> Option<Arc<Value>> {
        self.inner.config.load_full()
    }

    /// Names of every non-root node, sorted.
    pub fn loggers(&self) -> Vec<String> {
        self.read().names()
    }

    /// Copy of the current tree.
    pub fn snapshot(&self) -> Hierarchy {
        self.read().clone()
    }

    pub(crate) fn install(&self, tree: Hierarchy, raw: Option<Arc<Value>>) {
        let mut guard = self.write();
        *guard = tree;
        self.inner.config.store(raw);
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Hierarchy> {
        self.inner.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Hierarchy> {
        self.inner.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}
