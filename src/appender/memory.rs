//! In-memory sink for tests and introspection.

use std::sync::{Arc, Mutex, PoisonError};

use crate::appender::{Appender, AppenderKind, Record};

/// Keeps every record it receives.
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Captured messages without layout.
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Appender for MemoryAppender {
    fn append(&self, record: &Record) -> std::io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn kind(&self) -> AppenderKind {
        AppenderKind::Memory
    }
}
