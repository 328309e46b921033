//! Destination resolution.
//!
//! # Responsibilities
//! - Turn an `AppenderSpec` into a live sink
//! - Reuse one handle per stream and per file path within a compilation

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::appender::{
    AppenderSpec, FileAppender, SinkHandle, StderrAppender, StdoutAppender,
};
use crate::error::Result;

/// Resolves destinations to sinks, caching what it has opened.
#[derive(Debug, Default)]
pub struct AppenderResolver {
    stdout: Option<SinkHandle>,
    stderr: Option<SinkHandle>,
    files: HashMap<PathBuf, SinkHandle>,
}

impl AppenderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce (or reuse) the sink for `spec`.
    pub fn resolve(&mut self, spec: &AppenderSpec) -> Result<SinkHandle> {
        let sink = match spec {
            AppenderSpec::Stdout => self
                .stdout
                .get_or_insert_with(|| Arc::new(StdoutAppender))
                .clone(),
            AppenderSpec::Stderr => self
                .stderr
                .get_or_insert_with(|| Arc::new(StderrAppender))
                .clone(),
            AppenderSpec::File(path) => {
                if let Some(existing) = self.files.get(path) {
                    existing.clone()
                } else {
                    let sink: SinkHandle = Arc::new(FileAppender::open(path)?);
                    self.files.insert(path.clone(), sink.clone());
                    sink
                }
            }
        };
        Ok(sink)
    }

    /// Resolve a list of destinations in order.
    pub fn resolve_all(&mut self, specs: &[AppenderSpec]) -> Result<Vec<SinkHandle>> {
        specs.iter().map(|spec| self.resolve(spec)).collect()
    }
}
