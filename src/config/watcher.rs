//! Configuration file watcher for hot reload.
//!
//! # Responsibilities
//! - Notice when the logging config file is written or replaced
//! - Forward each new document that validates, once
//!
//! # Design Decisions
//! - The parent directory is watched, not the file: editors that save by
//!   rename would otherwise detach the watch after the first save
//! - A document equal to the last forwarded one is not sent again, so the
//!   burst of events from a single save yields at most one reload

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::validation::validate_config;
use crate::error::Result;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<Value>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for reloaded documents. Only
    /// documents that pass validation are sent.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<Value>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching on notify's background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher> {
        let directory = watch_directory(&self.path);
        let mut handler = ChangeHandler::new(self.path.clone(), self.update_tx);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    handler.on_event(&event);
                }
                Err(e) => tracing::error!(error = %e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&directory, RecursiveMode::NonRecursive)?;

        tracing::info!(
            path = %self.path.display(),
            directory = %directory.display(),
            "Logging config watcher started"
        );
        Ok(watcher)
    }
}

fn watch_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Turns raw filesystem events into validated, deduplicated documents.
struct ChangeHandler {
    path: PathBuf,
    file_name: Option<OsString>,
    last_sent: Option<Value>,
    tx: mpsc::UnboundedSender<Value>,
}

impl ChangeHandler {
    fn new(path: PathBuf, tx: mpsc::UnboundedSender<Value>) -> Self {
        // Seed with the document on disk so a touch without edits is quiet.
        let last_sent = load_config(&path)
            .ok()
            .filter(|raw| validate_config(raw).is_ok());
        Self {
            file_name: path.file_name().map(OsString::from),
            path,
            last_sent,
            tx,
        }
    }

    fn concerns_config(&self, event: &Event) -> bool {
        let Some(file_name) = &self.file_name else {
            return false;
        };
        event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
    }

    /// Handle one event. Returns true when a document was forwarded.
    fn on_event(&mut self, event: &Event) -> bool {
        if !(event.kind.is_modify() || event.kind.is_create()) || !self.concerns_config(event) {
            return false;
        }

        let raw = match load_config(&self.path)
            .and_then(|raw| validate_config(&raw).map(|_| raw))
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to reload logging config, keeping current configuration"
                );
                return false;
            }
        };

        if self.last_sent.as_ref() == Some(&raw) {
            tracing::debug!(path = %self.path.display(), "Logging config unchanged");
            return false;
        }

        tracing::info!(path = %self.path.display(), "Logging config change detected, reloading");
        self.last_sent = Some(raw.clone());
        self.tx.send(raw).is_ok()
    }
}
