//! Reload loop for watched configurations.

use serde_json::Value;
use tokio::sync::{broadcast, mpsc};

use crate::hierarchy::LoggerRegistry;

/// Recompile `registry` for every document received until shutdown fires
/// or the update channel closes. Returns the number of applied reloads.
pub async fn run(
    registry: LoggerRegistry,
    mut updates: mpsc::UnboundedReceiver<Value>,
    mut shutdown: broadcast::Receiver<()>,
) -> usize {
    let mut applied = 0;

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(raw) = update else {
                    tracing::debug!("Config update channel closed");
                    break;
                };
                match registry.compile(Some(&raw)) {
                    Ok(()) => {
                        applied += 1;
                        tracing::info!(reloads = applied, "Logging configuration reloaded");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Reload rejected, keeping current configuration");
                    }
                }
            }
            _ = shutdown.recv() => {
                tracing::info!("Reload loop received shutdown signal, exiting");
                break;
            }
        }
    }

    applied
}
