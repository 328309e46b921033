//! Diagnostic logging setup for binaries.
//!
//! # Responsibilities
//! - Install the `tracing` subscriber for this crate's own diagnostics
//! - Optionally bridge every other `tracing` event into a registry
//!
//! # Design Decisions
//! - Diagnostics go to stderr, filtered by `RUST_LOG` (default `logweave=info`)
//! - The bridge is unfiltered here; the hierarchy applies component levels

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::hierarchy::LoggerRegistry;
use crate::observability::bridge::HierarchyLayer;

pub const DEFAULT_FILTER: &str = "logweave=info";

/// Install the global subscriber. Returns false if one was already set.
pub fn init_tracing(bridge: Option<LoggerRegistry>) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let diagnostics = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(diagnostics)
        .with(bridge.map(HierarchyLayer::new))
        .try_init()
        .is_ok()
}
