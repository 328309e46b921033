//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! This crate's own diagnostics:
//!     tracing macros → logging.rs (fmt layer on stderr)
//!
//! Application tracing events:
//!     tracing macros → bridge.rs (HierarchyLayer)
//!     → registry.get(event target) → appenders
//!
//! Counters:
//!     compiler / logger / proxy → metrics.rs → `metrics` facade
//! ```
//!
//! # Design Decisions
//! - No exporter is installed; the host application owns the recorder
//! - The bridge never re-ingests this crate's own events

pub mod bridge;
pub mod logging;
pub mod metrics;

pub use bridge::HierarchyLayer;
pub use logging::init_tracing;
