//! Logger hierarchy subsystem.
//!
//! # Data Flow
//! ```text
//! Compilation:
//!     raw document
//!     → config::validation (LoggingConfig)
//!     → compiler.rs (resolve sinks, build a fresh Hierarchy)
//!     → registry.rs (swap under the write lock)
//!
//! Emission:
//!     registry.get("net::http") → Logger handle
//!     → logger.rs (level check against the effective level)
//!     → node.rs (route: own appenders, then parents while additive)
//!     → appender sinks
//! ```
//!
//! # Design Decisions
//! - Names are `::`-separated; a node's parent is its nearest existing ancestor
//! - Level-only components write through their parent's appenders
//! - Components with explicit destinations are non-additive
//! - Root is configured by the reserved `"default"` entry

pub mod compiler;
pub mod logger;
pub mod node;
pub mod registry;

pub use logger::Logger;
pub use node::{Hierarchy, LoggerNode};
pub use registry::{registry, LoggerRegistry};
