//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! startup:
//!     LOGWEAVE_CONFIG / LOGWEAVE_DEBUG or explicit options
//!     → bootstrap.rs (select source, load, compile once)
//!
//! watch mode:
//!     config::watcher → mpsc channel
//!     → reload.rs (recompile per document until shutdown)
//! ```

pub mod bootstrap;
pub mod reload;

pub use bootstrap::{bootstrap, init, BootstrapOptions};
