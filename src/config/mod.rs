//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON/TOML) or literal mapping
//!     → loader.rs (read & parse into a raw serde_json::Value)
//!     → validation.rs (shape, severity and destination checks)
//!     → LoggingConfig (validated, immutable)
//!     → hierarchy::compiler builds the logger tree
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new document
//!     → validation.rs validates
//!     → document sent to the owner, who recompiles the registry
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated; changes require a full recompile
//! - `"default"` is the root logger; it may be omitted (root at info)
//! - Syntax errors (serde) are separate from shape errors (validation)

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigSource, Format};
pub use schema::{LoggerSpec, LoggingConfig, ROOT_COMPONENT};
pub use validation::validate_config;
pub use watcher::ConfigWatcher;
