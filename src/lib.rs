//! Hierarchical logging configured from data, plus a call-tracing proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!   {"default": "info", "net": ["debug", "stderr", "/var/log/net.log"]}
//!        │
//!        ▼
//!   config (load, validate) ──▶ hierarchy::compiler ──▶ LoggerRegistry
//!                                   │                        │
//!                           appender::resolver         get("net::http")
//!                                                            │
//!                                                            ▼
//!   TracingProxy<T> ── call("put", ..) ──▶ target ──▶ Logger::info(trace)
//!                                                            │
//!                                              own appenders, then parents
//!                                              while additive
//! ```

pub mod appender;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod severity;

pub use appender::{Appender, AppenderKind, AppenderSpec, MemoryAppender, Record, SinkHandle};
pub use config::{ConfigSource, LoggerSpec, LoggingConfig};
pub use error::{Error, Result};
pub use hierarchy::{registry, Logger, LoggerRegistry};
pub use lifecycle::{bootstrap, init, BootstrapOptions};
pub use proxy::{method, Call, Dispatch, Method, MethodTable, TracingProxy};
pub use severity::Severity;
