//! Call-tracing proxy subsystem.
//!
//! # Data Flow
//! ```text
//! proxy.call("put", Call { args, kwargs, block })
//!     → tracer.rs: method cached?
//!         no  → Dispatch::lookup on the target (slow path), memoize
//!         yes → reuse the memoized forwarding closure
//!     → dispatch.rs: forwarding closure runs against the shared target
//!     → Ok(value)  → one info record on the proxy's logger
//!       Err(e)     → returned to the caller unchanged, nothing logged
//! ```
//!
//! # Design Decisions
//! - No ambient dynamic dispatch in Rust: targets map method names to
//!   closures themselves (`Dispatch`), optionally via a `MethodTable`
//! - Values cross the proxy as `serde_json::Value`, which also renders them
//! - Default component is the target's type path, so traces join the
//!   `::` hierarchy where the type lives

pub mod dispatch;
pub mod tracer;

pub use dispatch::{method, Call, Dispatch, Method, MethodTable};
pub use tracer::TracingProxy;
