//! Metrics collection.
//!
//! # Metrics
//! - `logweave_compilations_total` (counter): compile attempts by outcome
//! - `logweave_records_total` (counter): records emitted by level
//! - `logweave_appender_errors_total` (counter): failed sink writes
//! - `logweave_proxy_calls_total` (counter): traced calls by method
//! - `logweave_proxy_resolutions_total` (counter): proxy cache misses
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no exporter is installed here
//! - Without a recorder every call is a no-op

use crate::severity::Severity;

pub fn record_compilation(outcome: &'static str) {
    metrics::counter!("logweave_compilations_total", "outcome" => outcome).increment(1);
}

pub fn record_emitted(severity: Severity) {
    metrics::counter!("logweave_records_total", "level" => severity.as_str()).increment(1);
}

pub fn record_appender_error() {
    metrics::counter!("logweave_appender_errors_total").increment(1);
}

pub fn record_proxy_call(method: &str) {
    metrics::counter!("logweave_proxy_calls_total", "method" => method.to_string()).increment(1);
}

pub fn record_proxy_resolution() {
    metrics::counter!("logweave_proxy_resolutions_total").increment(1);
}
