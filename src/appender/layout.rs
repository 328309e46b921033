//! Plain-text record layout.

use chrono::SecondsFormat;

use crate::appender::Record;

/// Render a record as one line, without the trailing newline.
///
/// `2026-01-01T12:00:00.000Z INFO  net::http: connection accepted`
pub fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.severity.label(),
        record.component,
        record.message
    )
}
