//! Standard stream sinks.

use std::io::Write;

use crate::appender::{layout, Appender, AppenderKind, Record};

/// Writes records to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutAppender;

impl Appender for StdoutAppender {
    fn append(&self, record: &Record) -> std::io::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", layout::format_line(record))
    }

    fn flush(&self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }

    fn kind(&self) -> AppenderKind {
        AppenderKind::Stdout
    }
}

/// Writes records to the process's standard error.
#[derive(Debug, Default)]
pub struct StderrAppender;

impl Appender for StderrAppender {
    fn append(&self, record: &Record) -> std::io::Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", layout::format_line(record))
    }

    fn flush(&self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }

    fn kind(&self) -> AppenderKind {
        AppenderKind::Stderr
    }
}
