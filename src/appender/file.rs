//! File sink.
//!
//! # Responsibilities
//! - Open (or create) the target file in append mode
//! - Create missing parent directories
//! - Serialize concurrent writers behind one mutex
//!
//! # Design Decisions
//! - Backed by a never-rotating `tracing_appender` file, so the file name is
//!   exactly the configured path
//! - Each record is written as one `write_all` of a complete line

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::appender::{layout, Appender, AppenderKind, Record};
use crate::error::{Error, Result};

/// Appends records to a file, one line each.
pub struct FileAppender {
    path: PathBuf,
    writer: Mutex<RollingFileAppender>,
}

impl FileAppender {
    /// Open `path` for appending.
    pub fn open(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::io(path, io::Error::from(io::ErrorKind::InvalidInput)))?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let writer = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(directory)
            .map_err(|e| Error::io(path, io::Error::other(e)))?;

        tracing::debug!(path = %path.display(), "File appender opened");

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(writer),
        })
    }
}

impl fmt::Debug for FileAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAppender")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Appender for FileAppender {
    fn append(&self, record: &Record) -> io::Result<()> {
        let mut line = layout::format_line(record);
        line.push('\n');
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }

    fn kind(&self) -> AppenderKind {
        AppenderKind::File(self.path.clone())
    }
}
