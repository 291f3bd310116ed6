//! File appender implementation
//!
//! The log file is prepared synchronously at initialization and appended to
//! asynchronously with `tokio::fs`. Appends are serialized so concurrent
//! dispatches never interleave inside a line.

use crate::core::{AsyncAppender, LogRecord, LoggerError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub struct FileAppender {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileAppender {
    /// Prepare `path` and return an appender for it.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Filesystem`] if the parent directory or the
    /// file cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::prepare(&path)?;

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Create missing parent directories and an empty file if absent.
    ///
    /// An existing file is left untouched, whatever its contents.
    pub fn prepare(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| LoggerError::filesystem(parent, e))?;
            }
        }

        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::filesystem(path, e))?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AsyncAppender for FileAppender {
    async fn append(&self, line: &str, _record: &LogRecord) -> Result<()> {
        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| LoggerError::file_append(&self.path, e))?;

        file.write_all(output.as_bytes())
            .await
            .map_err(|e| LoggerError::file_append(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| LoggerError::file_append(&self.path, e))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
