//! Startup preconditions for the persistent storage directories.
//!
//! Both persistent directories (readings and logs) must exist and be writable
//! before the endpoint binds. Creation is idempotent and never touches
//! pre-existing contents, since the directories may arrive pre-populated by a
//! mounted volume. Any failure here is fatal: the process exits non-zero
//! rather than limping into unpredictable write failures later.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{StorageConfig, LOG_FILE_NAME};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to create storage directory '{path}': {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("Storage directory '{path}' is not writable: {source}")]
    NotWritable { path: PathBuf, source: io::Error },

    #[error("Failed to open log file '{path}': {source}")]
    LogFile { path: PathBuf, source: io::Error },
}

/// Create (if absent) and verify both persistent directories.
pub fn init_storage(storage: &StorageConfig) -> Result<(), StartupError> {
    ensure_writable_dir(&storage.readings_dir)?;
    ensure_writable_dir(&storage.logs_dir)?;
    Ok(())
}

/// Open the service log file (append mode) inside the logs directory.
///
/// Returned as `Arc<File>` for use as a `tracing_subscriber` writer.
pub fn open_log_file(storage: &StorageConfig) -> Result<Arc<File>, StartupError> {
    let path = storage.logs_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| StartupError::LogFile {
            path: path.clone(),
            source,
        })?;
    Ok(Arc::new(file))
}

/// Idempotently create a directory and prove it is writable by creating and
/// removing a uniquely-named probe file.
fn ensure_writable_dir(dir: &Path) -> Result<(), StartupError> {
    std::fs::create_dir_all(dir).map_err(|source| StartupError::Create {
        path: dir.to_path_buf(),
        source,
    })?;

    let probe = dir.join(format!(".writable.{}", Uuid::new_v4()));
    std::fs::write(&probe, b"")
        .and_then(|()| std::fs::remove_file(&probe))
        .map_err(|source| StartupError::NotWritable {
            path: dir.to_path_buf(),
            source,
        })?;

    Ok(())
}
