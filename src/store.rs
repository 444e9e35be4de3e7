//! Reading persistence.
//!
//! Each reading is saved as a pretty-printed JSON file named after its id in
//! the readings persistent directory. The directory is created and verified
//! writable at startup (see `startup`), so writes here are expected to
//! succeed; failures surface as internal errors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::AppError;
use crate::tarot::Reading;

/// File-backed store for completed readings. Cheap to clone.
#[derive(Clone)]
pub struct ReadingStore {
    root: Arc<PathBuf>,
}

impl ReadingStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Persist a reading, returning the path it was written to.
    pub async fn save(&self, reading: &Reading) -> Result<PathBuf, AppError> {
        let path = self.path_for(&reading.reading_id)?;
        let json = serde_json::to_vec_pretty(reading)?;
        tokio::fs::write(&path, json).await?;
        tracing::info!(reading_id = %reading.reading_id, path = %path.display(), "Saved reading");
        Ok(path)
    }

    /// Load a previously saved reading by id.
    pub async fn load(&self, reading_id: &str) -> Result<Reading, AppError> {
        let path = self.path_for(reading_id)?;
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::ReadingNotFound(reading_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&contents)?)
    }

    /// Resolve the file path for a reading id, rejecting ids that could
    /// escape the readings directory.
    fn path_for(&self, reading_id: &str) -> Result<PathBuf, AppError> {
        if !is_valid_reading_id(reading_id) {
            return Err(AppError::InvalidReadingId(reading_id.to_string()));
        }
        Ok(self.root.join(format!("{reading_id}.json")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Reading ids are ASCII alphanumerics plus `_` and `-`, so an id can never
/// name a path outside the readings directory.
fn is_valid_reading_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reading() -> Reading {
        Reading::new(
            "single_card",
            Some("test".to_string()),
            Vec::new(),
            "text".to_string(),
        )
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path());
        let reading = sample_reading();

        let path = store.save(&reading).await.unwrap();
        assert!(path.exists());

        let loaded = store.load(&reading.reading_id).await.unwrap();
        assert_eq!(loaded.reading_id, reading.reading_id);
        assert_eq!(loaded.spread_type, reading.spread_type);
        assert_eq!(loaded.question, reading.question);
    }

    #[tokio::test]
    async fn missing_reading_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path());
        let err = store.load("reading_20260101_000000_1234").await.unwrap_err();
        assert!(matches!(err, AppError::ReadingNotFound(_)));
    }

    #[tokio::test]
    async fn traversal_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReadingStore::new(dir.path());
        for id in ["../etc/passwd", "a/b", "a\\b", "", "id with spaces", "x."] {
            let err = store.load(id).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidReadingId(_)), "id {id:?}");
        }
    }

    #[test]
    fn valid_ids_accepted() {
        assert!(is_valid_reading_id("reading_20260829_143052_4821"));
        assert!(is_valid_reading_id("abc-DEF_123"));
        assert!(!is_valid_reading_id("../escape"));
    }
}
