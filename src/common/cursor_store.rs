use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::StorageError;

const CURSOR_FILE: &str = "status.json";

/// Resumption metadata persisted next to the output tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursor {
    /// Last block height covered by a completed flush.
    pub height: u64,
}

/// Reads and writes the `status.json` cursor file in the output directory.
#[derive(Debug, Clone)]
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new(output_dir: &std::path::Path) -> Self {
        Self {
            path: output_dir.join(CURSOR_FILE),
        }
    }

    /// Last persisted cursor, or `None` on a fresh output directory.
    pub fn load(&self) -> Result<Option<Cursor>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let cursor: Cursor = serde_json::from_str(&contents)?;
        Ok(Some(cursor))
    }

    /// Persist the cursor. Called once per completed flush.
    pub fn save(&self, cursor: &Cursor) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(cursor)?)?;
        info!("🔄 Persisted cursor at height {}", cursor.height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn round_trips_the_cursor() {
        let dir = TempDir::new("cursor_test").unwrap();
        let store = CursorStore::new(dir.path());

        assert!(store.load().unwrap().is_none());

        store.save(&Cursor { height: 25_500_123 }).unwrap();
        let cursor = store.load().unwrap().unwrap();
        assert_eq!(cursor.height, 25_500_123);
    }
}
