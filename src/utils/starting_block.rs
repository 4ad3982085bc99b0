use anyhow::Result;
use tracing::info;

use crate::common::cursor_store::CursorStore;
use crate::config::IndexerConfig;

/// Get the appropriate starting block for the run.
///
/// The persisted cursor marks the last flushed height, so a resumed run
/// starts one block past it; a fresh run starts at the configured block
/// (or 0 if none is set).
pub fn get_starting_block(config: &IndexerConfig, cursor_store: &CursorStore) -> Result<u64> {
    let configured = config.stream_config.starting_block.unwrap_or(0);
    let resumed = cursor_store
        .load()?
        .map(|cursor| cursor.height + 1)
        .unwrap_or(0);

    let starting_block = configured.max(resumed);
    info!("🚀 Starting extraction at block {}", starting_block);
    Ok(starting_block)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::common::cursor_store::Cursor;

    fn config(starting_block: Option<u64>, dir: &TempDir) -> IndexerConfig {
        serde_yaml::from_str(&format!(
            r#"
            stream_config:
              data_service_address: "file:///tmp/replay.jsonl"
              {}
            output_config:
              output_dir: "{}"
            "#,
            starting_block
                .map(|b| format!("starting_block: {b}"))
                .unwrap_or_default(),
            dir.path().display(),
        ))
        .unwrap()
    }

    #[test]
    fn fresh_run_uses_the_configured_block() {
        let dir = TempDir::new("starting_block_test").unwrap();
        let store = CursorStore::new(dir.path());
        let config = config(Some(25_500_000), &dir);

        assert_eq!(get_starting_block(&config, &store).unwrap(), 25_500_000);
    }

    #[test]
    fn resumed_run_starts_past_the_cursor() {
        let dir = TempDir::new("starting_block_test").unwrap();
        let store = CursorStore::new(dir.path());
        store.save(&Cursor { height: 25_600_000 }).unwrap();
        let config = config(Some(25_500_000), &dir);

        assert_eq!(get_starting_block(&config, &store).unwrap(), 25_600_001);
    }
}
