use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

/// BNB chain mainnet.
const DEFAULT_CHAIN_ID: u64 = 56;

const DEFAULT_CHUNK_SIZE_MB: usize = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct IndexerConfig {
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    pub stream_config: StreamConfig,
    pub output_config: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Upstream data service. `file://` URLs select the bundled JSON-lines
    /// replay source.
    pub data_service_address: Url,
    /// First block to extract on a fresh run; the persisted cursor wins
    /// when it is further along.
    pub starting_block: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    /// Buffered payload size that triggers a flush, checked at batch
    /// boundaries.
    #[serde(default = "default_chunk_size_mb")]
    pub chunk_size_mb: usize,
}

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_chunk_size_mb() -> usize {
    DEFAULT_CHUNK_SIZE_MB
}

impl IndexerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: IndexerConfig =
            serde_yaml::from_str(&contents).context("failed to parse config file")?;
        Ok(config)
    }
}

impl StreamConfig {
    /// Path of the replay file when the data service is a `file://` URL.
    pub fn replay_path(&self) -> Result<PathBuf> {
        if self.data_service_address.scheme() != "file" {
            bail!(
                "unsupported data service `{}`: only file:// replay is bundled",
                self.data_service_address
            );
        }
        self.data_service_address
            .to_file_path()
            .map_err(|()| anyhow::anyhow!("invalid file:// URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: IndexerConfig = serde_yaml::from_str(
            r#"
            chain_id: 56
            stream_config:
              data_service_address: "file:///data/bsc/replay.jsonl"
              starting_block: 25500000
            output_config:
              output_dir: "/data/bsc/tables"
              chunk_size_mb: 20
            "#,
        )
        .unwrap();

        assert_eq!(config.chain_id, 56);
        assert_eq!(config.stream_config.starting_block, Some(25_500_000));
        assert_eq!(
            config.stream_config.replay_path().unwrap(),
            PathBuf::from("/data/bsc/replay.jsonl")
        );
        assert_eq!(config.output_config.chunk_size_mb, 20);
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let config: IndexerConfig = serde_yaml::from_str(
            r#"
            stream_config:
              data_service_address: "file:///tmp/replay.jsonl"
            output_config:
              output_dir: "/tmp/tables"
            "#,
        )
        .unwrap();

        assert_eq!(config.chain_id, 56);
        assert_eq!(config.stream_config.starting_block, None);
        assert_eq!(config.output_config.chunk_size_mb, 20);
    }

    #[test]
    fn non_file_endpoints_are_rejected() {
        let config: StreamConfig = serde_yaml::from_str(
            r#"
            data_service_address: "https://archive.example.com"
            "#,
        )
        .unwrap();
        assert!(config.replay_path().is_err());
    }
}
