//! Replay sources for backfills and tests.
//!
//! The JSON-lines format is one batch per line, preceded by a single
//! preamble line carrying stream metadata:
//!
//! ```text
//! {"chain_id":56}
//! {"blocks":[{"header":{...},"transactions":[...],"logs":[...]}]}
//! {"blocks":[...]}
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::{BlockBatch, BlockStream, StreamError};

#[derive(Debug, Deserialize)]
struct Preamble {
    chain_id: u64,
}

/// Replays batches from a JSON-lines file, skipping blocks below the
/// requested starting height.
pub struct JsonlBlockStream {
    lines: Lines<BufReader<File>>,
    chain_id: u64,
    starting_block: u64,
}

impl JsonlBlockStream {
    pub fn open(path: &Path, starting_block: u64) -> Result<Self, StreamError> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let preamble_line = lines.next().ok_or(StreamError::MissingPreamble)??;
        let preamble: Preamble = serde_json::from_str(&preamble_line)?;

        info!(
            "📼 Opened replay file {} (chain id {}, starting block {})",
            path.display(),
            preamble.chain_id,
            starting_block
        );

        Ok(Self {
            lines,
            chain_id: preamble.chain_id,
            starting_block,
        })
    }
}

#[async_trait]
impl BlockStream for JsonlBlockStream {
    async fn next_batch(&mut self) -> Result<Option<BlockBatch>, StreamError> {
        for line in self.lines.by_ref() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut batch: BlockBatch = serde_json::from_str(&line)?;
            batch
                .blocks
                .retain(|block| block.header.number >= self.starting_block);

            if batch.is_empty() {
                debug!("📭 Replay batch entirely below starting block, skipping");
                continue;
            }
            return Ok(Some(batch));
        }

        Ok(None)
    }

    fn chain_id(&self) -> Option<u64> {
        Some(self.chain_id)
    }
}

/// Fixed sequence of batches, handed out one at a time. Used by tests and
/// as a harness for pre-assembled backfill slices.
pub struct InMemoryBlockStream {
    batches: VecDeque<BlockBatch>,
    chain_id: Option<u64>,
}

impl InMemoryBlockStream {
    pub fn new(batches: Vec<BlockBatch>) -> Self {
        Self {
            batches: batches.into(),
            chain_id: None,
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

#[async_trait]
impl BlockStream for InMemoryBlockStream {
    async fn next_batch(&mut self) -> Result<Option<BlockBatch>, StreamError> {
        Ok(self.batches.pop_front())
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }
}
