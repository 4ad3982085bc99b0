// SPDX-License-Identifier: Apache-2.0

//! # Upstream Block Stream
//!
//! Data model and trait for the upstream archive stream. The stream client
//! itself (archive fetch, subscription filtering, retry) is an external
//! collaborator; the pipeline only depends on this seam:
//!
//! - batches arrive one at a time, blocks in ascending height order
//! - transactions keep their original execution order within a block
//! - input/topic/data bytes are preserved verbatim
//!
//! A JSON-lines replay source is shipped for backfills and tests; see
//! [`replay`].

use alloy::primitives::{Address, Bytes, Selector, B256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod replay;

pub use replay::{InMemoryBlockStream, JsonlBlockStream};

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed batch payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported stream endpoint `{0}` (only file:// replay is bundled)")]
    UnsupportedEndpoint(String),

    #[error("Replay file is missing its chain-id preamble")]
    MissingPreamble,
}

/// Block-level metadata supplied with every block in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockHeader {
    pub number: u64,
    /// Epoch milliseconds, per the archive contract.
    pub timestamp_ms: i64,
    pub hash: B256,
}

/// A transaction as delivered by the upstream stream, already filtered to
/// subscribed addresses and selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: B256,
    pub from: Address,
    /// `None` for contract-creation transactions.
    pub to: Option<Address>,
    pub input: Bytes,
}

impl RawTransaction {
    /// First 4 bytes of the call data, or `None` when the input is shorter
    /// than a selector.
    pub fn selector(&self) -> Option<Selector> {
        (self.input.len() >= 4).then(|| Selector::from_slice(&self.input[..4]))
    }
}

/// A log as delivered by the upstream stream. `topics[0]` is the event
/// signature hash; up to 3 more indexed slots follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    /// Hash of the transaction that emitted this log.
    pub transaction_hash: B256,
}

impl RawLog {
    pub fn topic0(&self) -> Option<B256> {
        self.topics.first().copied()
    }
}

/// One block with its associated transactions and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockData {
    pub header: BlockHeader,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default)]
    pub logs: Vec<RawLog>,
}

/// A contiguous, ordered set of blocks delivered for one processing cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockBatch {
    pub blocks: Vec<BlockData>,
}

impl BlockBatch {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Inclusive height range covered by this batch.
    pub fn block_range(&self) -> Option<(u64, u64)> {
        match (self.blocks.first(), self.blocks.last()) {
            (Some(first), Some(last)) => Some((first.header.number, last.header.number)),
            _ => None,
        }
    }
}

/// The upstream seam. One batch is requested at a time; the previous batch
/// is fully processed before the next call.
#[async_trait]
pub trait BlockStream {
    /// Next batch of blocks, or `None` once the stream is exhausted.
    async fn next_batch(&mut self) -> Result<Option<BlockBatch>, StreamError>;

    /// Chain id reported by the upstream, if it reports one.
    fn chain_id(&self) -> Option<u64>;
}
