// SPDX-License-Identifier: Apache-2.0

//! # Decode-and-Correlate Pipeline
//!
//! The core processing logic: matching raw transactions and logs against
//! known contract signatures and turning them into typed table rows.
//!
//! ## Main Components
//!
//! ### `extract_processor`
//! The batch orchestrator. For every batch delivered by the upstream
//! stream it runs two strictly ordered passes:
//! 1. transaction classification over every block, which also builds the
//!    batch-local transaction index, then
//! 2. log correlation over every block, attributing logs to the category
//!    of their parent transaction via that index.
//!
//! The index never outlives the batch.
//!
//! ### `registry`
//! The static signature registry: (contract, selector) → transaction
//! decoder and (category, topic, address rule) → event decoder. Built once
//! at startup, never mutated.
//!
//! ### `safe_decode`
//! The decode boundary. Decoder errors become tagged failure values with
//! the raw payload attached; nothing decode-related ever aborts a batch.
//!
//! ### `events`
//! Per-contract constants and decoders:
//! - Router v2: liquidity management calls
//! - Main Staking v2: farm deposit/withdraw calls and events
//! - Cake Pool: pool withdrawal/harvest calls and events
//! - ERC-20: Transfer logs correlated to their parent transaction
//!
//! ## Data Flow
//!
//! ```text
//! Block Stream → ExtractProcessor → TransactionClassifier → tables
//!                                        ↓ (batch index)
//!                     tables ← LogCorrelator ← batch logs
//! ```
//!
//! Undecodable-but-matched inputs go to the quarantine tables instead.

/// Batch orchestrator driving the two-phase pipeline
pub mod extract_processor;

/// Per-contract decoders and the classification/correlation passes
pub mod events;

/// Pure extractors for the fields shared by every output row
pub mod base;

/// Batch-local transaction hash → category index
pub mod batch_index;

/// Static signature registry built at startup
pub mod registry;

/// Decode boundary converting errors into tagged failure values
pub mod safe_decode;

#[cfg(test)]
pub(crate) mod test_support;
