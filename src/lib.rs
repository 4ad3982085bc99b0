// SPDX-License-Identifier: Apache-2.0

//! # BSC DeFi Extraction Pipeline
//!
//! Replays BNB-chain history for a fixed set of PancakeSwap contracts and
//! turns raw transactions and logs into partitioned parquet tables.
//!
//! Processing is batch-at-a-time and strictly two-phase: every block batch
//! is first scanned for watched transactions (building a batch-local index
//! of transaction hash → category), then the batch's logs are correlated
//! against that index and decoded in the context of their parent
//! transaction. Anything that matches a known signature but fails
//! structural decode is preserved verbatim in a quarantine table.

pub mod common;
pub mod config;
pub mod db;
pub mod processors;
pub mod stream;
pub mod utils;
