// SPDX-License-Identifier: Apache-2.0

//! # Configuration Management
//!
//! All runtime configuration for the extraction pipeline.
//!
//! ## Configuration Structure
//!
//! - **IndexerConfig**: top-level container loaded from a YAML file
//! - **StreamConfig**: upstream data-service address and starting block
//! - **OutputConfig**: output directory and flush chunk size
//!
//! ## Configuration Sources
//!
//! The YAML file path comes from the command line. The expected chain id
//! defaults to BNB chain (56) and is validated against whatever the
//! upstream stream reports at startup.

/// Top-level indexer configuration and its subsections
pub mod indexer_config;

pub use indexer_config::IndexerConfig;
