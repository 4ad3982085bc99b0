// SPDX-License-Identifier: Apache-2.0

//! # BSC DeFi Extraction Pipeline
//!
//! Replays BNB-chain history for the watched PancakeSwap contracts:
//! - Router v2, Main Staking v2, Cake Pool
//!
//! Decodes transactions and logs against known ABIs and persists
//! partitioned parquet tables, quarantining anything undecodable.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bsc_indexer_processor::config::IndexerConfig;
use bsc_indexer_processor::db::parquet::ParquetStore;
use bsc_indexer_processor::processors::extract_processor::ExtractProcessor;
use bsc_indexer_processor::processors::registry::build_registry;
use bsc_indexer_processor::stream::JsonlBlockStream;
use bsc_indexer_processor::utils::starting_block::get_starting_block;

/// Configure jemalloc as the global allocator for better memory management
#[cfg(unix)]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[derive(Debug, Parser)]
#[clap(about = "Decode-and-correlate extraction for PancakeSwap on BNB chain")]
pub struct ServerArgs {
    /// Path to the YAML configuration file
    #[clap(short, long)]
    pub config_path: PathBuf,
}

/// Main application entry point
///
/// Initializes the async runtime with optimized settings for blockchain
/// data processing and drives the stream to exhaustion.
fn main() -> Result<()> {
    // Use at least 16 threads for storage flushes and stream I/O
    let num_cpus = num_cpus::get();
    let worker_threads = num_cpus.max(16);

    // Build Tokio runtime optimized for high-throughput processing
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder
        .disable_lifo_slot()  // Improves fairness in task scheduling
        .enable_all()         // Enable all I/O and timer drivers
        .worker_threads(worker_threads)
        .build()
        .expect("Failed to build async runtime")
        .block_on(async {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();

            let args = ServerArgs::parse();
            let config = IndexerConfig::load(&args.config_path)?;

            let mut store = ParquetStore::new(
                config.output_config.output_dir.clone(),
                config.output_config.chunk_size_mb,
            );
            let starting_block = get_starting_block(&config, store.cursor_store())?;

            let replay_path = config.stream_config.replay_path()?;
            let mut stream = JsonlBlockStream::open(&replay_path, starting_block)?;

            let processor = ExtractProcessor::new(build_registry());
            processor
                .run(&mut stream, &mut store, config.chain_id)
                .await?;

            info!("✅ Extraction complete");
            Ok(())
        })
}
