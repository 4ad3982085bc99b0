// SPDX-License-Identifier: Apache-2.0

//! Parquet-backed table storage: static schemas and the buffering store.

pub mod schema;
pub mod store;

pub use store::ParquetStore;
