// SPDX-License-Identifier: Apache-2.0

//! # Storage Layer
//!
//! Models, table schemas and the parquet-backed table store.
//!
//! Components address output tables through the [`RecordSink`] façade by
//! stable [`TableId`]s; the parquet backend under [`parquet`] buffers rows
//! per table and flushes partitioned, compressed files. Tests substitute an
//! in-memory sink.
//!
//! A storage failure is fatal to the run: partitioned output files are
//! committed per batch range, so a failed write must abort rather than
//! leave a partially persisted batch behind.

use serde::Serialize;
use thiserror::Error;

use self::common::models::{DecodedRecord, QuarantineRecord};

pub mod common;
pub mod parquet;

pub use self::parquet::schema::TableId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] ::parquet::errors::ParquetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row for table {table} does not match its schema: {reason}")]
    SchemaMismatch { table: TableId, reason: String },
}

/// Table Writer Façade. Routes records to their target table; the backend
/// decides buffering and flush timing.
pub trait RecordSink {
    fn write_row(&mut self, table: TableId, row: serde_json::Value) -> Result<(), StorageError>;

    fn write_record(
        &mut self,
        table: TableId,
        record: &DecodedRecord,
    ) -> Result<(), StorageError> {
        self.write_row(table, serde_json::to_value(record)?)
    }

    fn write_quarantine(
        &mut self,
        table: TableId,
        record: &QuarantineRecord,
    ) -> Result<(), StorageError> {
        self.write_row(table, serde_json::to_value(record)?)
    }

    fn write_many<T: Serialize>(
        &mut self,
        table: TableId,
        records: &[T],
    ) -> Result<(), StorageError> {
        for record in records {
            let row = serde_json::to_value(record)?;
            self.write_row(table, row)?;
        }
        Ok(())
    }
}
