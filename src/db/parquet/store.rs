//! Buffering parquet table store.
//!
//! Rows accumulate in per-table buffers while batches are processed. When
//! the buffered payload crosses the configured chunk size (checked at batch
//! boundaries, so a flush always covers whole batches), every non-empty
//! table is written as one GZIP parquet file named after the covered block
//! range, and the resumption cursor is persisted.

use std::fs;
use std::path::PathBuf;

use ahash::AHashMap;
use arrow::json::reader::ReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel};
use parquet::file::properties::WriterProperties;
use serde_json::Value;
use tracing::{debug, info};

use super::schema::{schema_for, TableId};
use crate::common::cursor_store::{Cursor, CursorStore};
use crate::db::{RecordSink, StorageError};

pub struct ParquetStore {
    output_dir: PathBuf,
    chunk_size_bytes: usize,
    buffers: AHashMap<TableId, Vec<Value>>,
    buffered_bytes: usize,
    /// First and last block heights covered since the previous flush.
    range: Option<(u64, u64)>,
    cursor_store: CursorStore,
}

impl ParquetStore {
    pub fn new(output_dir: PathBuf, chunk_size_mb: usize) -> Self {
        let cursor_store = CursorStore::new(&output_dir);
        Self {
            output_dir,
            chunk_size_bytes: chunk_size_mb * 1024 * 1024,
            buffers: AHashMap::new(),
            buffered_bytes: 0,
            range: None,
            cursor_store,
        }
    }

    pub fn cursor_store(&self) -> &CursorStore {
        &self.cursor_store
    }

    /// Extend the covered block range and flush if the chunk threshold has
    /// been crossed. Called once per fully processed batch, so files never
    /// split a batch.
    pub fn checkpoint(&mut self, batch_first: u64, batch_last: u64) -> Result<(), StorageError> {
        self.range = match self.range {
            None => Some((batch_first, batch_last)),
            Some((first, _)) => Some((first, batch_last)),
        };

        if self.buffered_bytes >= self.chunk_size_bytes {
            self.flush()?;
        }
        Ok(())
    }

    /// Flush whatever remains. Called once at end of run.
    pub fn finalize(&mut self) -> Result<(), StorageError> {
        self.flush()
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        let Some((first, last)) = self.range.take() else {
            return Ok(());
        };

        let filename = format!("{first:010}-{last:010}.parquet");
        let mut tables_written = 0usize;

        for table in TableId::ALL {
            let Some(rows) = self.buffers.remove(&table) else {
                continue;
            };
            if rows.is_empty() {
                continue;
            }

            let data = encode_parquet(table, &rows)?;

            let table_dir = self.output_dir.join(table.to_string());
            fs::create_dir_all(&table_dir)?;
            fs::write(table_dir.join(&filename), data)?;

            debug!(
                "💾 Wrote {} rows to {}/{}",
                rows.len(),
                table,
                filename
            );
            tables_written += 1;
        }

        self.buffered_bytes = 0;
        self.cursor_store.save(&Cursor { height: last })?;

        info!(
            "✅ Flushed blocks {}..={} ({} tables) to {}",
            first,
            last,
            tables_written,
            self.output_dir.display()
        );
        Ok(())
    }
}

/// Encode one table's buffered rows as a GZIP parquet file.
fn encode_parquet(table: TableId, rows: &[Value]) -> Result<Vec<u8>, StorageError> {
    let schema = schema_for(table);

    let mut decoder = ReaderBuilder::new(schema.clone()).build_decoder()?;
    decoder.serialize(rows)?;
    let batch = decoder
        .flush()?
        .ok_or_else(|| StorageError::SchemaMismatch {
            table,
            reason: "no record batch produced from buffered rows".to_string(),
        })?;

    let props = WriterProperties::builder()
        .set_compression(Compression::GZIP(GzipLevel::default()))
        .build();

    let mut data = Vec::new();
    let mut writer = ArrowWriter::try_new(&mut data, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(data)
}

impl RecordSink for ParquetStore {
    fn write_row(&mut self, table: TableId, row: Value) -> Result<(), StorageError> {
        // Rough payload estimate; exact sizing is the parquet writer's job.
        self.buffered_bytes += row.to_string().len();
        self.buffers.entry(table).or_default().push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use chrono::DateTime;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use serde_json::json;
    use tempdir::TempDir;

    use super::*;
    use crate::db::common::models::{BaseTransactionData, StakingDepositCallData};

    fn deposit_row(block: u64) -> StakingDepositCallData {
        StakingDepositCallData {
            pid: 3,
            amount: "500".parse().unwrap(),
            base: BaseTransactionData {
                block,
                timestamp: DateTime::from_timestamp_millis(1_680_000_000_000)
                    .unwrap()
                    .naive_utc(),
                hash: "0xaaaa".to_string(),
                tx_from: "0xbbbb".to_string(),
                tx_to: "0xcccc".to_string(),
            },
        }
    }

    #[test]
    fn flushes_partitioned_files_and_cursor() {
        let dir = TempDir::new("parquet_store_test").unwrap();
        let mut store = ParquetStore::new(dir.path().to_path_buf(), 1);

        store
            .write_many(TableId::StakingDeposit, &[deposit_row(100), deposit_row(101)])
            .unwrap();
        store.checkpoint(100, 101).unwrap();
        store.finalize().unwrap();

        let path = dir
            .path()
            .join("staking.deposit")
            .join("0000000100-0000000101.parquet");
        let file = File::open(&path).expect("partitioned parquet file exists");

        let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batch = reader.next().unwrap().unwrap();
        assert_eq!(batch.num_rows(), 2);

        let cursor = store.cursor_store().load().unwrap().unwrap();
        assert_eq!(cursor.height, 101);
    }

    #[test]
    fn empty_store_finalizes_without_output() {
        let dir = TempDir::new("parquet_store_test").unwrap();
        let mut store = ParquetStore::new(dir.path().to_path_buf(), 1);

        store.finalize().unwrap();
        assert!(store.cursor_store().load().unwrap().is_none());
    }

    #[test]
    fn checkpoint_extends_the_covered_range() {
        let dir = TempDir::new("parquet_store_test").unwrap();
        // Chunk size 0: every checkpoint flushes.
        let mut store = ParquetStore::new(dir.path().to_path_buf(), 0);

        store
            .write_row(TableId::CakePoolWithdrawAll, json!({
                "block": 100,
                "timestamp": "2023-03-28T10:40:00",
                "hash": "0x01",
                "txFrom": "0x02",
                "txTo": "0x03",
            }))
            .unwrap();
        store.checkpoint(100, 109).unwrap();

        assert!(dir
            .path()
            .join("cakePool.withdrawAll")
            .join("0000000100-0000000109.parquet")
            .exists());
        assert_eq!(store.cursor_store().load().unwrap().unwrap().height, 109);
    }
}
