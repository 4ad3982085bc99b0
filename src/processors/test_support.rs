//! In-memory sink standing in for the parquet store in pipeline tests.

use ahash::AHashMap;
use serde_json::Value;

use crate::db::{RecordSink, StorageError, TableId};

#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    rows: AHashMap<TableId, Vec<Value>>,
}

impl MemorySink {
    pub fn rows(&self, table: TableId) -> &[Value] {
        self.rows.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(Vec::is_empty)
    }

    /// All rows grouped by table, ordered for stable comparison.
    pub fn all_rows(&self) -> Vec<(TableId, Vec<Value>)> {
        let mut rows: Vec<_> = self
            .rows
            .iter()
            .map(|(table, rows)| (*table, rows.clone()))
            .collect();
        rows.sort_by_key(|(table, _)| *table);
        rows
    }
}

impl RecordSink for MemorySink {
    fn write_row(&mut self, table: TableId, row: Value) -> Result<(), StorageError> {
        self.rows.entry(table).or_default().push(row);
        Ok(())
    }
}
