//! Transaction classification pass.
//!
//! For each transaction in a block: match (to-address, selector) against
//! the registry, safe-decode, and write the row or a quarantine record.
//! Every matched hash is recorded in the batch index, even on decode
//! failure, because the correlation pass still needs to attribute the
//! transaction's child logs to its category.
//!
//! A transaction to a watched contract with an unrecognized selector is
//! ignored outright, not quarantined: the subscription already filtered to
//! tracked selectors, and a miss here is an untracked action, not a bug.

use tracing::debug;

use crate::db::common::models::{QuarantineRecord, UnparseableTransactionData};
use crate::db::{RecordSink, StorageError, TableId};
use crate::processors::base::{base_transaction_fields, normalize_bytes};
use crate::processors::batch_index::BatchTransactionIndex;
use crate::processors::registry::SignatureRegistry;
use crate::processors::safe_decode::decode_transaction_safely;
use crate::stream::{BlockHeader, RawTransaction};

pub struct TransactionClassifier<'a> {
    registry: &'a SignatureRegistry,
}

impl<'a> TransactionClassifier<'a> {
    pub fn new(registry: &'a SignatureRegistry) -> Self {
        Self { registry }
    }

    /// Classify one block's transactions in execution order.
    pub fn classify_block<S: RecordSink>(
        &self,
        header: &BlockHeader,
        transactions: &[RawTransaction],
        index: &mut BatchTransactionIndex,
        sink: &mut S,
    ) -> Result<(), StorageError> {
        for txn in transactions {
            let Some(to) = txn.to else {
                continue;
            };
            let Some(selector) = txn.selector() else {
                continue;
            };
            let Some(binding) = self.registry.resolve(to, selector) else {
                continue;
            };

            // Recorded before decoding: child logs belong to the category
            // even when the call body itself is unparseable.
            index.record(txn.hash, binding.category);

            match decode_transaction_safely(binding, header, txn) {
                Ok(record) => sink.write_record(binding.table, &record)?,
                Err(failure) => {
                    debug!(
                        "🪦 Quarantining transaction {} from block {}",
                        failure.hash, failure.block
                    );
                    let record = QuarantineRecord::Transaction(UnparseableTransactionData {
                        input: normalize_bytes(&txn.input),
                        base: base_transaction_fields(header, txn),
                    });
                    sink.write_quarantine(TableId::UnparseableTransactions, &record)?;
                }
            }
        }
        Ok(())
    }
}
