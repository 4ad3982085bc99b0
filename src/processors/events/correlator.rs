//! Log correlation pass.
//!
//! Runs strictly after classification has indexed the whole batch. Each
//! log is attributed to the category of its parent transaction via the
//! batch index, then dispatched through the (category, topic0, emitting
//! address) binding.
//!
//! Unlike transactions, unmatched logs are dropped without quarantine:
//! logs vastly outnumber transactions and an orphan or untracked-topic log
//! is noise, not a failure. Only a log with a resolved binding that fails
//! structural decode is quarantined.

use tracing::{debug, trace};

use crate::db::common::models::{QuarantineRecord, UnparseableLogData};
use crate::db::{RecordSink, StorageError, TableId};
use crate::processors::base::{base_event_fields, normalize_bytes, normalize_hash};
use crate::processors::batch_index::BatchTransactionIndex;
use crate::processors::registry::SignatureRegistry;
use crate::processors::safe_decode::decode_event_safely;
use crate::stream::{BlockHeader, RawLog};

pub struct LogCorrelator<'a> {
    registry: &'a SignatureRegistry,
}

impl<'a> LogCorrelator<'a> {
    pub fn new(registry: &'a SignatureRegistry) -> Self {
        Self { registry }
    }

    /// Correlate one block's logs against the completed batch index.
    pub fn correlate_block<S: RecordSink>(
        &self,
        header: &BlockHeader,
        logs: &[RawLog],
        index: &BatchTransactionIndex,
        sink: &mut S,
    ) -> Result<(), StorageError> {
        for log in logs {
            let Some(category) = index.category_of(&log.transaction_hash) else {
                trace!(
                    "Dropping orphan log from {} (parent {} not classified)",
                    log.address,
                    log.transaction_hash
                );
                continue;
            };
            let Some(topic0) = log.topic0() else {
                continue;
            };
            let Some(binding) = self.registry.resolve_event(category, topic0, log.address) else {
                trace!(
                    "Dropping log from {}: no binding for topic {} under {}",
                    log.address,
                    topic0,
                    category
                );
                continue;
            };

            match decode_event_safely(binding, header, log) {
                Ok(record) => sink.write_record(binding.table, &record)?,
                Err(failure) => {
                    debug!(
                        "🪦 Quarantining log from {} in txn {}",
                        failure.address, failure.hash
                    );
                    let topic = |i: usize| log.topics.get(i).map(normalize_hash);
                    let record = QuarantineRecord::Log(UnparseableLogData {
                        topic0: topic(0),
                        topic1: topic(1),
                        topic2: topic(2),
                        topic3: topic(3),
                        data: normalize_bytes(&log.data),
                        base: base_event_fields(header, log),
                    });
                    sink.write_quarantine(TableId::UnparseableLogs, &record)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, Address, Bytes, B256, U256};

    use super::*;
    use crate::processors::events::{cake_pool, erc20, staking};
    use crate::processors::registry::{build_registry, event_topic, TxnCategory};
    use crate::processors::test_support::MemorySink;

    fn header() -> BlockHeader {
        BlockHeader {
            number: 25_500_000,
            timestamp_ms: 1_680_000_000_000,
            hash: b256!("0101010101010101010101010101010101010101010101010101010101010101"),
        }
    }

    fn uint_word(value: u64) -> Vec<u8> {
        B256::from(U256::from(value).to_be_bytes::<32>()).as_slice().to_vec()
    }

    fn parent_hash() -> B256 {
        b256!("0202020202020202020202020202020202020202020202020202020202020202")
    }

    fn transfer_log(parent: B256) -> RawLog {
        RawLog {
            address: address!("0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82"),
            topics: vec![
                event_topic(erc20::constants::TRANSFER_EVENT_SIGNATURE),
                Address::repeat_byte(0x66).into_word(),
                Address::repeat_byte(0x77).into_word(),
            ],
            data: Bytes::from(uint_word(500)),
            transaction_hash: parent,
        }
    }

    #[test]
    fn transfer_inside_a_deposit_routes_to_the_deposit_transfer_table() {
        let registry = build_registry();
        let correlator = LogCorrelator::new(&registry);
        let mut index = BatchTransactionIndex::new();
        index.record(parent_hash(), TxnCategory::StakingDeposit);
        let mut sink = MemorySink::default();

        correlator
            .correlate_block(&header(), &[transfer_log(parent_hash())], &index, &mut sink)
            .unwrap();

        let rows = sink.rows(TableId::StakingDepositTransfer);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["value"], "500");
        assert_eq!(
            rows[0]["parentTransactionHash"],
            "0x0202020202020202020202020202020202020202020202020202020202020202"
        );
    }

    #[test]
    fn orphan_logs_are_dropped_without_quarantine() {
        let registry = build_registry();
        let correlator = LogCorrelator::new(&registry);
        let index = BatchTransactionIndex::new();
        let mut sink = MemorySink::default();

        correlator
            .correlate_block(&header(), &[transfer_log(parent_hash())], &index, &mut sink)
            .unwrap();

        assert!(sink.is_empty());
    }

    #[test]
    fn untracked_topic_for_a_category_is_dropped() {
        let registry = build_registry();
        let correlator = LogCorrelator::new(&registry);
        let mut index = BatchTransactionIndex::new();
        // Router categories track no child events.
        index.record(parent_hash(), TxnCategory::RouterAddLiquidity);
        let mut sink = MemorySink::default();

        correlator
            .correlate_block(&header(), &[transfer_log(parent_hash())], &index, &mut sink)
            .unwrap();

        assert!(sink.is_empty());
    }

    #[test]
    fn shared_withdraw_topic_routes_to_distinct_tables_by_address() {
        let registry = build_registry();
        let correlator = LogCorrelator::new(&registry);
        let mut index = BatchTransactionIndex::new();
        index.record(parent_hash(), TxnCategory::CakePoolWithdrawAll);
        let mut sink = MemorySink::default();

        let topic = event_topic(cake_pool::constants::WITHDRAW_EVENT_SIGNATURE);
        let sender = Address::repeat_byte(0x55);

        let mut pool_data = uint_word(1_000);
        pool_data.extend_from_slice(&uint_word(900));
        let pool_log = RawLog {
            address: cake_pool::constants::CAKE_POOL_ADDRESS,
            topics: vec![topic, sender.into_word()],
            data: Bytes::from(pool_data),
            transaction_hash: parent_hash(),
        };

        let farm_log = RawLog {
            address: staking::constants::MAIN_STAKING_V2_ADDRESS,
            topics: vec![topic, sender.into_word(), B256::from(U256::ZERO.to_be_bytes::<32>())],
            data: Bytes::from(uint_word(1_000)),
            transaction_hash: parent_hash(),
        };

        correlator
            .correlate_block(&header(), &[pool_log, farm_log], &index, &mut sink)
            .unwrap();

        assert_eq!(sink.rows(TableId::CakePoolWithdrawEvent).len(), 1);
        assert_eq!(sink.rows(TableId::StakingWithdrawEvent).len(), 1);
        assert!(sink.rows(TableId::UnparseableLogs).is_empty());
    }

    #[test]
    fn undecodable_bound_log_is_quarantined_with_all_topics() {
        let registry = build_registry();
        let correlator = LogCorrelator::new(&registry);
        let mut index = BatchTransactionIndex::new();
        index.record(parent_hash(), TxnCategory::CakePoolWithdrawByAmount);
        let mut sink = MemorySink::default();

        // Harvest event with truncated data.
        let log = RawLog {
            address: cake_pool::constants::CAKE_POOL_ADDRESS,
            topics: vec![
                event_topic(cake_pool::constants::HARVEST_EVENT_SIGNATURE),
                Address::repeat_byte(0x55).into_word(),
            ],
            data: Bytes::from(vec![0xab, 0xcd]),
            transaction_hash: parent_hash(),
        };

        correlator
            .correlate_block(&header(), &[log.clone()], &index, &mut sink)
            .unwrap();

        let rows = sink.rows(TableId::UnparseableLogs);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["data"], "0xabcd");
        assert_eq!(
            rows[0]["topic0"],
            format!("0x{}", alloy::primitives::hex::encode(log.topics[0]))
        );
        assert!(rows[0]["topic2"].is_null());
        assert!(sink.rows(TableId::CakePoolHarvestEvent).is_empty());
    }
}
