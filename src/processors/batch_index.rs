use ahash::AHashMap;
use alloy::primitives::B256;

use super::registry::TxnCategory;

/// Batch-local index of classified transaction hashes.
///
/// Built fresh by the classification pass, consulted read-only by the
/// correlation pass, dropped when the batch completes. A hash is recorded
/// even when the transaction body failed decode: its child logs still
/// belong to the category.
#[derive(Debug, Default)]
pub struct BatchTransactionIndex {
    inner: AHashMap<B256, TxnCategory>,
}

impl BatchTransactionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, hash: B256, category: TxnCategory) {
        self.inner.insert(hash, category);
    }

    pub fn category_of(&self, hash: &B256) -> Option<TxnCategory> {
        self.inner.get(hash).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_resolves_categories() {
        let mut index = BatchTransactionIndex::new();
        let hash = B256::repeat_byte(0xab);

        assert!(index.category_of(&hash).is_none());

        index.record(hash, TxnCategory::StakingDeposit);
        assert_eq!(index.category_of(&hash), Some(TxnCategory::StakingDeposit));
        assert_eq!(index.len(), 1);
    }
}
