use serde::{Deserialize, Serialize};

use super::{BaseEventData, BaseTransactionData};

/// Row for `unparseableTransactions`: a transaction that matched a
/// registered selector but failed structural decode. The input is the
/// verbatim `0x`-hex call data, sufficient for offline re-decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnparseableTransactionData {
    pub input: String,
    #[serde(flatten)]
    pub base: BaseTransactionData,
}

/// Row for `unparseableLogs`: a log with a resolved (category, topic,
/// address) binding whose payload failed structural decode. All four topic
/// slots and the data are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnparseableLogData {
    pub topic0: Option<String>,
    pub topic1: Option<String>,
    pub topic2: Option<String>,
    pub topic3: Option<String>,
    pub data: String,
    #[serde(flatten)]
    pub base: BaseEventData,
}
