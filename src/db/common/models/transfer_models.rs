use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::BaseEventData;

/// Row for the per-category `*_Transfer` tables (`staking.deposit_Transfer`,
/// `staking.withdraw_Transfer`). One shape for all of them; the target
/// table is chosen by the registry binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEventData {
    pub from: String,
    pub to: String,
    pub value: BigDecimal,
    #[serde(flatten)]
    pub base: BaseEventData,
}
