use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::{BaseEventData, BaseTransactionData};

/// Row for `cakePool.withdrawAll`. The call carries no arguments; the row
/// is the base fields alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakePoolWithdrawAllCallData {
    #[serde(flatten)]
    pub base: BaseTransactionData,
}

/// Row for `cakePool.withdrawByAmount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakePoolWithdrawByAmountCallData {
    pub amount: BigDecimal,
    #[serde(flatten)]
    pub base: BaseTransactionData,
}

/// Row for `cakePool.Withdraw`. Note the shares field: the pool burns
/// shares on withdrawal, unlike the farm's Withdraw event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakePoolWithdrawEventData {
    pub sender: String,
    pub amount: BigDecimal,
    pub shares: BigDecimal,
    #[serde(flatten)]
    pub base: BaseEventData,
}

/// Row for `cakePool.Harvest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakePoolHarvestEventData {
    pub sender: String,
    pub amount: BigDecimal,
    #[serde(flatten)]
    pub base: BaseEventData,
}
