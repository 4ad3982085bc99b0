use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::{BaseEventData, BaseTransactionData};

/// Row for `staking.deposit` (the top-level MasterChef call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingDepositCallData {
    pub pid: u64,
    pub amount: BigDecimal,
    #[serde(flatten)]
    pub base: BaseTransactionData,
}

/// Row for `staking.withdraw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingWithdrawCallData {
    pub pid: u64,
    pub amount: BigDecimal,
    #[serde(flatten)]
    pub base: BaseTransactionData,
}

/// Row for `staking.Deposit` (the event emitted by the call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingDepositEventData {
    pub user: String,
    pub pid: u64,
    pub amount: BigDecimal,
    #[serde(flatten)]
    pub base: BaseEventData,
}

/// Row for `staking.Withdraw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingWithdrawEventData {
    pub user: String,
    pub pid: u64,
    pub amount: BigDecimal,
    #[serde(flatten)]
    pub base: BaseEventData,
}
