// SPDX-License-Identifier: Apache-2.0

//! Output-table row models.
//!
//! Every row carries the common transaction or event fields plus its
//! type-specific decoded fields. Column names are serialized camelCase to
//! keep joins stable with the original dataset; addresses are lowercase
//! `0x`-hex and on-chain amounts are arbitrary-precision decimals (never
//! machine integers, on-chain values exceed 64-bit range).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod cake_pool_models;
pub mod quarantine_models;
pub mod router_models;
pub mod staking_models;
pub mod transfer_models;

pub use cake_pool_models::{
    CakePoolHarvestEventData, CakePoolWithdrawAllCallData, CakePoolWithdrawByAmountCallData,
    CakePoolWithdrawEventData,
};
pub use quarantine_models::{UnparseableLogData, UnparseableTransactionData};
pub use router_models::{RouterAddLiquidityData, RouterRemoveLiquidityWithPermitData};
pub use staking_models::{
    StakingDepositCallData, StakingDepositEventData, StakingWithdrawCallData,
    StakingWithdrawEventData,
};
pub use transfer_models::TransferEventData;

/// Fields shared by every transaction-kind row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTransactionData {
    pub block: u64,
    pub timestamp: NaiveDateTime,
    pub hash: String,
    pub tx_from: String,
    pub tx_to: String,
}

/// Fields shared by every event-kind row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEventData {
    pub block: u64,
    pub timestamp: NaiveDateTime,
    pub event_address: String,
    pub parent_transaction_hash: String,
}

/// One successfully decoded row, tagged by shape. Serialization is the row
/// itself (untagged); the target table travels separately through the
/// registry binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedRecord {
    RouterAddLiquidity(RouterAddLiquidityData),
    RouterRemoveLiquidityWithPermit(RouterRemoveLiquidityWithPermitData),
    StakingDepositCall(StakingDepositCallData),
    StakingWithdrawCall(StakingWithdrawCallData),
    StakingDepositEvent(StakingDepositEventData),
    StakingWithdrawEvent(StakingWithdrawEventData),
    CakePoolWithdrawAllCall(CakePoolWithdrawAllCallData),
    CakePoolWithdrawByAmountCall(CakePoolWithdrawByAmountCallData),
    CakePoolWithdrawEvent(CakePoolWithdrawEventData),
    CakePoolHarvestEvent(CakePoolHarvestEventData),
    Transfer(TransferEventData),
}

/// An undecodable input, preserved verbatim for offline replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuarantineRecord {
    Transaction(UnparseableTransactionData),
    Log(UnparseableLogData),
}
