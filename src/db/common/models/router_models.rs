use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::BaseTransactionData;

/// Row for `router.addLiquidity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterAddLiquidityData {
    pub token_a: String,
    pub token_b: String,
    pub amount_a_desired: BigDecimal,
    pub amount_b_desired: BigDecimal,
    pub amount_a_min: BigDecimal,
    pub amount_b_min: BigDecimal,
    pub to: String,
    pub deadline: BigDecimal,
    #[serde(flatten)]
    pub base: BaseTransactionData,
}

/// Row for `router.removeLiquidityWithPermit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterRemoveLiquidityWithPermitData {
    pub token_a: String,
    pub token_b: String,
    pub liquidity: BigDecimal,
    pub amount_a_min: BigDecimal,
    pub amount_b_min: BigDecimal,
    pub to: String,
    pub deadline: BigDecimal,
    pub approve_max: bool,
    pub v: u8,
    pub r: String,
    pub s: String,
    #[serde(flatten)]
    pub base: BaseTransactionData,
}
