//! Static arrow schemas for every output table.
//!
//! Column layout mirrors the upstream dataset: camelCase names, UTF-8
//! decimal strings for on-chain amounts (a uint256 does not fit any fixed
//! decimal width worth carrying), millisecond timestamps.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef, TimeUnit};

/// Stable identifier for one output table. The display string doubles as
/// the table's directory name under the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum TableId {
    #[strum(serialize = "router.addLiquidity")]
    RouterAddLiquidity,
    #[strum(serialize = "router.removeLiquidityWithPermit")]
    RouterRemoveLiquidityWithPermit,
    #[strum(serialize = "staking.deposit")]
    StakingDeposit,
    #[strum(serialize = "staking.withdraw")]
    StakingWithdraw,
    #[strum(serialize = "staking.Deposit")]
    StakingDepositEvent,
    #[strum(serialize = "staking.Withdraw")]
    StakingWithdrawEvent,
    #[strum(serialize = "staking.deposit_Transfer")]
    StakingDepositTransfer,
    #[strum(serialize = "staking.withdraw_Transfer")]
    StakingWithdrawTransfer,
    #[strum(serialize = "cakePool.withdrawAll")]
    CakePoolWithdrawAll,
    #[strum(serialize = "cakePool.withdrawByAmount")]
    CakePoolWithdrawByAmount,
    #[strum(serialize = "cakePool.Withdraw")]
    CakePoolWithdrawEvent,
    #[strum(serialize = "cakePool.Harvest")]
    CakePoolHarvestEvent,
    #[strum(serialize = "unparseableTransactions")]
    UnparseableTransactions,
    #[strum(serialize = "unparseableLogs")]
    UnparseableLogs,
}

impl TableId {
    pub const ALL: [TableId; 14] = [
        TableId::RouterAddLiquidity,
        TableId::RouterRemoveLiquidityWithPermit,
        TableId::StakingDeposit,
        TableId::StakingWithdraw,
        TableId::StakingDepositEvent,
        TableId::StakingWithdrawEvent,
        TableId::StakingDepositTransfer,
        TableId::StakingWithdrawTransfer,
        TableId::CakePoolWithdrawAll,
        TableId::CakePoolWithdrawByAmount,
        TableId::CakePoolWithdrawEvent,
        TableId::CakePoolHarvestEvent,
        TableId::UnparseableTransactions,
        TableId::UnparseableLogs,
    ];
}

fn decimal(name: &str) -> Field {
    Field::new(name, DataType::Utf8, false)
}

fn string(name: &str) -> Field {
    Field::new(name, DataType::Utf8, false)
}

fn common_transaction_fields() -> Vec<Field> {
    vec![
        Field::new("block", DataType::UInt64, false),
        Field::new(
            "timestamp",
            DataType::Timestamp(TimeUnit::Millisecond, None),
            false,
        ),
        string("hash"),
        string("txFrom"),
        string("txTo"),
    ]
}

fn common_event_fields() -> Vec<Field> {
    vec![
        Field::new("block", DataType::UInt64, false),
        Field::new(
            "timestamp",
            DataType::Timestamp(TimeUnit::Millisecond, None),
            false,
        ),
        string("eventAddress"),
        string("parentTransactionHash"),
    ]
}

fn table_schema(mut fields: Vec<Field>, common: Vec<Field>) -> SchemaRef {
    fields.extend(common);
    Arc::new(Schema::new(fields))
}

/// Schema for one output table. Static; built fresh per flush, never
/// inferred from data.
pub fn schema_for(table: TableId) -> SchemaRef {
    match table {
        TableId::RouterAddLiquidity => table_schema(
            vec![
                string("tokenA"),
                string("tokenB"),
                decimal("amountADesired"),
                decimal("amountBDesired"),
                decimal("amountAMin"),
                decimal("amountBMin"),
                string("to"),
                decimal("deadline"),
            ],
            common_transaction_fields(),
        ),
        TableId::RouterRemoveLiquidityWithPermit => table_schema(
            vec![
                string("tokenA"),
                string("tokenB"),
                decimal("liquidity"),
                decimal("amountAMin"),
                decimal("amountBMin"),
                string("to"),
                decimal("deadline"),
                Field::new("approveMax", DataType::Boolean, false),
                Field::new("v", DataType::UInt32, false),
                string("r"),
                string("s"),
            ],
            common_transaction_fields(),
        ),
        TableId::StakingDeposit | TableId::StakingWithdraw => table_schema(
            vec![Field::new("pid", DataType::UInt64, false), decimal("amount")],
            common_transaction_fields(),
        ),
        TableId::StakingDepositEvent | TableId::StakingWithdrawEvent => table_schema(
            vec![
                string("user"),
                Field::new("pid", DataType::UInt64, false),
                decimal("amount"),
            ],
            common_event_fields(),
        ),
        TableId::StakingDepositTransfer | TableId::StakingWithdrawTransfer => table_schema(
            vec![string("from"), string("to"), decimal("value")],
            common_event_fields(),
        ),
        TableId::CakePoolWithdrawAll => table_schema(vec![], common_transaction_fields()),
        TableId::CakePoolWithdrawByAmount => {
            table_schema(vec![decimal("amount")], common_transaction_fields())
        }
        TableId::CakePoolWithdrawEvent => table_schema(
            vec![string("sender"), decimal("amount"), decimal("shares")],
            common_event_fields(),
        ),
        TableId::CakePoolHarvestEvent => table_schema(
            vec![string("sender"), decimal("amount")],
            common_event_fields(),
        ),
        TableId::UnparseableTransactions => {
            table_schema(vec![string("input")], common_transaction_fields())
        }
        TableId::UnparseableLogs => table_schema(
            vec![
                Field::new("topic0", DataType::Utf8, true),
                Field::new("topic1", DataType::Utf8, true),
                Field::new("topic2", DataType::Utf8, true),
                Field::new("topic3", DataType::Utf8, true),
                string("data"),
            ],
            common_event_fields(),
        ),
    }
}
