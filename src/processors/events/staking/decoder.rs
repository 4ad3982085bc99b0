use alloy::dyn_abi::DynSolType;

use crate::db::common::models::{
    DecodedRecord, StakingDepositCallData, StakingDepositEventData, StakingWithdrawCallData,
    StakingWithdrawEventData,
};
use crate::processors::base::{
    base_event_fields, base_transaction_fields, normalize_address, normalize_amount,
};
use crate::processors::events::{
    decode_call_params, decode_event_data, expect_uint, narrow_u64, topic_address, topic_u256,
};
use crate::processors::safe_decode::DecodeError;
use crate::stream::{BlockHeader, RawLog, RawTransaction};

/// `deposit(uint256 _pid, uint256 _amount)`
pub fn deposit_call(
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeError> {
    let base = base_transaction_fields(header, txn);
    let values = decode_call_params(
        &[DynSolType::Uint(256), DynSolType::Uint(256)],
        &txn.input,
    )?;

    Ok(DecodedRecord::StakingDepositCall(StakingDepositCallData {
        pid: narrow_u64(expect_uint(&values[0], "pid")?, "pid")?,
        amount: normalize_amount(expect_uint(&values[1], "amount")?),
        base,
    }))
}

/// `withdraw(uint256 _pid, uint256 _amount)`
pub fn withdraw_call(
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeError> {
    let base = base_transaction_fields(header, txn);
    let values = decode_call_params(
        &[DynSolType::Uint(256), DynSolType::Uint(256)],
        &txn.input,
    )?;

    Ok(DecodedRecord::StakingWithdrawCall(StakingWithdrawCallData {
        pid: narrow_u64(expect_uint(&values[0], "pid")?, "pid")?,
        amount: normalize_amount(expect_uint(&values[1], "amount")?),
        base,
    }))
}

/// `Deposit(address indexed user, uint256 indexed pid, uint256 amount)`
pub fn deposit_event(header: &BlockHeader, log: &RawLog) -> Result<DecodedRecord, DecodeError> {
    let base = base_event_fields(header, log);
    let user = topic_address(log, 1)?;
    let pid = topic_u256(log, 2)?;
    let values = decode_event_data(&[DynSolType::Uint(256)], &log.data)?;

    Ok(DecodedRecord::StakingDepositEvent(StakingDepositEventData {
        user: normalize_address(&user),
        pid: narrow_u64(pid, "pid")?,
        amount: normalize_amount(expect_uint(&values[0], "amount")?),
        base,
    }))
}

/// `Withdraw(address indexed user, uint256 indexed pid, uint256 amount)`
pub fn withdraw_event(header: &BlockHeader, log: &RawLog) -> Result<DecodedRecord, DecodeError> {
    let base = base_event_fields(header, log);
    let user = topic_address(log, 1)?;
    let pid = topic_u256(log, 2)?;
    let values = decode_event_data(&[DynSolType::Uint(256)], &log.data)?;

    Ok(DecodedRecord::StakingWithdrawEvent(StakingWithdrawEventData {
        user: normalize_address(&user),
        pid: narrow_u64(pid, "pid")?,
        amount: normalize_amount(expect_uint(&values[0], "amount")?),
        base,
    }))
}
