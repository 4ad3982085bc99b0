use alloy::dyn_abi::DynSolType;

use crate::db::common::models::{
    CakePoolHarvestEventData, CakePoolWithdrawAllCallData, CakePoolWithdrawByAmountCallData,
    CakePoolWithdrawEventData, DecodedRecord,
};
use crate::processors::base::{
    base_event_fields, base_transaction_fields, normalize_address, normalize_amount,
};
use crate::processors::events::{decode_call_params, decode_event_data, expect_uint, topic_address};
use crate::processors::safe_decode::DecodeError;
use crate::stream::{BlockHeader, RawLog, RawTransaction};

/// `withdrawAll()` takes no arguments; the row is the base fields alone.
pub fn withdraw_all_call(
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeError> {
    if txn.input.len() < 4 {
        return Err(DecodeError::InputTooShort);
    }
    Ok(DecodedRecord::CakePoolWithdrawAllCall(
        CakePoolWithdrawAllCallData {
            base: base_transaction_fields(header, txn),
        },
    ))
}

/// `withdrawByAmount(uint256 _amount)`
pub fn withdraw_by_amount_call(
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeError> {
    let base = base_transaction_fields(header, txn);
    let values = decode_call_params(&[DynSolType::Uint(256)], &txn.input)?;

    Ok(DecodedRecord::CakePoolWithdrawByAmountCall(
        CakePoolWithdrawByAmountCallData {
            amount: normalize_amount(expect_uint(&values[0], "amount")?),
            base,
        },
    ))
}

/// `Withdraw(address indexed sender, uint256 amount, uint256 shares)`
pub fn withdraw_event(header: &BlockHeader, log: &RawLog) -> Result<DecodedRecord, DecodeError> {
    let base = base_event_fields(header, log);
    let sender = topic_address(log, 1)?;
    let values = decode_event_data(
        &[DynSolType::Uint(256), DynSolType::Uint(256)],
        &log.data,
    )?;

    Ok(DecodedRecord::CakePoolWithdrawEvent(
        CakePoolWithdrawEventData {
            sender: normalize_address(&sender),
            amount: normalize_amount(expect_uint(&values[0], "amount")?),
            shares: normalize_amount(expect_uint(&values[1], "shares")?),
            base,
        },
    ))
}

/// `Harvest(address indexed sender, uint256 amount)`
pub fn harvest_event(header: &BlockHeader, log: &RawLog) -> Result<DecodedRecord, DecodeError> {
    let base = base_event_fields(header, log);
    let sender = topic_address(log, 1)?;
    let values = decode_event_data(&[DynSolType::Uint(256)], &log.data)?;

    Ok(DecodedRecord::CakePoolHarvestEvent(CakePoolHarvestEventData {
        sender: normalize_address(&sender),
        amount: normalize_amount(expect_uint(&values[0], "amount")?),
        base,
    }))
}
