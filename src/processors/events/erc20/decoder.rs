use alloy::dyn_abi::DynSolType;

use crate::db::common::models::{DecodedRecord, TransferEventData};
use crate::processors::base::{base_event_fields, normalize_address, normalize_amount};
use crate::processors::events::{decode_event_data, expect_uint, topic_address};
use crate::processors::safe_decode::DecodeError;
use crate::stream::{BlockHeader, RawLog};

/// `Transfer(address indexed from, address indexed to, uint256 value)`
///
/// The target table comes from the registry binding: the same decoder
/// serves every per-category `*_Transfer` table.
pub fn transfer_event(header: &BlockHeader, log: &RawLog) -> Result<DecodedRecord, DecodeError> {
    let base = base_event_fields(header, log);
    let from = topic_address(log, 1)?;
    let to = topic_address(log, 2)?;
    let values = decode_event_data(&[DynSolType::Uint(256)], &log.data)?;

    Ok(DecodedRecord::Transfer(TransferEventData {
        from: normalize_address(&from),
        to: normalize_address(&to),
        value: normalize_amount(expect_uint(&values[0], "value")?),
        base,
    }))
}
