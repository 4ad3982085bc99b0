// SPDX-License-Identifier: Apache-2.0

//! Per-contract decoding modules and the two batch passes.
//!
//! Each watched contract gets a `constants` module (address, canonical
//! signatures) and a `decoder` module (typed decode into table rows).
//! The shared helpers below cover the mechanics every decoder needs:
//! stripping the selector, decoding a parameter tuple, and pulling typed
//! values out of topics and decoded parameters.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::{Address, B256, U256};

use super::safe_decode::DecodeError;
use crate::stream::RawLog;

pub mod cake_pool;
pub mod classifier;
pub mod correlator;
pub mod erc20;
pub mod router;
pub mod staking;

pub use classifier::TransactionClassifier;
pub use correlator::LogCorrelator;

/// Decode function-call parameters: selector stripped, remainder decoded
/// against the given parameter types. Arity is checked so decoders can
/// index the result directly.
pub(crate) fn decode_call_params(
    types: &[DynSolType],
    input: &[u8],
) -> Result<Vec<DynSolValue>, DecodeError> {
    if input.len() < 4 {
        return Err(DecodeError::InputTooShort);
    }
    decode_param_tuple(types, &input[4..])
}

/// Decode a log's non-indexed parameters from its data section.
pub(crate) fn decode_event_data(
    types: &[DynSolType],
    data: &[u8],
) -> Result<Vec<DynSolValue>, DecodeError> {
    decode_param_tuple(types, data)
}

fn decode_param_tuple(
    types: &[DynSolType],
    data: &[u8],
) -> Result<Vec<DynSolValue>, DecodeError> {
    let tuple = DynSolType::Tuple(types.to_vec());
    match tuple.abi_decode_params(data)? {
        DynSolValue::Tuple(values) if values.len() == types.len() => Ok(values),
        _ => Err(DecodeError::ValueShape { field: "params" }),
    }
}

pub(crate) fn indexed_topic(log: &RawLog, index: usize) -> Result<B256, DecodeError> {
    log.topics
        .get(index)
        .copied()
        .ok_or(DecodeError::MissingTopic { index })
}

/// An address packed into an indexed topic word.
pub(crate) fn topic_address(log: &RawLog, index: usize) -> Result<Address, DecodeError> {
    Ok(Address::from_word(indexed_topic(log, index)?))
}

/// A uint256 packed into an indexed topic word.
pub(crate) fn topic_u256(log: &RawLog, index: usize) -> Result<U256, DecodeError> {
    Ok(U256::from_be_bytes(indexed_topic(log, index)?.0))
}

pub(crate) fn expect_address(
    value: &DynSolValue,
    field: &'static str,
) -> Result<Address, DecodeError> {
    value
        .as_address()
        .ok_or(DecodeError::ValueShape { field })
}

pub(crate) fn expect_uint(value: &DynSolValue, field: &'static str) -> Result<U256, DecodeError> {
    value
        .as_uint()
        .map(|(value, _)| value)
        .ok_or(DecodeError::ValueShape { field })
}

pub(crate) fn expect_bool(value: &DynSolValue, field: &'static str) -> Result<bool, DecodeError> {
    value.as_bool().ok_or(DecodeError::ValueShape { field })
}

pub(crate) fn expect_u8(value: &DynSolValue, field: &'static str) -> Result<u8, DecodeError> {
    let wide = expect_uint(value, field)?;
    u8::try_from(wide).map_err(|_| DecodeError::NumericRange { field })
}

pub(crate) fn expect_word(value: &DynSolValue, field: &'static str) -> Result<B256, DecodeError> {
    match value.as_fixed_bytes() {
        Some((bytes, 32)) => Ok(B256::from_slice(bytes)),
        _ => Err(DecodeError::ValueShape { field }),
    }
}

/// Narrow a uint256 to u64 for index-like fields (pool ids). Values past
/// u64 are a structural decode failure, not a truncation.
pub(crate) fn narrow_u64(value: U256, field: &'static str) -> Result<u64, DecodeError> {
    u64::try_from(value).map_err(|_| DecodeError::NumericRange { field })
}
