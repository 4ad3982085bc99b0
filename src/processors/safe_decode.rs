//! The decode boundary.
//!
//! Decoders return `Result` internally; this module is where those errors
//! stop. A failed decode becomes a [`DecodeFailure`] value carrying the
//! identifying context and the verbatim raw payload, and emits one
//! diagnostic log line. Nothing decode-related propagates past here;
//! the caller pattern-matches and quarantines.

use alloy::primitives::{Address, Bytes, B256};
use thiserror::Error;
use tracing::error;

use super::registry::{EventBinding, TxnBinding};
use crate::db::common::models::DecodedRecord;
use crate::stream::{BlockHeader, RawLog, RawTransaction};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("ABI decode failed: {0}")]
    Abi(#[from] alloy::dyn_abi::Error),

    #[error("Call data shorter than a selector")]
    InputTooShort,

    #[error("Missing indexed topic {index}")]
    MissingTopic { index: usize },

    #[error("Unexpected value shape for `{field}`")]
    ValueShape { field: &'static str },

    #[error("`{field}` exceeds its target integer width")]
    NumericRange { field: &'static str },
}

/// Raw material preserved from a failed decode, sufficient for offline
/// re-decoding once the missing ABI case is fixed.
#[derive(Debug, Clone)]
pub enum RawPayload {
    CallData(Bytes),
    Log { topics: Vec<B256>, data: Bytes },
}

/// A tagged decode failure: what failed, where, and the untouched input.
#[derive(Debug)]
pub struct DecodeFailure {
    pub decoder: &'static str,
    pub block: u64,
    pub hash: B256,
    pub address: Address,
    pub payload: RawPayload,
    pub error: DecodeError,
}

/// Run a transaction decoder, converting any decode error into a failure
/// value. Emits the diagnostic log entry; this is observability, not
/// control flow.
pub fn decode_transaction_safely(
    binding: &TxnBinding,
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeFailure> {
    let address = txn.to.unwrap_or_default();
    (binding.decoder)(header, txn).map_err(|error| {
        error!(
            "❌ Unable to decode transaction at {} (block {}, txn {}, to {}): {}",
            binding.name, header.number, txn.hash, address, error
        );
        DecodeFailure {
            decoder: binding.name,
            block: header.number,
            hash: txn.hash,
            address,
            payload: RawPayload::CallData(txn.input.clone()),
            error,
        }
    })
}

/// Run an event decoder, converting any decode error into a failure value.
pub fn decode_event_safely(
    binding: &EventBinding,
    header: &BlockHeader,
    log: &RawLog,
) -> Result<DecodedRecord, DecodeFailure> {
    (binding.decoder)(header, log).map_err(|error| {
        error!(
            "❌ Unable to decode event at {} (block {}, txn {}, address {}): {}",
            binding.name, header.number, log.transaction_hash, log.address, error
        );
        DecodeFailure {
            decoder: binding.name,
            block: header.number,
            hash: log.transaction_hash,
            address: log.address,
            payload: RawPayload::Log {
                topics: log.topics.clone(),
                data: log.data.clone(),
            },
            error,
        }
    })
}
