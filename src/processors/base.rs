//! Pure extractors for the fields every output row shares, plus the
//! normalizers that keep the tables joinable: addresses lowercase `0x`-hex,
//! amounts rendered as full decimal strings.
//!
//! No side effects and no failure modes; headers, hashes and addresses
//! come from the trusted upstream stream.

use std::str::FromStr;

use alloy::primitives::{hex, Address, B256, U256};
use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, NaiveDateTime};

use crate::db::common::models::{BaseEventData, BaseTransactionData};
use crate::stream::{BlockHeader, RawLog, RawTransaction};

/// Lowercase `0x`-hex rendering, uniform across all tables.
pub fn normalize_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

pub fn normalize_hash(hash: &B256) -> String {
    format!("0x{}", hex::encode(hash))
}

pub fn normalize_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Full decimal rendering of a uint256. Never narrowed to a machine
/// integer; on-chain amounts exceed 64-bit range.
pub fn normalize_amount(value: U256) -> BigDecimal {
    BigDecimal::from_str(&value.to_string()).unwrap_or_else(|_| BigDecimal::zero())
}

/// Header epoch-milliseconds as a calendar timestamp.
pub fn block_timestamp(header: &BlockHeader) -> NaiveDateTime {
    DateTime::from_timestamp_millis(header.timestamp_ms)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

pub fn base_transaction_fields(header: &BlockHeader, txn: &RawTransaction) -> BaseTransactionData {
    BaseTransactionData {
        block: header.number,
        timestamp: block_timestamp(header),
        hash: normalize_hash(&txn.hash),
        tx_from: normalize_address(&txn.from),
        tx_to: txn
            .to
            .as_ref()
            .map(normalize_address)
            .unwrap_or_default(),
    }
}

pub fn base_event_fields(header: &BlockHeader, log: &RawLog) -> BaseEventData {
    BaseEventData {
        block: header.number,
        timestamp: block_timestamp(header),
        event_address: normalize_address(&log.address),
        parent_transaction_hash: normalize_hash(&log.transaction_hash),
    }
}
