use alloy::dyn_abi::DynSolType;

use crate::db::common::models::{
    DecodedRecord, RouterAddLiquidityData, RouterRemoveLiquidityWithPermitData,
};
use crate::processors::base::{
    base_transaction_fields, normalize_address, normalize_amount, normalize_hash,
};
use crate::processors::events::{
    decode_call_params, expect_address, expect_bool, expect_u8, expect_uint, expect_word,
};
use crate::processors::safe_decode::DecodeError;
use crate::stream::{BlockHeader, RawTransaction};

pub fn add_liquidity(
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeError> {
    let base = base_transaction_fields(header, txn);
    let values = decode_call_params(
        &[
            DynSolType::Address,
            DynSolType::Address,
            DynSolType::Uint(256),
            DynSolType::Uint(256),
            DynSolType::Uint(256),
            DynSolType::Uint(256),
            DynSolType::Address,
            DynSolType::Uint(256),
        ],
        &txn.input,
    )?;

    Ok(DecodedRecord::RouterAddLiquidity(RouterAddLiquidityData {
        token_a: normalize_address(&expect_address(&values[0], "tokenA")?),
        token_b: normalize_address(&expect_address(&values[1], "tokenB")?),
        amount_a_desired: normalize_amount(expect_uint(&values[2], "amountADesired")?),
        amount_b_desired: normalize_amount(expect_uint(&values[3], "amountBDesired")?),
        amount_a_min: normalize_amount(expect_uint(&values[4], "amountAMin")?),
        amount_b_min: normalize_amount(expect_uint(&values[5], "amountBMin")?),
        to: normalize_address(&expect_address(&values[6], "to")?),
        deadline: normalize_amount(expect_uint(&values[7], "deadline")?),
        base,
    }))
}

pub fn remove_liquidity_with_permit(
    header: &BlockHeader,
    txn: &RawTransaction,
) -> Result<DecodedRecord, DecodeError> {
    let base = base_transaction_fields(header, txn);
    let values = decode_call_params(
        &[
            DynSolType::Address,
            DynSolType::Address,
            DynSolType::Uint(256),
            DynSolType::Uint(256),
            DynSolType::Uint(256),
            DynSolType::Address,
            DynSolType::Uint(256),
            DynSolType::Bool,
            DynSolType::Uint(8),
            DynSolType::FixedBytes(32),
            DynSolType::FixedBytes(32),
        ],
        &txn.input,
    )?;

    Ok(DecodedRecord::RouterRemoveLiquidityWithPermit(
        RouterRemoveLiquidityWithPermitData {
            token_a: normalize_address(&expect_address(&values[0], "tokenA")?),
            token_b: normalize_address(&expect_address(&values[1], "tokenB")?),
            liquidity: normalize_amount(expect_uint(&values[2], "liquidity")?),
            amount_a_min: normalize_amount(expect_uint(&values[3], "amountAMin")?),
            amount_b_min: normalize_amount(expect_uint(&values[4], "amountBMin")?),
            to: normalize_address(&expect_address(&values[5], "to")?),
            deadline: normalize_amount(expect_uint(&values[6], "deadline")?),
            approve_max: expect_bool(&values[7], "approveMax")?,
            v: expect_u8(&values[8], "v")?,
            r: normalize_hash(&expect_word(&values[9], "r")?),
            s: normalize_hash(&expect_word(&values[10], "s")?),
            base,
        },
    ))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, Address, Bytes, B256, U256};

    use super::*;
    use crate::processors::events::router::constants::REMOVE_LIQUIDITY_WITH_PERMIT_SIGNATURE;
    use crate::processors::registry::selector;

    fn header() -> BlockHeader {
        BlockHeader {
            number: 25_500_000,
            timestamp_ms: 1_680_000_000_000,
            hash: b256!("0101010101010101010101010101010101010101010101010101010101010101"),
        }
    }

    fn call_input(signature: &str, words: &[B256]) -> Bytes {
        let mut input = selector(signature).to_vec();
        for word in words {
            input.extend_from_slice(word.as_slice());
        }
        Bytes::from(input)
    }

    fn uint_word(value: u64) -> B256 {
        B256::from(U256::from(value).to_be_bytes::<32>())
    }

    #[test]
    fn decodes_remove_liquidity_with_permit() {
        let token_a = address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");
        let token_b = address!("e9e7CEA3DedcA5984780Bafc599bD69ADd087D56");
        let to = address!("1111111111111111111111111111111111111111");
        let r = b256!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let s = b256!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

        let txn = RawTransaction {
            hash: b256!("0202020202020202020202020202020202020202020202020202020202020202"),
            from: Address::repeat_byte(0x33),
            to: Some(crate::processors::events::router::constants::ROUTER_V2_ADDRESS),
            input: call_input(
                REMOVE_LIQUIDITY_WITH_PERMIT_SIGNATURE,
                &[
                    token_a.into_word(),
                    token_b.into_word(),
                    uint_word(777),
                    uint_word(10),
                    uint_word(20),
                    to.into_word(),
                    uint_word(1_700_000_000),
                    uint_word(1), // approveMax = true
                    uint_word(27),
                    r,
                    s,
                ],
            ),
        };

        let record = remove_liquidity_with_permit(&header(), &txn).unwrap();
        let DecodedRecord::RouterRemoveLiquidityWithPermit(data) = record else {
            panic!("wrong record shape");
        };

        assert_eq!(data.token_a, "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c");
        assert_eq!(data.liquidity.to_string(), "777");
        assert_eq!(data.amount_a_min.to_string(), "10");
        assert_eq!(data.amount_b_min.to_string(), "20");
        assert!(data.approve_max);
        assert_eq!(data.v, 27);
        assert_eq!(
            data.r,
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
        );
        assert_eq!(data.base.block, 25_500_000);
    }

    #[test]
    fn truncated_call_data_is_a_decode_error() {
        let txn = RawTransaction {
            hash: B256::ZERO,
            from: Address::ZERO,
            to: None,
            input: call_input(REMOVE_LIQUIDITY_WITH_PERMIT_SIGNATURE, &[uint_word(1)]),
        };
        assert!(remove_liquidity_with_permit(&header(), &txn).is_err());
    }
}
