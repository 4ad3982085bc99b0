//! Static signature registry.
//!
//! One dispatch table for the whole pipeline, built once at startup:
//! transactions resolve by (contract address, selector); child events
//! resolve by (parent category, topic0) plus an address rule, because two
//! contracts in one transaction can emit the same event signature (the
//! staking and pool `Withdraw` events share a topic hash).
//!
//! Selectors and topics are computed from canonical signatures here;
//! the tests pin the well-known hex values.

use ahash::AHashMap;
use alloy::primitives::{keccak256, Address, Selector, B256};
use tracing::info;

use super::events::{cake_pool, erc20, router, staking};
use super::safe_decode::DecodeError;
use crate::db::common::models::DecodedRecord;
use crate::db::TableId;
use crate::stream::{BlockHeader, RawLog, RawTransaction};

/// First 4 bytes of the keccak-256 hash of a canonical function signature.
pub fn selector(signature: &str) -> Selector {
    Selector::from_slice(&keccak256(signature.as_bytes())[..4])
}

/// Full keccak-256 hash of a canonical event signature.
pub fn event_topic(signature: &str) -> B256 {
    keccak256(signature.as_bytes())
}

/// Category a classified transaction belongs to. Child logs inherit the
/// category of their parent transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TxnCategory {
    #[strum(serialize = "router_addLiquidity")]
    RouterAddLiquidity,
    #[strum(serialize = "router_removeLiquidityWithPermit")]
    RouterRemoveLiquidityWithPermit,
    #[strum(serialize = "staking_deposit")]
    StakingDeposit,
    #[strum(serialize = "staking_withdraw")]
    StakingWithdraw,
    #[strum(serialize = "cakePool_withdrawAll")]
    CakePoolWithdrawAll,
    #[strum(serialize = "cakePool_withdrawByAmount")]
    CakePoolWithdrawByAmount,
}

pub type TxnDecoderFn = fn(&BlockHeader, &RawTransaction) -> Result<DecodedRecord, DecodeError>;
pub type EventDecoderFn = fn(&BlockHeader, &RawLog) -> Result<DecodedRecord, DecodeError>;

/// Which emitting addresses an event binding accepts. `Any` is for events
/// like the ERC-20 Transfer that legitimately arrive from arbitrary token
/// contracts; contract-specific events pin the address.
#[derive(Debug, Clone, Copy)]
pub enum AddressRule {
    Any,
    Exact(Address),
}

impl AddressRule {
    pub fn matches(&self, address: &Address) -> bool {
        match self {
            AddressRule::Any => true,
            AddressRule::Exact(expected) => expected == address,
        }
    }
}

pub struct TxnBinding {
    pub name: &'static str,
    pub category: TxnCategory,
    pub table: TableId,
    pub decoder: TxnDecoderFn,
}

pub struct EventBinding {
    pub name: &'static str,
    pub table: TableId,
    pub address: AddressRule,
    pub decoder: EventDecoderFn,
}

/// The registry. Lookups are exact-key; an unknown combination is "not
/// found", never an error.
pub struct SignatureRegistry {
    transactions: AHashMap<(Address, Selector), TxnBinding>,
    events: AHashMap<(TxnCategory, B256), Vec<EventBinding>>,
}

impl SignatureRegistry {
    fn new() -> Self {
        Self {
            transactions: AHashMap::new(),
            events: AHashMap::new(),
        }
    }

    fn register_transaction(&mut self, contract: Address, signature: &str, binding: TxnBinding) {
        self.transactions
            .insert((contract, selector(signature)), binding);
    }

    fn register_event(&mut self, category: TxnCategory, signature: &str, binding: EventBinding) {
        self.events
            .entry((category, event_topic(signature)))
            .or_default()
            .push(binding);
    }

    /// Transaction binding for (to-address, selector), if watched.
    pub fn resolve(&self, to: Address, selector: Selector) -> Option<&TxnBinding> {
        self.transactions.get(&(to, selector))
    }

    /// Event binding for a log inside a classified transaction. The
    /// emitting address disambiguates when one topic hash is shared by
    /// several contracts.
    pub fn resolve_event(
        &self,
        category: TxnCategory,
        topic0: B256,
        address: Address,
    ) -> Option<&EventBinding> {
        self.events
            .get(&(category, topic0))?
            .iter()
            .find(|binding| binding.address.matches(&address))
    }

    pub fn transaction_binding_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn event_binding_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

/// Build the registry with every watched contract. This is the single
/// place new selectors and child events get wired up.
pub fn build_registry() -> SignatureRegistry {
    let mut registry = SignatureRegistry::new();

    // Router v2 liquidity calls. No tracked child events.
    registry.register_transaction(
        router::constants::ROUTER_V2_ADDRESS,
        router::constants::ADD_LIQUIDITY_SIGNATURE,
        TxnBinding {
            name: "router_addLiquidity",
            category: TxnCategory::RouterAddLiquidity,
            table: TableId::RouterAddLiquidity,
            decoder: router::decoder::add_liquidity,
        },
    );
    registry.register_transaction(
        router::constants::ROUTER_V2_ADDRESS,
        router::constants::REMOVE_LIQUIDITY_WITH_PERMIT_SIGNATURE,
        TxnBinding {
            name: "router_removeLiquidityWithPermit",
            category: TxnCategory::RouterRemoveLiquidityWithPermit,
            table: TableId::RouterRemoveLiquidityWithPermit,
            decoder: router::decoder::remove_liquidity_with_permit,
        },
    );

    // Main Staking v2 farm calls and their child events.
    registry.register_transaction(
        staking::constants::MAIN_STAKING_V2_ADDRESS,
        staking::constants::DEPOSIT_SIGNATURE,
        TxnBinding {
            name: "staking_deposit",
            category: TxnCategory::StakingDeposit,
            table: TableId::StakingDeposit,
            decoder: staking::decoder::deposit_call,
        },
    );
    registry.register_transaction(
        staking::constants::MAIN_STAKING_V2_ADDRESS,
        staking::constants::WITHDRAW_SIGNATURE,
        TxnBinding {
            name: "staking_withdraw",
            category: TxnCategory::StakingWithdraw,
            table: TableId::StakingWithdraw,
            decoder: staking::decoder::withdraw_call,
        },
    );
    registry.register_event(
        TxnCategory::StakingDeposit,
        staking::constants::DEPOSIT_EVENT_SIGNATURE,
        EventBinding {
            name: "staking_Deposit",
            table: TableId::StakingDepositEvent,
            address: AddressRule::Exact(staking::constants::MAIN_STAKING_V2_ADDRESS),
            decoder: staking::decoder::deposit_event,
        },
    );
    registry.register_event(
        TxnCategory::StakingWithdraw,
        staking::constants::WITHDRAW_EVENT_SIGNATURE,
        EventBinding {
            name: "staking_Withdraw",
            table: TableId::StakingWithdrawEvent,
            address: AddressRule::Exact(staking::constants::MAIN_STAKING_V2_ADDRESS),
            decoder: staking::decoder::withdraw_event,
        },
    );
    registry.register_event(
        TxnCategory::StakingDeposit,
        erc20::constants::TRANSFER_EVENT_SIGNATURE,
        EventBinding {
            name: "staking_deposit_Transfer",
            table: TableId::StakingDepositTransfer,
            address: AddressRule::Any,
            decoder: erc20::decoder::transfer_event,
        },
    );
    registry.register_event(
        TxnCategory::StakingWithdraw,
        erc20::constants::TRANSFER_EVENT_SIGNATURE,
        EventBinding {
            name: "staking_withdraw_Transfer",
            table: TableId::StakingWithdrawTransfer,
            address: AddressRule::Any,
            decoder: erc20::decoder::transfer_event,
        },
    );

    // Cake Pool calls. withdrawAll routes through the farm internally, so
    // both the pool Withdraw and the farm Withdraw (same topic hash, MUST
    // be told apart by address) show up as children.
    for category in [
        TxnCategory::CakePoolWithdrawAll,
        TxnCategory::CakePoolWithdrawByAmount,
    ] {
        registry.register_event(
            category,
            cake_pool::constants::WITHDRAW_EVENT_SIGNATURE,
            EventBinding {
                name: "cakePool_Withdraw",
                table: TableId::CakePoolWithdrawEvent,
                address: AddressRule::Exact(cake_pool::constants::CAKE_POOL_ADDRESS),
                decoder: cake_pool::decoder::withdraw_event,
            },
        );
        registry.register_event(
            category,
            staking::constants::WITHDRAW_EVENT_SIGNATURE,
            EventBinding {
                name: "staking_Withdraw",
                table: TableId::StakingWithdrawEvent,
                address: AddressRule::Exact(staking::constants::MAIN_STAKING_V2_ADDRESS),
                decoder: staking::decoder::withdraw_event,
            },
        );
        registry.register_event(
            category,
            cake_pool::constants::HARVEST_EVENT_SIGNATURE,
            EventBinding {
                name: "cakePool_Harvest",
                table: TableId::CakePoolHarvestEvent,
                address: AddressRule::Exact(cake_pool::constants::CAKE_POOL_ADDRESS),
                decoder: cake_pool::decoder::harvest_event,
            },
        );
    }
    registry.register_transaction(
        cake_pool::constants::CAKE_POOL_ADDRESS,
        cake_pool::constants::WITHDRAW_ALL_SIGNATURE,
        TxnBinding {
            name: "cakePool_withdrawAll",
            category: TxnCategory::CakePoolWithdrawAll,
            table: TableId::CakePoolWithdrawAll,
            decoder: cake_pool::decoder::withdraw_all_call,
        },
    );
    registry.register_transaction(
        cake_pool::constants::CAKE_POOL_ADDRESS,
        cake_pool::constants::WITHDRAW_BY_AMOUNT_SIGNATURE,
        TxnBinding {
            name: "cakePool_withdrawByAmount",
            category: TxnCategory::CakePoolWithdrawByAmount,
            table: TableId::CakePoolWithdrawByAmount,
            decoder: cake_pool::decoder::withdraw_by_amount_call,
        },
    );

    info!(
        "📊 Built signature registry: {} transaction bindings, {} event bindings",
        registry.transaction_binding_count(),
        registry.event_binding_count()
    );

    registry
}
