//! Weights for pallet-token-ledger.
//!
//! Ref-time figures are estimates for the storage access pattern of each call.
//! Regenerate from `benchmarking.rs` with `frame-omni-bencher` on reference hardware
//! before a production release.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-token-ledger.
pub trait WeightInfo {
    fn increase_supply() -> Weight;
    fn decrease_supply() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn transfer_from() -> Weight;
}

/// Weights for pallet-token-ledger using the runtime's configured `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenLedger::SupplyController` (r:1 w:0)
    /// Storage: `TokenLedger::TotalSupply` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    fn increase_supply() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::SupplyController` (r:1 w:0)
    /// Storage: `TokenLedger::TotalSupply` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    fn decrease_supply() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(21_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    fn increase_allowance() -> Weight {
        Weight::from_parts(14_000_000, 3_625)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    fn decrease_allowance() -> Weight {
        Weight::from_parts(14_000_000, 3_625)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(29_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn increase_supply() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn decrease_supply() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(21_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(14_000_000, 3_625)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(14_000_000, 3_625)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(29_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
}
