//! Weights for pallet-gated-token.
//!
//! Hand-estimated from storage access counts until benchmark output replaces
//! them.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn approve() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn set_allow_transfer_on() -> Weight;
    fn add_whitelist() -> Weight;
    fn revoke_whitelist() -> Weight;
    fn renounce_whitelist() -> Weight;
    fn lock() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
}

/// Weights for the pallet using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Owner, Cap, TotalSupply, Balances. Writes: TotalSupply, Balances.
    fn mint() -> Weight {
        Weight::from_parts(12_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(10_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(8_000_000, 3_600).saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: StorageVersion, AllowTransferOn, Whitelist, Balances x2, TotalSupply.
    fn transfer() -> Weight {
        Weight::from_parts(15_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads_writes(6, 3))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(18_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads_writes(7, 4))
    }
    fn set_allow_transfer_on() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn add_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn revoke_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn renounce_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: StorageVersion, Owner, Balances, AllowTransferOn, Whitelist, Locked.
    fn lock() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads_writes(6, 2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads_writes(2, 3))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(7_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(12_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(10_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(8_000_000, 3_600).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer() -> Weight {
        Weight::from_parts(15_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(6, 3))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(18_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(7, 4))
    }
    fn set_allow_transfer_on() -> Weight {
        Weight::from_parts(8_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn add_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn revoke_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn renounce_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn lock() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(6, 2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 3))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(7_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
}
