//! # Gated Token Pallet
//!
//! A capped fungible token whose balances are split into an *available* and a
//! *locked* bucket, with a block-gated transfer switch that the owner can
//! bypass per account through a whitelist.
//!
//! The pallet is organised around a handful of internal units, each living in
//! its own module as an `impl<T: Config> Pallet<T>` block:
//!
//! - `ledger`: available/locked buckets and total supply.
//! - `ownership`: the single owner and the owner-only guard.
//! - `supply`: capped minting, burning and allowance-based delegated burns.
//! - `gate`: the transfer switch and the whitelist.
//! - `lock`: moves available funds into the locked bucket.
//! - `transfer`: ordinary and delegated transfers.
//!
//! Storage is laid out once for both on-chain versions. A chain at storage
//! version 1 only exposes the ledger, supply and transfer behaviour; version 2
//! turns on the gate, the whitelist and locking. See [`migrations`].

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the query surface
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::BlockNumberProvider;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

mod gate;
mod ledger;
mod lock;
pub mod migrations;
mod ownership;
mod supply;
mod transfer;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "pallet-gated-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);

/// First storage version carrying the transfer gate, the whitelist and the
/// locked bucket.
pub const GATED_STORAGE_VERSION: u16 = 2;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Source of the reference marker the transfer gate compares against.
        type ReferenceClock: BlockNumberProvider<BlockNumber = BlockNumberFor<Self>>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    // ---------------------------------------------------------------------
    // Version 1 storage. The upgrade never rewrites anything in this block.
    // ---------------------------------------------------------------------

    /// Token name (e.g., "Gated Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "GTK")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Sum of every account's available and locked balance.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Hard ceiling on `TotalSupply`, fixed at genesis.
    #[pallet::storage]
    #[pallet::getter(fn cap)]
    pub type Cap<T> = StorageValue<_, u128, ValueQuery>;

    /// Available (spendable) balances. Zero balances are not stored.
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` may move out of `owner`'s available balance.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Current ledger owner. `None` once ownership has been renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Lower bound of the lock window recorded at genesis.
    #[pallet::storage]
    #[pallet::getter(fn lock_from_block)]
    pub type LockFromBlock<T: Config> = StorageValue<_, BlockNumberFor<T>, ValueQuery>;

    /// Upper bound of the lock window recorded at genesis.
    #[pallet::storage]
    #[pallet::getter(fn lock_to_block)]
    pub type LockToBlock<T: Config> = StorageValue<_, BlockNumberFor<T>, ValueQuery>;

    // ---------------------------------------------------------------------
    // Version 2 storage.
    // ---------------------------------------------------------------------

    /// Locked balances. Counted in `TotalSupply`, never spendable.
    #[pallet::storage]
    pub type Locked<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Block from which transfers are open to everyone. `None` keeps the gate
    /// closed for every non-whitelisted account.
    #[pallet::storage]
    #[pallet::getter(fn allow_transfer_on)]
    pub type AllowTransferOn<T: Config> = StorageValue<_, BlockNumberFor<T>, OptionQuery>;

    /// Accounts exempt from the transfer gate.
    #[pallet::storage]
    #[pallet::getter(fn check_whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed from an account's available balance
        Burned { from: T::AccountId, amount: u128 },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s balance changed
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Available funds moved into the locked bucket
        Locked { account: T::AccountId, amount: u128 },
        /// Transfer gate opening block changed
        AllowTransferOnSet { block: BlockNumberFor<T> },
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Ledger owner changed (`None` means renounced)
        OwnershipTransferred {
            previous_owner: Option<T::AccountId>,
            new_owner: Option<T::AccountId>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the owner, self or allowance permission for the call.
        Unauthorized,
        /// Available balance is too low for the debit.
        InsufficientBalance,
        /// Minting would push the total supply above the cap.
        CapExceeded,
        /// Lock amount exceeds the available balance.
        LockExceedsBalance,
        /// Transfer gate is closed and the account is not whitelisted.
        TransferNotAllowed,
        /// Gate opening block is not strictly after the current block.
        InvalidGateMarker,
        /// Caller is not on the whitelist.
        NotWhitelisted,
        /// Call needs storage version 2.
        NotUpgraded,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Mint `amount` to `to`. Owner only, bounded by the cap.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_mint(&to, amount)
        }

        /// Burn `amount` from the caller's available balance.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn(&who, amount)
        }

        /// Burn `amount` from `owner`'s available balance using the caller's
        /// allowance. The ledger owner gets no exemption.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, owner: T::AccountId, amount: u128) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_burn_from(&spender, &owner, amount)
        }

        /// Set the caller's allowance for `spender` to exactly `amount`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, &owner, &to, amount)
        }

        /// Open the transfer gate for everyone from `block` onwards.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_allow_transfer_on())]
        pub fn set_allow_transfer_on(
            origin: OriginFor<T>,
            block: BlockNumberFor<T>,
        ) -> DispatchResult {
            Self::ensure_upgraded()?;
            Self::ensure_owner(origin)?;
            Self::do_set_allow_transfer_on(block)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::add_whitelist())]
        pub fn add_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_upgraded()?;
            Self::ensure_owner(origin)?;
            Self::do_add_whitelist(account)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::revoke_whitelist())]
        pub fn revoke_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_upgraded()?;
            Self::ensure_owner(origin)?;
            Self::do_revoke_whitelist(account)
        }

        /// Remove the caller from the whitelist.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::renounce_whitelist())]
        pub fn renounce_whitelist(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_upgraded()?;
            let who = ensure_signed(origin)?;
            Self::do_renounce_whitelist(who)
        }

        /// Move `amount` of `account`'s available balance into its locked
        /// bucket. There is no way back.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::lock())]
        pub fn lock(origin: OriginFor<T>, account: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_upgraded()?;
            Self::ensure_owner(origin)?;
            Self::do_lock(&account, amount)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_transfer_ownership(Some(new_owner))
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::renounce_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_transfer_ownership(None)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner (whitelisted by default)
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Supply cap
        pub cap: u128,
        /// Lock window bounds
        pub lock_from_block: BlockNumberFor<T>,
        pub lock_to_block: BlockNumberFor<T>,
        /// Accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            assert!(
                self.lock_from_block <= self.lock_to_block,
                "lock_from_block must not be after lock_to_block"
            );
            LockFromBlock::<T>::put(self.lock_from_block);
            LockToBlock::<T>::put(self.lock_to_block);
            Cap::<T>::put(self.cap);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
                Whitelist::<T>::insert(owner, true);
            }

            for account in &self.whitelisted_accounts {
                Whitelist::<T>::insert(account, true);
            }

            for (account, amount) in &self.initial_balances {
                Pallet::<T>::credit(account, *amount).expect("Initial balances overflow u128");
            }
            assert!(TotalSupply::<T>::get() <= self.cap, "Initial balances exceed the supply cap");
        }
    }
}
