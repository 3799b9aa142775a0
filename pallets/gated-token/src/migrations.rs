//! Storage migrations for pallet-gated-token.
//!
//! # Versions
//!
//! - **v1**: token metadata, `TotalSupply`, `Cap`, `Balances`, `Allowances`,
//!   `Owner`, `LockFromBlock`, `LockToBlock`. Transfers are ungated.
//! - **v2**: appends `Locked`, `AllowTransferOn` and `Whitelist`, and turns on
//!   the transfer gate and locking.
//!
//! Every storage item exists in code from the start; the on-chain
//! `StorageVersion` is what switches the v2 behaviour on. Upgrading therefore
//! never rewrites a v1 item. It only puts the appended items into their
//! neutral state and bumps the version.
//!
//! # Wiring in a runtime
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_gated_token::migrations::v2::MigrateToV2<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use frame_system::pallet_prelude::BlockNumberFor;
use sp_std::{marker::PhantomData, vec::Vec};

use crate::{AllowTransferOn, Config, Pallet, LOG_TARGET};

#[cfg(any(feature = "try-runtime", test))]
use crate::{
    Allowances, Balances, Cap, Decimals, LockFromBlock, LockToBlock, Owner, TokenName,
    TokenSymbol, TotalSupply,
};

/// Every storage field visible to a v1 chain.
///
/// Captured before and compared after an upgrade; the two must be identical.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug)]
pub struct V1Snapshot<AccountId, BlockNumber> {
    pub token_name: Vec<u8>,
    pub token_symbol: Vec<u8>,
    pub decimals: u8,
    pub total_supply: u128,
    pub cap: u128,
    pub owner: Option<AccountId>,
    pub lock_from_block: BlockNumber,
    pub lock_to_block: BlockNumber,
    pub balances: Vec<(AccountId, u128)>,
    pub allowances: Vec<(AccountId, AccountId, u128)>,
}

pub type V1SnapshotOf<T> =
    V1Snapshot<<T as frame_system::Config>::AccountId, BlockNumberFor<T>>;

/// Read every v1 field out of storage.
#[cfg(any(feature = "try-runtime", test))]
pub fn snapshot_v1<T: Config>() -> V1SnapshotOf<T> {
    let mut balances: Vec<_> = Balances::<T>::iter().collect();
    balances.sort();
    let mut allowances: Vec<_> = Allowances::<T>::iter().collect();
    allowances.sort();

    V1Snapshot {
        token_name: TokenName::<T>::get().into_inner(),
        token_symbol: TokenSymbol::<T>::get().into_inner(),
        decimals: Decimals::<T>::get(),
        total_supply: TotalSupply::<T>::get(),
        cap: Cap::<T>::get(),
        owner: Owner::<T>::get(),
        lock_from_block: LockFromBlock::<T>::get(),
        lock_to_block: LockToBlock::<T>::get(),
        balances,
        allowances,
    }
}

pub mod v2 {
    use super::*;

    /// Turns a v1 ledger into a v2 ledger.
    ///
    /// The transfer gate starts unset, so only whitelisted accounts can move
    /// funds until the owner picks an opening block. The whitelist and the
    /// locked bucket start empty.
    pub struct MigrateToV2<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 2 {
                AllowTransferOn::<T>::kill();
                StorageVersion::new(2).put::<Pallet<T>>();

                log::info!(
                    target: LOG_TARGET,
                    "Migrated storage from v{on_chain_version:?} to v2, transfer gate unset"
                );

                // 1 read (version) + 2 writes (gate marker, version)
                T::DbWeight::get().reads_writes(1, 2)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v2 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(snapshot_v1::<T>().encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let before: V1SnapshotOf<T> = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            frame_support::ensure!(
                snapshot_v1::<T>() == before,
                sp_runtime::TryRuntimeError::Other("v1 storage changed during upgrade")
            );
            frame_support::ensure!(
                Pallet::<T>::on_chain_storage_version() >= 2,
                sp_runtime::TryRuntimeError::Other("Migration to v2 did not complete")
            );

            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{new_test_ext, GatedToken, RuntimeOrigin, Test, ALICE, BOB, CHARLIE, OWNER},
        Error, Locked, Whitelist,
    };
    use frame_support::{assert_noop, assert_ok, traits::StorageVersion};
    use proptest::prelude::*;

    fn downgrade_to_v1() {
        StorageVersion::new(1).put::<Pallet<Test>>();
        // A v1 chain has never seen the v2 items.
        let _ = Whitelist::<Test>::clear(u32::MAX, None);
        AllowTransferOn::<Test>::kill();
    }

    #[test]
    fn migration_v2_from_v1_works() {
        new_test_ext().execute_with(|| {
            downgrade_to_v1();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);

            let _weight = v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 2);
            assert_eq!(GatedToken::allow_transfer_on(), None);
            assert!(GatedToken::is_upgraded());
        });
    }

    #[test]
    fn migration_v2_idempotent() {
        new_test_ext().execute_with(|| {
            downgrade_to_v1();
            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            // Owner opens the gate after the upgrade; a re-run must not reset it.
            assert_ok!(GatedToken::set_allow_transfer_on(RuntimeOrigin::signed(OWNER), 10));
            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 2);
            assert_eq!(GatedToken::allow_transfer_on(), Some(10));
        });
    }

    #[test]
    fn migration_v2_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();
            AllowTransferOn::<Test>::put(7);

            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
            assert_eq!(GatedToken::allow_transfer_on(), Some(7));
        });
    }

    #[test]
    fn migration_handles_unset_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            v2::MigrateToV2::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 2);
        });
    }

    #[test]
    fn gate_calls_refused_before_upgrade() {
        new_test_ext().execute_with(|| {
            downgrade_to_v1();
            Whitelist::<Test>::insert(ALICE, true);

            assert_noop!(
                GatedToken::set_allow_transfer_on(RuntimeOrigin::signed(OWNER), 10),
                Error::<Test>::NotUpgraded
            );
            assert_noop!(
                GatedToken::add_whitelist(RuntimeOrigin::signed(OWNER), BOB),
                Error::<Test>::NotUpgraded
            );
            assert_noop!(
                GatedToken::revoke_whitelist(RuntimeOrigin::signed(OWNER), ALICE),
                Error::<Test>::NotUpgraded
            );
            assert_noop!(
                GatedToken::renounce_whitelist(RuntimeOrigin::signed(ALICE)),
                Error::<Test>::NotUpgraded
            );
            assert_noop!(
                GatedToken::lock(RuntimeOrigin::signed(OWNER), ALICE, 100),
                Error::<Test>::NotUpgraded
            );
        });
    }

    #[test]
    fn transfers_ungated_before_upgrade() {
        new_test_ext().execute_with(|| {
            downgrade_to_v1();

            assert!(!GatedToken::check_whitelist(&ALICE));
            assert!(GatedToken::is_transfer_allowed(&ALICE));
            assert_ok!(GatedToken::transfer(RuntimeOrigin::signed(ALICE), BOB, 100));

            v2::MigrateToV2::<Test>::on_runtime_upgrade();
            assert!(!GatedToken::is_transfer_allowed(&ALICE));
        });
    }

    #[test]
    fn ownership_handover_leaves_whitelist_alone_before_upgrade() {
        new_test_ext().execute_with(|| {
            downgrade_to_v1();

            assert_ok!(GatedToken::transfer_ownership(RuntimeOrigin::signed(OWNER), BOB));
            assert_eq!(GatedToken::owner(), Some(BOB));
            assert!(!GatedToken::check_whitelist(&BOB));
        });
    }

    #[test]
    fn v1_ledger_survives_upgrade() {
        new_test_ext().execute_with(|| {
            downgrade_to_v1();

            // v1 behaviour: ungated transfers, no lock or whitelist.
            assert_ok!(GatedToken::mint(RuntimeOrigin::signed(OWNER), ALICE, 1_000));
            assert_ok!(GatedToken::transfer(RuntimeOrigin::signed(ALICE), BOB, 300));
            assert_noop!(
                GatedToken::lock(RuntimeOrigin::signed(OWNER), ALICE, 100),
                Error::<Test>::NotUpgraded
            );
            assert_noop!(
                GatedToken::add_whitelist(RuntimeOrigin::signed(OWNER), ALICE),
                Error::<Test>::NotUpgraded
            );

            let balance_before = GatedToken::balance_of(&ALICE);
            let supply_before = GatedToken::total_supply();
            let before = snapshot_v1::<Test>();

            v2::MigrateToV2::<Test>::on_runtime_upgrade();

            assert_eq!(snapshot_v1::<Test>(), before);
            assert_eq!(GatedToken::balance_of(&ALICE), balance_before);
            assert_eq!(GatedToken::total_supply(), supply_before);

            // v2 operations work on the pre-existing balances.
            assert_noop!(
                GatedToken::transfer(RuntimeOrigin::signed(ALICE), BOB, 1),
                Error::<Test>::TransferNotAllowed
            );
            assert_ok!(GatedToken::add_whitelist(RuntimeOrigin::signed(OWNER), ALICE));
            assert!(GatedToken::check_whitelist(&ALICE));
            assert_ok!(GatedToken::lock(RuntimeOrigin::signed(OWNER), ALICE, 700));
            assert_eq!(GatedToken::balance_of(&ALICE), balance_before - 700);
            assert_eq!(GatedToken::lock_of(&ALICE), 700);
            assert_eq!(GatedToken::total_balance_of(&ALICE), balance_before);
            assert_ok!(GatedToken::do_try_state());
        });
    }

    #[derive(Debug, Clone)]
    enum V1Call {
        Mint(u64, u128),
        Burn(u64, u128),
        Approve(u64, u64, u128),
        Transfer(u64, u64, u128),
        TransferFrom(u64, u64, u64, u128),
    }

    fn account() -> impl Strategy<Value = u64> {
        prop_oneof![Just(OWNER), Just(ALICE), Just(BOB), Just(CHARLIE)]
    }

    fn v1_call() -> impl Strategy<Value = V1Call> {
        let amount = 0u128..5_000;
        prop_oneof![
            (account(), amount.clone()).prop_map(|(to, a)| V1Call::Mint(to, a)),
            (account(), amount.clone()).prop_map(|(who, a)| V1Call::Burn(who, a)),
            (account(), account(), amount.clone()).prop_map(|(o, s, a)| V1Call::Approve(o, s, a)),
            (account(), account(), amount.clone())
                .prop_map(|(f, t, a)| V1Call::Transfer(f, t, a)),
            (account(), account(), account(), amount)
                .prop_map(|(s, o, t, a)| V1Call::TransferFrom(s, o, t, a)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn upgrade_preserves_every_v1_field(calls in prop::collection::vec(v1_call(), 0..40)) {
            new_test_ext().execute_with(|| {
                downgrade_to_v1();
                for call in calls {
                    let _ = match call {
                        V1Call::Mint(to, a) => GatedToken::mint(RuntimeOrigin::signed(OWNER), to, a),
                        V1Call::Burn(who, a) => GatedToken::burn(RuntimeOrigin::signed(who), a),
                        V1Call::Approve(o, s, a) => GatedToken::approve(RuntimeOrigin::signed(o), s, a),
                        V1Call::Transfer(f, t, a) => GatedToken::transfer(RuntimeOrigin::signed(f), t, a),
                        V1Call::TransferFrom(s, o, t, a) => {
                            GatedToken::transfer_from(RuntimeOrigin::signed(s), o, t, a)
                        },
                    };
                }

                let before = snapshot_v1::<Test>();
                v2::MigrateToV2::<Test>::on_runtime_upgrade();

                prop_assert_eq!(snapshot_v1::<Test>(), before);
                prop_assert_eq!(Locked::<Test>::iter().count(), 0);
                prop_assert_eq!(Whitelist::<Test>::iter().count(), 0);
                prop_assert_eq!(GatedToken::allow_transfer_on(), None);
                prop_assert!(GatedToken::do_try_state().is_ok());
                Ok(())
            })?;
        }
    }
}
