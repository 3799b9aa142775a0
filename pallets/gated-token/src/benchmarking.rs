//! Benchmarking setup for pallet-gated-token

use super::*;

#[allow(unused)]
use crate::Pallet as GatedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);
    owner
}

fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Cap::<T>::put(u128::MAX);
    Pallet::<T>::credit(who, amount).expect("fresh account cannot overflow");
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let owner = owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Cap::<T>::put(u128::MAX);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    #[benchmark]
    fn burn_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        fund::<T>(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 2_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&holder, &spender), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Whitelist::<T>::insert(&caller, true);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        Whitelist::<T>::insert(&holder, true);
        fund::<T>(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 2_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), holder, recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn set_allow_transfer_on() {
        let owner = owner::<T>();
        let block = T::ReferenceClock::current_block_number() + 10u32.into();
        LockToBlock::<T>::put(block);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), block);

        assert_eq!(AllowTransferOn::<T>::get(), Some(block));
    }

    #[benchmark]
    fn add_whitelist() {
        let owner = owner::<T>();
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert!(Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn revoke_whitelist() {
        let owner = owner::<T>();
        let account: T::AccountId = account("member", 0, 0);
        Whitelist::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert!(!Whitelist::<T>::get(&account));
    }

    #[benchmark]
    fn renounce_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        Whitelist::<T>::insert(&caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert!(!Whitelist::<T>::get(&caller));
    }

    #[benchmark]
    fn lock() {
        let owner = owner::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        Whitelist::<T>::insert(&holder, true);
        fund::<T>(&holder, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holder.clone(), 7_500_000);

        assert_eq!(Locked::<T>::get(&holder), 7_500_000);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = owner::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let owner = owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Owner::<T>::get(), None);
    }

    impl_benchmark_test_suite!(GatedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
