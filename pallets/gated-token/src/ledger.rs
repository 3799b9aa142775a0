//! Ledger store: available/locked buckets and the total supply.
//!
//! These primitives keep `TotalSupply == Σ (available + locked)` on their own.
//! They never check authorization or the transfer gate; callers do that first.

use super::*;

impl<T: Config> Pallet<T> {
    /// Spendable balance of `who`.
    pub fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    /// Locked balance of `who`.
    pub fn lock_of(who: &T::AccountId) -> u128 {
        Locked::<T>::get(who)
    }

    /// Available plus locked balance of `who`.
    pub fn total_balance_of(who: &T::AccountId) -> u128 {
        Self::balance_of(who).saturating_add(Self::lock_of(who))
    }

    /// Add `amount` to `who`'s available balance and to the total supply.
    ///
    /// The cap is the caller's concern.
    pub(crate) fn credit(who: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(who).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_available(who, balance);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    /// Remove `amount` from `who`'s available balance and from the total supply.
    ///
    /// A burn stops here; a transfer follows up with [`Self::credit`].
    pub(crate) fn debit_available(who: &T::AccountId, amount: u128) -> DispatchResult {
        let balance =
            Balances::<T>::get(who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        // Available is part of the supply, so this cannot underflow.
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_available(who, balance);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    /// Reclassify `amount` of `who`'s available balance as locked.
    pub(crate) fn move_to_locked(who: &T::AccountId, amount: u128) -> DispatchResult {
        let available =
            Balances::<T>::get(who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let locked = Locked::<T>::get(who).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_available(who, available);
        Locked::<T>::insert(who, locked);
        Ok(())
    }

    fn set_available(who: &T::AccountId, balance: u128) {
        if balance == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, balance);
        }
    }

    /// Check the supply invariants over the whole ledger.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let available = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, b| acc.checked_add(b))
            .ok_or(DispatchError::Other("available balances overflow"))?;
        let locked = Locked::<T>::iter_values()
            .try_fold(0u128, |acc, b| acc.checked_add(b))
            .ok_or(DispatchError::Other("locked balances overflow"))?;
        let held = available
            .checked_add(locked)
            .ok_or(DispatchError::Other("account balances overflow"))?;

        let supply = TotalSupply::<T>::get();
        ensure!(held == supply, DispatchError::Other("total supply does not match balances"));
        ensure!(supply <= Cap::<T>::get(), DispatchError::Other("total supply exceeds cap"));
        Ok(())
    }
}
