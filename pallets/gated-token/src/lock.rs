//! Locking moves available funds into the locked bucket. Locked funds still
//! count towards the account's total balance and the supply, but they can
//! never be spent; there is no unlock.

use super::*;

impl<T: Config> Pallet<T> {
    pub(crate) fn do_lock(account: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(amount <= Balances::<T>::get(account), Error::<T>::LockExceedsBalance);
        ensure!(Self::is_transfer_allowed(account), Error::<T>::TransferNotAllowed);

        Self::move_to_locked(account, amount)?;
        Self::deposit_event(Event::Locked { account: account.clone(), amount });
        Ok(())
    }
}
