//! Ordinary and delegated transfers between available balances.

use super::*;

impl<T: Config> Pallet<T> {
    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Self::ensure_transfer_allowed(from)?;
        Self::move_available(from, to, amount)
    }

    /// Move `amount` from `owner` to `to` using `spender`'s allowance. The gate
    /// is checked against `owner`, whose funds are leaving.
    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        owner: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Self::ensure_transfer_allowed(owner)?;
        ensure!(Allowances::<T>::get(owner, spender) >= amount, Error::<T>::Unauthorized);

        Self::move_available(owner, to, amount)?;
        Self::spend_allowance(owner, spender, amount)
    }

    fn move_available(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::debit_available(from, amount)?;
        Self::credit(to, amount)?;
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }
}
