//! Supply control: capped minting, burning and allowances.

use super::*;

impl<T: Config> Pallet<T> {
    pub(crate) fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        let headroom = Cap::<T>::get().saturating_sub(TotalSupply::<T>::get());
        ensure!(amount <= headroom, Error::<T>::CapExceeded);

        Self::credit(to, amount)?;
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    pub(crate) fn do_burn(who: &T::AccountId, amount: u128) -> DispatchResult {
        Self::debit_available(who, amount)?;
        Self::deposit_event(Event::Burned { from: who.clone(), amount });
        Ok(())
    }

    /// Burn from `owner` on behalf of `spender`.
    ///
    /// Requires an explicit non-zero allowance covering `amount`, even when the
    /// spender is the ledger owner.
    pub(crate) fn do_burn_from(
        spender: &T::AccountId,
        owner: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let allowance = Allowances::<T>::get(owner, spender);
        ensure!(allowance != 0 && allowance >= amount, Error::<T>::Unauthorized);

        Self::debit_available(owner, amount)?;
        Self::set_allowance(owner, spender, allowance - amount);
        Self::deposit_event(Event::Burned { from: owner.clone(), amount });
        Ok(())
    }

    pub(crate) fn do_approve(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Self::set_allowance(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
        Ok(())
    }

    /// Consume `amount` of `spender`'s allowance over `owner`.
    pub(crate) fn spend_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let remaining = Allowances::<T>::get(owner, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::Unauthorized)?;
        Self::set_allowance(owner, spender, remaining);
        Ok(())
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }
}
