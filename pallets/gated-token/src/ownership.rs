//! Single-owner authorization.

use super::*;

impl<T: Config> Pallet<T> {
    /// Whether `who` is the current ledger owner.
    pub fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    /// Resolve the signed caller and require it to be the owner.
    pub(crate) fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// Hand ownership to `new_owner`, or drop it for good with `None`.
    ///
    /// Once the gate exists the whitelist entry follows ownership: the previous
    /// owner loses it and the new owner gets it, as the genesis owner did.
    pub(crate) fn do_transfer_ownership(new_owner: Option<T::AccountId>) -> DispatchResult {
        let previous_owner = Owner::<T>::get();

        if let Some(previous) = &previous_owner {
            if Self::is_upgraded() {
                Self::do_revoke_whitelist(previous.clone())?;
            }
        }

        match &new_owner {
            Some(owner) => {
                Owner::<T>::put(owner);
                if Self::is_upgraded() {
                    Self::do_add_whitelist(owner.clone())?;
                }
            },
            None => Owner::<T>::kill(),
        }

        log::info!(
            target: LOG_TARGET,
            "Ownership transferred from {:?} to {:?}",
            previous_owner,
            new_owner
        );
        Self::deposit_event(Event::OwnershipTransferred { previous_owner, new_owner });
        Ok(())
    }
}
