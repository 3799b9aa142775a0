//! Transfer gate: a block-based opening marker plus a whitelist of accounts
//! that are exempt from it.
//!
//! The gate only exists from storage version 2 onwards. On a version 1 chain
//! transfers are ungated and the gate entry points refuse with
//! [`Error::NotUpgraded`].

use super::*;

impl<T: Config> Pallet<T> {
    /// Whether the gate, whitelist and lock bucket are live on this chain.
    pub fn is_upgraded() -> bool {
        Self::on_chain_storage_version() >= GATED_STORAGE_VERSION
    }

    /// Whether value may move out of `who` under the gate rules: the opening
    /// block is set and reached, or `who` is whitelisted.
    ///
    /// Always `true` on a version 1 chain, where transfers are ungated.
    pub fn is_transfer_allowed(who: &T::AccountId) -> bool {
        if !Self::is_upgraded() {
            return true;
        }
        let open = AllowTransferOn::<T>::get()
            .is_some_and(|from| T::ReferenceClock::current_block_number() >= from);
        open || Whitelist::<T>::get(who)
    }

    pub(crate) fn ensure_upgraded() -> DispatchResult {
        ensure!(Self::is_upgraded(), Error::<T>::NotUpgraded);
        Ok(())
    }

    /// Gate check for value leaving `who`.
    pub(crate) fn ensure_transfer_allowed(who: &T::AccountId) -> DispatchResult {
        ensure!(Self::is_transfer_allowed(who), Error::<T>::TransferNotAllowed);
        Ok(())
    }

    /// The opening block must lie strictly in the future and no later than the
    /// end of the lock window recorded at genesis.
    pub(crate) fn do_set_allow_transfer_on(block: BlockNumberFor<T>) -> DispatchResult {
        let now = T::ReferenceClock::current_block_number();
        ensure!(block > now, Error::<T>::InvalidGateMarker);
        ensure!(block <= LockToBlock::<T>::get(), Error::<T>::InvalidGateMarker);

        AllowTransferOn::<T>::put(block);
        log::debug!(target: LOG_TARGET, "Transfer gate opens at {:?} (now {:?})", block, now);
        Self::deposit_event(Event::AllowTransferOnSet { block });
        Ok(())
    }

    pub(crate) fn do_add_whitelist(account: T::AccountId) -> DispatchResult {
        Whitelist::<T>::insert(&account, true);
        Self::deposit_event(Event::Whitelisted { account });
        Ok(())
    }

    pub(crate) fn do_revoke_whitelist(account: T::AccountId) -> DispatchResult {
        Whitelist::<T>::remove(&account);
        Self::deposit_event(Event::RemovedFromWhitelist { account });
        Ok(())
    }

    pub(crate) fn do_renounce_whitelist(who: T::AccountId) -> DispatchResult {
        ensure!(Whitelist::<T>::get(&who), Error::<T>::NotWhitelisted);
        Self::do_revoke_whitelist(who)
    }
}
