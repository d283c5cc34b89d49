use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

use soldo_core::{WalletId, Xid};
use soldo_wallet::{Wallet, WalletError, WalletTransaction};

/// Wallet store + transaction ledger.
///
/// Transactions are scoped to their wallet: the ledger owns their
/// lifetime and preserves append order per wallet.
pub trait WalletStore: Send + Sync {
    fn wallet_by_xid(&self, xid: &Xid) -> Result<Wallet, WalletError>;

    /// Insert a brand-new wallet. The engine serializes per-owner, so a
    /// duplicate insert indicates a caller bug and maps to a storage error.
    fn create_wallet(&self, wallet: &Wallet) -> Result<(), WalletError>;

    fn update_wallet(&self, wallet: &Wallet) -> Result<(), WalletError>;

    /// Persist the post-transaction wallet state and append the ledger
    /// entry as one unit: a reader never observes one without the other.
    fn commit_transaction(
        &self,
        wallet: &Wallet,
        trx: &WalletTransaction,
    ) -> Result<(), WalletError>;

    /// All transactions for a wallet in append order; empty when none.
    fn transactions(&self, wallet_id: WalletId) -> Result<Vec<WalletTransaction>, WalletError>;
}

impl<S> WalletStore for Arc<S>
where
    S: WalletStore + ?Sized,
{
    fn wallet_by_xid(&self, xid: &Xid) -> Result<Wallet, WalletError> {
        (**self).wallet_by_xid(xid)
    }

    fn create_wallet(&self, wallet: &Wallet) -> Result<(), WalletError> {
        (**self).create_wallet(wallet)
    }

    fn update_wallet(&self, wallet: &Wallet) -> Result<(), WalletError> {
        (**self).update_wallet(wallet)
    }

    fn commit_transaction(
        &self,
        wallet: &Wallet,
        trx: &WalletTransaction,
    ) -> Result<(), WalletError> {
        (**self).commit_transaction(wallet, trx)
    }

    fn transactions(&self, wallet_id: WalletId) -> Result<Vec<WalletTransaction>, WalletError> {
        (**self).transactions(wallet_id)
    }
}

#[derive(Debug, Default)]
struct State {
    wallets: HashMap<Xid, Wallet>,
    ledger: HashMap<WalletId, Vec<WalletTransaction>>,
}

/// In-memory wallet store.
///
/// One `RwLock` guards wallets and ledger together, which is what makes
/// [`WalletStore::commit_transaction`] atomic with respect to readers.
#[derive(Debug, Default)]
pub struct InMemoryWalletStore {
    inner: RwLock<State>,
}

impl InMemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> WalletError {
        WalletError::Storage("lock poisoned".to_string())
    }
}

impl WalletStore for InMemoryWalletStore {
    fn wallet_by_xid(&self, xid: &Xid) -> Result<Wallet, WalletError> {
        let state = self.inner.read().map_err(|_| Self::poisoned())?;
        state.wallets.get(xid).cloned().ok_or(WalletError::NotFound)
    }

    fn create_wallet(&self, wallet: &Wallet) -> Result<(), WalletError> {
        let mut state = self.inner.write().map_err(|_| Self::poisoned())?;
        match state.wallets.entry(wallet.owner_xid.clone()) {
            Entry::Occupied(_) => Err(WalletError::Storage(format!(
                "wallet already exists for owner {}",
                wallet.owner_xid
            ))),
            Entry::Vacant(slot) => {
                slot.insert(wallet.clone());
                Ok(())
            }
        }
    }

    fn update_wallet(&self, wallet: &Wallet) -> Result<(), WalletError> {
        let mut state = self.inner.write().map_err(|_| Self::poisoned())?;
        match state.wallets.get_mut(&wallet.owner_xid) {
            Some(stored) => {
                *stored = wallet.clone();
                Ok(())
            }
            None => Err(WalletError::NotFound),
        }
    }

    fn commit_transaction(
        &self,
        wallet: &Wallet,
        trx: &WalletTransaction,
    ) -> Result<(), WalletError> {
        let mut state = self.inner.write().map_err(|_| Self::poisoned())?;
        if !state.wallets.contains_key(&wallet.owner_xid) {
            return Err(WalletError::NotFound);
        }
        state
            .wallets
            .insert(wallet.owner_xid.clone(), wallet.clone());
        state.ledger.entry(trx.wallet_id).or_default().push(trx.clone());
        Ok(())
    }

    fn transactions(&self, wallet_id: WalletId) -> Result<Vec<WalletTransaction>, WalletError> {
        let state = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(state.ledger.get(&wallet_id).cloned().unwrap_or_default())
    }
}
