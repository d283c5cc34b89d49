//! Wallet engine: orchestrates enable/disable/deposit/withdraw against
//! the wallet store + ledger.
//!
//! Every mutation of one owner's wallet runs under that owner's lock, so
//! the read-compute-write sequence (and the ledger append that belongs to
//! it) is serialized per wallet. Reads take no lock; they see either the
//! state before or after a commit, never in between (the store commits
//! wallet + ledger entry atomically).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{debug, info};

use soldo_core::{WalletId, Xid};
use soldo_wallet::{
    TransactionKind, Wallet, WalletError, WalletTransaction, WalletTransactionParam,
    WalletTransactionResult,
};

use crate::stores::WalletStore;

/// Keyed mutex registry: one lock per wallet owner.
///
/// Lock entries are never removed; the owner population is the customer
/// population, which this single-process service holds in memory anyway.
#[derive(Debug, Default)]
struct OwnerLocks {
    inner: Mutex<HashMap<Xid, Arc<Mutex<()>>>>,
}

impl OwnerLocks {
    fn for_owner(&self, xid: &Xid) -> Arc<Mutex<()>> {
        let mut map = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        map.entry(xid.clone()).or_default().clone()
    }
}

/// The wallet transaction engine.
///
/// Generic over the backing [`WalletStore`]; construct with the store it
/// should own (or an `Arc` of a shared one).
#[derive(Debug)]
pub struct WalletEngine<S> {
    store: S,
    locks: OwnerLocks,
}

impl<S: WalletStore> WalletEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: OwnerLocks::default(),
        }
    }

    /// Enable the owner's wallet, creating it lazily on first enable.
    ///
    /// A brand-new owner goes absent → enabled in one call; the
    /// intermediate disabled state is not independently observable.
    pub fn enable_wallet(&self, owner_xid: &Xid) -> Result<Wallet, WalletError> {
        let lock = self.locks.for_owner(owner_xid);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut wallet = match self.store.wallet_by_xid(owner_xid) {
            Ok(wallet) => wallet,
            Err(WalletError::NotFound) => {
                let wallet = Wallet::new(owner_xid.clone());
                self.store.create_wallet(&wallet)?;
                wallet
            }
            Err(err) => return Err(err),
        };

        wallet.enable(Utc::now())?;
        self.store.update_wallet(&wallet)?;

        info!(owner = %owner_xid, wallet = %wallet.id, "wallet enabled");
        Ok(wallet)
    }

    /// Disable the owner's wallet. The balance is untouched.
    pub fn disable_wallet(&self, owner_xid: &Xid) -> Result<Wallet, WalletError> {
        let lock = self.locks.for_owner(owner_xid);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut wallet = self.store.wallet_by_xid(owner_xid)?;
        wallet.disable()?;
        self.store.update_wallet(&wallet)?;

        info!(owner = %owner_xid, wallet = %wallet.id, "wallet disabled");
        Ok(wallet)
    }

    /// Record a deposit and credit the balance.
    pub fn deposit(
        &self,
        param: WalletTransactionParam,
    ) -> Result<WalletTransactionResult, WalletError> {
        self.transact(param, TransactionKind::Deposit)
    }

    /// Record a withdrawal and debit the balance.
    pub fn withdraw(
        &self,
        param: WalletTransactionParam,
    ) -> Result<WalletTransactionResult, WalletError> {
        self.transact(param, TransactionKind::Withdrawal)
    }

    /// Passthrough wallet lookup by owner xid.
    pub fn wallet_by_xid(&self, owner_xid: &Xid) -> Result<Wallet, WalletError> {
        self.store.wallet_by_xid(owner_xid)
    }

    /// All transactions of a wallet in append order; empty when none.
    pub fn transactions(&self, wallet_id: WalletId) -> Result<Vec<WalletTransaction>, WalletError> {
        self.store.transactions(wallet_id)
    }

    fn transact(
        &self,
        param: WalletTransactionParam,
        kind: TransactionKind,
    ) -> Result<WalletTransactionResult, WalletError> {
        // No wallet lookup until the parameters are known-good.
        param.validate()?;

        let lock = self.locks.for_owner(&param.owner_xid);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut wallet = self.store.wallet_by_xid(&param.owner_xid)?;
        match kind {
            TransactionKind::Deposit => wallet.deposit(param.amount)?,
            TransactionKind::Withdrawal => wallet.withdraw(param.amount)?,
        }

        let trx = WalletTransaction::new(
            wallet.id,
            param.actor_xid,
            param.reference_id,
            kind,
            param.amount,
            Utc::now(),
        );
        self.store.commit_transaction(&wallet, &trx)?;

        debug!(
            wallet = %wallet.id,
            kind = %kind,
            amount = trx.amount,
            balance = wallet.balance,
            "transaction committed"
        );
        Ok(WalletTransactionResult::from(&trx))
    }
}
