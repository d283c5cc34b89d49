use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

use soldo_accounts::{Account, AccountError};
use soldo_core::Xid;

/// Account registry: customer identity records keyed by external id.
pub trait AccountStore: Send + Sync {
    /// Atomic insert-if-absent. Fails with [`AccountError::AlreadyExists`]
    /// if an account with the same xid is already registered; there is no
    /// check-then-act window.
    fn create(&self, account: &Account) -> Result<(), AccountError>;

    fn get(&self, xid: &Xid) -> Result<Account, AccountError>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn create(&self, account: &Account) -> Result<(), AccountError> {
        (**self).create(account)
    }

    fn get(&self, xid: &Xid) -> Result<Account, AccountError> {
        (**self).get(xid)
    }
}

/// In-memory account registry.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<HashMap<Xid, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, account: &Account) -> Result<(), AccountError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| AccountError::Storage("lock poisoned".to_string()))?;

        match map.entry(account.xid.clone()) {
            Entry::Occupied(_) => Err(AccountError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(())
            }
        }
    }

    fn get(&self, xid: &Xid) -> Result<Account, AccountError> {
        let map = self
            .inner
            .read()
            .map_err(|_| AccountError::Storage("lock poisoned".to_string()))?;
        map.get(xid).cloned().ok_or(AccountError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_returns_the_record() {
        let store = InMemoryAccountStore::new();
        let account = Account::new(Xid::from("cust-1"));
        store.create(&account).unwrap();
        assert_eq!(store.get(&Xid::from("cust-1")).unwrap(), account);
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let store = InMemoryAccountStore::new();
        let account = Account::new(Xid::from("cust-1"));
        store.create(&account).unwrap();
        assert_eq!(
            store.create(&account).unwrap_err(),
            AccountError::AlreadyExists
        );
    }

    #[test]
    fn get_missing_account_fails() {
        let store = InMemoryAccountStore::new();
        assert_eq!(
            store.get(&Xid::from("nobody")).unwrap_err(),
            AccountError::NotFound
        );
    }

    #[test]
    fn concurrent_creates_admit_exactly_one() {
        let store = Arc::new(InMemoryAccountStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                store.create(&Account::new(Xid::from("cust-1"))).is_ok()
            }));
        }
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|created| *created)
            .count();
        assert_eq!(winners, 1);
    }
}
