use serde::{Deserialize, Serialize};
use thiserror::Error;

use soldo_core::Xid;

/// A customer identity record, unique by external id.
///
/// Accounts are created once by the identity initializer, are immutable
/// afterwards, and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub xid: Xid,
}

impl Account {
    pub fn new(xid: Xid) -> Self {
        Self { xid }
    }
}

/// Account registry failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// An account with the same external id already exists.
    #[error("account already exists")]
    AlreadyExists,

    /// No account with the given external id.
    #[error("account not found")]
    NotFound,

    /// Unexpected backing-store failure, wrapped with context.
    #[error("account storage failure: {0}")]
    Storage(String),
}
