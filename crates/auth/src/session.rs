use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use soldo_accounts::Account;

/// Opaque bearer token identifying a session.
///
/// Generated once at init time (random UUIDv4); never parsed, only
/// looked up. Compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A server-issued session binding one token to one account.
///
/// Sessions live for the process lifetime; there is no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub account: Account,
}

impl Session {
    /// Issue a new session for an account with a freshly generated token.
    pub fn issue(account: Account) -> Self {
        Self {
            token: SessionToken::generate(),
            account,
        }
    }
}

/// Session store failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session bound to the presented token.
    #[error("session not found")]
    NotFound,

    /// Unexpected backing-store failure, wrapped with context.
    #[error("session storage failure: {0}")]
    Storage(String),
}
