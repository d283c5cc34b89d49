//! Identity initializer: account creation + session issuance.

use thiserror::Error;
use tracing::info;

use soldo_accounts::{Account, AccountError};
use soldo_auth::{Session, SessionError, SessionToken};
use soldo_core::Xid;

use crate::stores::{AccountStore, SessionStore};

/// Identity bootstrap failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("customer xid must not be empty")]
    MissingXid,

    /// The external id was already initialized.
    #[error("account already exists")]
    AlreadyExists,

    #[error("identity storage failure: {0}")]
    Storage(String),
}

/// Composes the account registry and the session store to bootstrap a
/// session for a new customer.
///
/// Constructed explicitly and injected where needed; there is no global
/// session store.
#[derive(Debug)]
pub struct Initializer<A, S> {
    accounts: A,
    sessions: S,
}

impl<A, S> Initializer<A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    pub fn new(accounts: A, sessions: S) -> Self {
        Self { accounts, sessions }
    }

    /// Create an account for `customer_xid` and issue its session.
    ///
    /// One account and one session per successful call; a second init
    /// for the same xid fails with [`InitError::AlreadyExists`] before
    /// any session is created.
    ///
    /// Known gap carried from the reference design: if session storage
    /// fails after the account was created, the account is not rolled
    /// back, so a retry also fails with `AlreadyExists`.
    pub fn init(&self, customer_xid: Xid) -> Result<Session, InitError> {
        if customer_xid.is_empty() {
            return Err(InitError::MissingXid);
        }

        let account = Account::new(customer_xid);
        self.accounts.create(&account).map_err(|err| match err {
            AccountError::AlreadyExists => InitError::AlreadyExists,
            other => InitError::Storage(format!("failed creating account: {other}")),
        })?;

        let session = Session::issue(account);
        self.sessions
            .put(&session)
            .map_err(|err| InitError::Storage(format!("failed storing session: {err}")))?;

        info!(customer = %session.account.xid, "customer initialized");
        Ok(session)
    }

    /// Resolve a bearer token to its session.
    pub fn authenticate(&self, token: &SessionToken) -> Result<Session, SessionError> {
        self.sessions.get(token)
    }
}
