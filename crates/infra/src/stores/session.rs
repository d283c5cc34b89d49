use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use soldo_auth::{Session, SessionError, SessionToken};

/// Session store: a passive token → session map.
///
/// Tokens are generated by the initializer, never by the store.
pub trait SessionStore: Send + Sync {
    /// Unconditional upsert by token.
    fn put(&self, session: &Session) -> Result<(), SessionError>;

    fn get(&self, token: &SessionToken) -> Result<Session, SessionError>;
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn put(&self, session: &Session) -> Result<(), SessionError> {
        (**self).put(session)
    }

    fn get(&self, token: &SessionToken) -> Result<Session, SessionError> {
        (**self).get(token)
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionToken, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn put(&self, session: &Session) -> Result<(), SessionError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| SessionError::Storage("lock poisoned".to_string()))?;
        map.insert(session.token.clone(), session.clone());
        Ok(())
    }

    fn get(&self, token: &SessionToken) -> Result<Session, SessionError> {
        let map = self
            .inner
            .read()
            .map_err(|_| SessionError::Storage("lock poisoned".to_string()))?;
        map.get(token).cloned().ok_or(SessionError::NotFound)
    }
}
