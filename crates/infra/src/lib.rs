//! Infrastructure layer: storage traits, in-memory stores, orchestration.
//!
//! Domain crates stay pure; this crate owns everything that touches
//! shared mutable state. Components are constructed explicitly and
//! injected — there is no process-wide singleton store.

pub mod engine;
pub mod initializer;
pub mod stores;


pub use engine::WalletEngine;
pub use initializer::{InitError, Initializer};
pub use stores::{
    AccountStore, InMemoryAccountStore, InMemorySessionStore, InMemoryWalletStore, SessionStore,
    WalletStore,
};
