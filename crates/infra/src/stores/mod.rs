//! Storage traits and their in-memory implementations.
//!
//! The in-memory stores are `RwLock<HashMap>`-based and intended for
//! tests, development, and the single-process deployment this service
//! targets. Durable backends implement the same traits.

pub mod account;
pub mod session;
pub mod wallet;

pub use account::{AccountStore, InMemoryAccountStore};
pub use session::{InMemorySessionStore, SessionStore};
pub use wallet::{InMemoryWalletStore, WalletStore};
