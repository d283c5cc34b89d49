//! `soldo-wallet` — wallet domain module.
//!
//! Business rules for wallets and their transaction ledger, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).
//! The state machine per wallet is `absent → disabled → enabled ⇄ disabled`,
//! and a balance may only change through a recorded transaction.

pub mod error;
pub mod params;
pub mod transaction;
pub mod wallet;

pub use error::{FieldError, ValidationError, WalletError};
pub use params::WalletTransactionParam;
pub use transaction::{
    TransactionKind, TransactionStatus, WalletTransaction, WalletTransactionResult,
};
pub use wallet::{Wallet, WalletStatus};
