//! `soldo-core` — shared identifier types.
//!
//! This crate contains the strongly-typed identifiers used across the
//! domain. No storage, no HTTP, no business rules.

pub mod id;

pub use id::{TransactionId, WalletId, Xid};
