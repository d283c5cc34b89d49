//! `soldo-accounts` — customer account records.
//!
//! Pure domain types only: no IO, no HTTP, no storage concerns.

pub mod account;

pub use account::{Account, AccountError};
