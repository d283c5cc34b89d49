//! `soldo-auth` — bearer sessions binding tokens to accounts.
//!
//! This crate is intentionally decoupled from HTTP and storage: it only
//! defines what a session *is*. Issuing and resolving sessions is the
//! infrastructure layer's job.

pub mod session;

pub use session::{Session, SessionError, SessionToken};
