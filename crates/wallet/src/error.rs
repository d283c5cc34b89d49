//! Wallet error model.

use std::collections::BTreeMap;

use thiserror::Error;

/// What went wrong with a single parameter field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing required parameter")]
    MissingRequiredParameter,

    #[error("amount must be greater than zero")]
    InvalidAmount,
}

/// Accumulated field-level validation failures.
///
/// Validation is not fail-fast: every violated field appears in the map,
/// so a caller can report all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.errors.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Field name → error pairs, in field-name order.
    pub fn errors(&self) -> &BTreeMap<&'static str, FieldError> {
        &self.errors
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "validation failed")?;
        let mut sep = ": ";
        for (field, err) in &self.errors {
            write!(f, "{sep}{field} ({err})")?;
            sep = ", ";
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Wallet engine failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet exists for the given owner.
    #[error("wallet not found")]
    NotFound,

    /// Enable was called on a wallet that is already enabled.
    #[error("wallet is already enabled")]
    AlreadyEnabled,

    /// The wallet is disabled; the requested operation needs it enabled
    /// (or it was disabled twice in a row).
    #[error("wallet is disabled")]
    Disabled,

    /// Withdrawal larger than the current balance.
    #[error("insufficient balance: have {balance}, requested {requested}")]
    InsufficientBalance { balance: i64, requested: i64 },

    /// Deposit would push the balance past the representable maximum.
    #[error("balance overflow: have {balance}, requested {requested}")]
    BalanceOverflow { balance: i64, requested: i64 },

    /// Parameter validation failed; see the per-field map.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unexpected backing-store failure, wrapped with context.
    #[error("wallet storage failure: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_accumulates_and_displays_all_fields() {
        let mut ve = ValidationError::new();
        ve.add("amount", FieldError::InvalidAmount);
        ve.add("owner_xid", FieldError::MissingRequiredParameter);

        assert_eq!(ve.len(), 2);
        assert_eq!(ve.get("amount"), Some(FieldError::InvalidAmount));
        let msg = ve.to_string();
        assert!(msg.contains("amount"));
        assert!(msg.contains("owner_xid"));
    }

    #[test]
    fn wallet_error_wraps_validation_transparently() {
        let mut ve = ValidationError::new();
        ve.add("actor_xid", FieldError::MissingRequiredParameter);
        let err = WalletError::from(ve.clone());

        match err {
            WalletError::Validation(inner) => assert_eq!(inner, ve),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
