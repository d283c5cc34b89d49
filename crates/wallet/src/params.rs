use serde::{Deserialize, Serialize};

use soldo_core::Xid;

use crate::error::{FieldError, ValidationError};

/// Parameters for a deposit or withdrawal.
///
/// `actor_xid` is the authenticated caller; `owner_xid` selects the
/// wallet. In the current API both come from the same session, but they
/// are carried separately so the ledger records who acted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransactionParam {
    pub actor_xid: Xid,
    pub owner_xid: Xid,
    pub reference_id: String,
    /// Amount in minor currency units; must be positive.
    pub amount: i64,
}

impl WalletTransactionParam {
    /// Check every field and accumulate all violations.
    ///
    /// The engine performs no wallet lookup until this passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        if self.actor_xid.is_empty() {
            errors.add("actor_xid", FieldError::MissingRequiredParameter);
        }
        if self.owner_xid.is_empty() {
            errors.add("owner_xid", FieldError::MissingRequiredParameter);
        }
        if self.reference_id.is_empty() {
            errors.add("reference_id", FieldError::MissingRequiredParameter);
        }
        if self.amount <= 0 {
            errors.add("amount", FieldError::InvalidAmount);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> WalletTransactionParam {
        WalletTransactionParam {
            actor_xid: Xid::from("cust-1"),
            owner_xid: Xid::from("cust-1"),
            reference_id: "ref-1".to_string(),
            amount: 100,
        }
    }

    #[test]
    fn valid_param_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_and_negative_amounts_are_invalid() {
        for amount in [0, -1, i64::MIN] {
            let param = WalletTransactionParam { amount, ..valid() };
            let errors = param.validate().unwrap_err();
            assert_eq!(errors.get("amount"), Some(FieldError::InvalidAmount));
        }
    }

    #[test]
    fn missing_actor_xid_is_reported() {
        let param = WalletTransactionParam {
            actor_xid: Xid::new(""),
            ..valid()
        };
        let errors = param.validate().unwrap_err();
        assert_eq!(
            errors.get("actor_xid"),
            Some(FieldError::MissingRequiredParameter)
        );
        assert_eq!(errors.len(), 1);
    }

    // reference_id must be validated on its own, not conflated with
    // actor_xid: a present actor must not mask an absent reference.
    #[test]
    fn missing_reference_id_is_reported() {
        let param = WalletTransactionParam {
            reference_id: String::new(),
            ..valid()
        };
        let errors = param.validate().unwrap_err();
        assert_eq!(
            errors.get("reference_id"),
            Some(FieldError::MissingRequiredParameter)
        );
        assert!(errors.get("actor_xid").is_none());
    }

    #[test]
    fn all_violations_accumulate() {
        let param = WalletTransactionParam {
            actor_xid: Xid::new(""),
            owner_xid: Xid::new(""),
            reference_id: String::new(),
            amount: 0,
        };
        let errors = param.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("amount"), Some(FieldError::InvalidAmount));
        assert_eq!(
            errors.get("owner_xid"),
            Some(FieldError::MissingRequiredParameter)
        );
    }
}
