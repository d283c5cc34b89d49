use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use soldo_core::{WalletId, Xid};

use crate::error::WalletError;

/// Wallet lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletStatus {
    Enabled,
    Disabled,
}

impl core::fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WalletStatus::Enabled => f.write_str("enabled"),
            WalletStatus::Disabled => f.write_str("disabled"),
        }
    }
}

/// Per-owner balance and status record.
///
/// # Invariants
/// - Exactly one wallet per owner xid.
/// - `balance` is never negative.
/// - `balance` changes only through [`Wallet::deposit`] / [`Wallet::withdraw`],
///   each of which corresponds to one recorded ledger transaction.
/// - Deposits and withdrawals require `Enabled` status; disabling leaves
///   the balance untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub owner_xid: Xid,
    /// Balance in minor currency units. Single implicit currency.
    pub balance: i64,
    pub status: WalletStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_at: Option<DateTime<Utc>>,
}

impl Wallet {
    /// A fresh wallet: disabled, zero balance, never enabled.
    pub fn new(owner_xid: Xid) -> Self {
        Self {
            id: WalletId::new(),
            owner_xid,
            balance: 0,
            status: WalletStatus::Disabled,
            enabled_at: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == WalletStatus::Enabled
    }

    fn ensure_enabled(&self) -> Result<(), WalletError> {
        if !self.is_enabled() {
            return Err(WalletError::Disabled);
        }
        Ok(())
    }

    /// Transition to `Enabled`, stamping `enabled_at`.
    ///
    /// Fails with [`WalletError::AlreadyEnabled`] without touching any
    /// field if the wallet is already enabled.
    pub fn enable(&mut self, now: DateTime<Utc>) -> Result<(), WalletError> {
        if self.is_enabled() {
            return Err(WalletError::AlreadyEnabled);
        }
        self.status = WalletStatus::Enabled;
        self.enabled_at = Some(now);
        Ok(())
    }

    /// Transition to `Disabled`. The balance is untouched.
    pub fn disable(&mut self) -> Result<(), WalletError> {
        if !self.is_enabled() {
            return Err(WalletError::Disabled);
        }
        self.status = WalletStatus::Disabled;
        Ok(())
    }

    /// Credit the balance by a validated (positive) amount.
    ///
    /// Fails with [`WalletError::BalanceOverflow`] instead of wrapping
    /// if the balance would exceed `i64::MAX`; the balance is left
    /// unchanged on failure.
    pub fn deposit(&mut self, amount: i64) -> Result<(), WalletError> {
        self.ensure_enabled()?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(WalletError::BalanceOverflow {
                balance: self.balance,
                requested: amount,
            })?;
        Ok(())
    }

    /// Debit the balance by a validated (positive) amount.
    ///
    /// Fails with [`WalletError::InsufficientBalance`] if the balance
    /// would go negative; the balance is left unchanged on failure.
    pub fn withdraw(&mut self, amount: i64) -> Result<(), WalletError> {
        self.ensure_enabled()?;
        if self.balance < amount {
            return Err(WalletError::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}
