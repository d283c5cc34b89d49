use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use soldo_core::{TransactionId, WalletId, Xid};

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded on a ledger transaction.
///
/// Failed operations never reach the ledger, so `Success` is currently
/// the only value; the enum keeps the wire format (`"success"`) stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Success,
}

impl core::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionStatus::Success => f.write_str("success"),
        }
    }
}

/// One immutable entry in a wallet's append-only ledger.
///
/// Ordering within a wallet is append order, not timestamp order:
/// callers must not assume a chronological sort when clock resolution
/// collides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: TransactionId,
    pub wallet_id: WalletId,
    pub actor_xid: Xid,
    pub reference_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "transacted_at")]
    pub occurred_at: DateTime<Utc>,
    /// Positive amount in minor currency units.
    pub amount: i64,
    pub status: TransactionStatus,
}

impl WalletTransaction {
    pub fn new(
        wallet_id: WalletId,
        actor_xid: Xid,
        reference_id: String,
        kind: TransactionKind,
        amount: i64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            wallet_id,
            actor_xid,
            reference_id,
            kind,
            occurred_at,
            amount,
            status: TransactionStatus::Success,
        }
    }
}

/// What a successful deposit/withdrawal returns to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransactionResult {
    pub id: TransactionId,
    pub transacted_at: DateTime<Utc>,
    pub transacted_by: Xid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub status: TransactionStatus,
    pub reference_id: String,
}

impl From<&WalletTransaction> for WalletTransactionResult {
    fn from(trx: &WalletTransaction) -> Self {
        Self {
            id: trx.id,
            transacted_at: trx.occurred_at,
            transacted_by: trx.actor_xid.clone(),
            kind: trx.kind,
            amount: trx.amount,
            status: trx.status,
            reference_id: trx.reference_id.clone(),
        }
    }
}
