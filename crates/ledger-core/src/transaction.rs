//! Transaction records and partial updates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, Result};
use crate::ids::TransactionId;

/// The direction of a transaction.
///
/// Exactly two variants exist; anything else is rejected at the boundary.
/// The amount itself is always non-negative, so the kind alone decides
/// whether a record increases or decreases the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Decreases the balance.
    Debit,
    /// Increases the balance.
    Credit,
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(LedgerError::InvalidKind),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// A single ledger entry.
///
/// Identity is assigned at creation and never changes; `created_at` is fixed
/// at insertion and `updated_at` is refreshed on every successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID (ULID for time-ordering).
    pub id: TransactionId,

    /// The calendar date of the transaction; the period-filtering key.
    pub date: NaiveDate,

    /// Free-form description.
    pub description: String,

    /// Non-negative monetary amount.
    pub amount: f64,

    /// Whether this entry is a debit or a credit.
    pub kind: TransactionKind,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh id and both timestamps set to now.
    #[must_use]
    pub fn new(date: NaiveDate, description: String, amount: f64, kind: TransactionKind) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::generate(),
            date,
            description,
            amount,
            kind,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validate that an amount is usable as a monetary quantity.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidAmount`] if the amount is negative, NaN,
/// or infinite.
pub fn validate_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount { amount })
    }
}

/// A sparse patch for partial updates.
///
/// Each field is individually present-or-absent; only supplied fields are
/// merged into the target record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPatch {
    /// New calendar date, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// New description, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New amount, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// New kind, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
}

impl TransactionPatch {
    /// Whether the patch carries no fields at all.
    ///
    /// An empty patch is a no-op: it must not touch the store and must not
    /// refresh `updated_at`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.kind.is_none()
    }

    /// Merge the supplied fields into `transaction`.
    ///
    /// The record's identity and `created_at` are left untouched; stamping
    /// `updated_at` is the caller's job so that the merge itself stays pure.
    pub fn apply(&self, transaction: &mut Transaction) {
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(ref description) = self.description {
            transaction.description.clone_from(description);
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
    }
}
