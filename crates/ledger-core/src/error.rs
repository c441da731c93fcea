//! Error types for ledger validation.

/// Result type for ledger core operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors raised when a transaction fails boundary validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// The transaction kind is not one of the two allowed variants.
    #[error("kind must be 'debit' or 'credit'")]
    InvalidKind,

    /// The amount is negative or not a finite number.
    #[error("invalid amount {amount}: must be a non-negative finite number")]
    InvalidAmount {
        /// The rejected amount.
        amount: f64,
    },
}
