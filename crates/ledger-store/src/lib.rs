//! Storage layer for the expense ledger.
//!
//! This crate provides durable storage for transaction records using
//! `RocksDB`, with a date index for period queries.
//!
//! # Architecture
//!
//! The storage uses the following column families:
//!
//! - `transactions`: Primary transaction records, keyed by ULID id
//! - `transactions_by_date`: Index for period queries, keyed by
//!   `date || id` (order-preserving)
//!
//! # Example
//!
//! ```no_run
//! use ledger_store::{RocksStore, Store};
//! use ledger_core::{PeriodFilter, Transaction, TransactionKind};
//! use chrono::NaiveDate;
//!
//! let store = RocksStore::open("/tmp/ledger-db").unwrap();
//!
//! let tx = Transaction::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     "rent".into(),
//!     1200.0,
//!     TransactionKind::Debit,
//! );
//! store.put_transaction(&tx).unwrap();
//!
//! let march = store
//!     .list_transactions(&PeriodFilter::new(Some(3), Some(2024)))
//!     .unwrap();
//! assert_eq!(march.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod memory;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use rocks::RocksStore;

use ledger_core::{PeriodFilter, Transaction, TransactionId, TransactionPatch};

/// The storage trait defining all ledger database operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (`RocksDB` for the service, in-memory for testing).
/// Single-record atomicity is the implementation's responsibility; callers
/// hold no state between requests.
pub trait Store: Send + Sync {
    /// Insert a transaction record and its date index entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Get a transaction by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_transaction(&self, id: &TransactionId) -> Result<Option<Transaction>>;

    /// List transactions matching a period filter, in ascending date order.
    ///
    /// Date order is the store's default ordering and is stable across
    /// filter shapes. Records sharing a date come back in insertion order
    /// (ids are time-ordered).
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_transactions(&self, filter: &PeriodFilter) -> Result<Vec<Transaction>>;

    /// Apply a partial update keyed by id, refreshing `updated_at`.
    ///
    /// Returns the record as stored after the merge. The date index entry
    /// moves when the patch changes the date.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches the id.
    fn update_transaction(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
    ) -> Result<Transaction>;

    /// Delete a transaction by id. Deletion is permanent and immediate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches the id.
    fn delete_transaction(&self, id: &TransactionId) -> Result<()>;

    /// Count all stored transactions.
    ///
    /// Used by the health path as a reachability probe.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn transaction_count(&self) -> Result<u64>;
}
