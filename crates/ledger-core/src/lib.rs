//! Core types and aggregation logic for the expense ledger.
//!
//! This crate provides the foundational pieces used throughout the ledger:
//!
//! - **Identifiers**: [`TransactionId`]
//! - **Records**: [`Transaction`], [`TransactionKind`], [`TransactionPatch`]
//! - **Period filtering**: [`PeriodFilter`], [`month_and_year`]
//! - **Aggregation**: [`Summary`], [`MonthlyTotals`], [`summarize`], [`monthly_series`]
//!
//! # Amounts
//!
//! Amounts are non-negative `f64` values; the direction of a transaction is
//! carried by its [`TransactionKind`], never by the sign of the amount.
//! Credits increase the balance, debits decrease it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod error;
pub mod ids;
pub mod period;
pub mod transaction;

pub use aggregate::{monthly_series, summarize, MonthlyTotals, Summary, MONTHS_PER_YEAR};
pub use error::{LedgerError, Result};
pub use ids::{IdError, TransactionId};
pub use period::{month_and_year, PeriodFilter};
pub use transaction::{Transaction, TransactionKind, TransactionPatch};
