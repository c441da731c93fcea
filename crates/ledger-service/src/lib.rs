//! Expense Ledger HTTP API Service.
//!
//! This crate provides the HTTP API for the expense ledger, including:
//!
//! - Transaction create/list/update/delete
//! - Period-filtered summaries (debit/credit totals and balance)
//! - Gap-filled monthly chart series
//! - Health diagnostics with store reachability

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers must be async for routing

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
