//! Transaction create/list/update/delete handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledger_core::transaction::validate_amount;
use ledger_core::{PeriodFilter, Transaction, TransactionId, TransactionKind, TransactionPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Create transaction request.
///
/// An unknown `kind` fails deserialization, so nothing invalid ever reaches
/// the store.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Non-negative amount.
    pub amount: f64,
    /// `debit` or `credit`.
    pub kind: TransactionKind,
}

/// Create transaction response.
#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    /// The store-assigned identifier.
    pub id: String,
}

/// Create a new transaction.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<Json<CreateTransactionResponse>, ApiError> {
    validate_amount(body.amount)?;

    let transaction = Transaction::new(body.date, body.description, body.amount, body.kind);
    state.store.put_transaction(&transaction)?;

    tracing::info!(
        id = %transaction.id,
        date = %transaction.date,
        kind = %transaction.kind,
        amount = %transaction.amount,
        "Transaction created"
    );

    Ok(Json(CreateTransactionResponse {
        id: transaction.id.to_string(),
    }))
}

/// Period selectors accepted by the list and summary endpoints.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// Month selector (1-12 by convention).
    pub month: Option<u32>,
    /// Year selector.
    pub year: Option<i32>,
}

impl From<&PeriodQuery> for PeriodFilter {
    fn from(query: &PeriodQuery) -> Self {
        Self::new(query.month, query.year)
    }
}

/// A transaction normalized for external presentation.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Identifier as a plain string.
    pub id: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Description.
    pub description: String,
    /// Amount.
    pub amount: f64,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last-modification timestamp, RFC 3339.
    pub updated_at: String,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            date: tx.date.to_string(),
            description: tx.description.clone(),
            amount: tx.amount,
            kind: tx.kind,
            created_at: tx.created_at.to_rfc3339(),
            updated_at: tx.updated_at.to_rfc3339(),
        }
    }
}

/// List transactions, optionally restricted to a month and/or year.
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let filter = PeriodFilter::from(&query);
    let transactions = state.store.list_transactions(&filter)?;

    Ok(Json(
        transactions.iter().map(TransactionResponse::from).collect(),
    ))
}

/// Update response.
#[derive(Debug, Serialize)]
pub struct UpdateTransactionResponse {
    /// Whether anything was written. `false` means the patch was empty.
    pub updated: bool,
}

/// Apply a partial update to a transaction.
///
/// An empty patch is a successful no-op: the store is not contacted and
/// `updated_at` stays untouched.
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TransactionPatch>,
) -> Result<Json<UpdateTransactionResponse>, ApiError> {
    let id = parse_id(&id)?;

    if patch.is_empty() {
        return Ok(Json(UpdateTransactionResponse { updated: false }));
    }

    if let Some(amount) = patch.amount {
        validate_amount(amount)?;
    }

    state.store.update_transaction(&id, &patch)?;

    tracing::info!(id = %id, "Transaction updated");

    Ok(Json(UpdateTransactionResponse { updated: true }))
}

/// Delete response.
#[derive(Debug, Serialize)]
pub struct DeleteTransactionResponse {
    /// Always `true` on success.
    pub deleted: bool,
}

/// Delete a transaction permanently.
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTransactionResponse>, ApiError> {
    let id = parse_id(&id)?;

    state.store.delete_transaction(&id)?;

    tracing::info!(id = %id, "Transaction deleted");

    Ok(Json(DeleteTransactionResponse { deleted: true }))
}

/// Parse a path id, keeping malformed ids distinct from unknown ones.
fn parse_id(raw: &str) -> Result<TransactionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid transaction id: {raw}")))
}
