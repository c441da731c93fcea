//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Store reachability report.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    /// "connected" or an informational failure description.
    pub status: String,
    /// Number of stored transactions, when reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<u64>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Store reachability.
    pub store: StoreHealth,
}

/// Health check endpoint.
///
/// Store problems degrade to informational text here; this endpoint never
/// fails hard.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = match state.store.transaction_count() {
        Ok(count) => StoreHealth {
            status: "connected".to_string(),
            transactions: Some(count),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store unreachable during health check");
            StoreHealth {
                status: format!("unavailable: {e}"),
                transactions: None,
            }
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        service: "expense-ledger".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
    })
}
