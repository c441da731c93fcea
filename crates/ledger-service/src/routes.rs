//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, reports, transactions};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Diagnostics
/// - `GET /health` - Health check with store reachability
///
/// ## Transactions
/// - `POST /api/transactions` - Create a transaction
/// - `GET /api/transactions` - List transactions (optional month/year)
/// - `PATCH /api/transactions/:id` - Partial update
/// - `DELETE /api/transactions/:id` - Delete
///
/// ## Reports
/// - `GET /api/summary` - Debit/credit totals and balance (optional month/year)
/// - `GET /api/monthly-chart` - 12-entry monthly series (optional year)
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Diagnostics
        .route("/health", get(health::health))
        // Transactions
        .route("/api/transactions", post(transactions::create_transaction))
        .route("/api/transactions", get(transactions::list_transactions))
        .route(
            "/api/transactions/:id",
            patch(transactions::update_transaction),
        )
        .route(
            "/api/transactions/:id",
            delete(transactions::delete_transaction),
        )
        // Reports
        .route("/api/summary", get(reports::summary))
        .route("/api/monthly-chart", get(reports::monthly_chart))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
