//! Summary and monthly-chart handlers.
//!
//! Both endpoints fetch the filtered set from the store and hand it to the
//! pure aggregation functions in `ledger-core`. A store failure surfaces as
//! a server error; there is no partial-result fallback.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Deserialize;

use ledger_core::{monthly_series, summarize, MonthlyTotals, PeriodFilter, Summary};

use crate::error::ApiError;
use crate::handlers::transactions::PeriodQuery;
use crate::state::AppState;

/// Debit/credit totals and balance over the selected period.
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Summary>, ApiError> {
    let filter = PeriodFilter::from(&query);
    let transactions = state.store.list_transactions(&filter)?;

    Ok(Json(summarize(&transactions)))
}

/// Chart query parameters.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Target year; defaults to the current UTC year.
    pub year: Option<i32>,
}

/// Monthly debit/credit totals for one year, gap-filled to 12 entries.
pub async fn monthly_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<Vec<MonthlyTotals>>, ApiError> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let transactions = state.store.list_transactions(&PeriodFilter::for_year(year))?;

    Ok(Json(monthly_series(&transactions)))
}
