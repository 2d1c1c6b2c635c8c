//! Dashboard routes: property list and revenue summary.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::routes::auth::AuthTenant;
use crate::services::catalog::{self, PropertyEntry};
use crate::services::revenue::{self, RevenueError, RevenueTotals};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub property_id: String,
    pub total_revenue: f64,
    pub currency: String,
    pub reservations_count: i64,
}

impl From<RevenueTotals> for DashboardSummary {
    fn from(totals: RevenueTotals) -> Self {
        Self {
            property_id: totals.property_id,
            total_revenue: totals.total,
            currency: totals.currency,
            reservations_count: totals.count,
        }
    }
}

#[derive(Deserialize)]
pub struct SummaryQuery {
    property_id: Option<String>,
}

pub(crate) fn revenue_error_to_status(err: RevenueError) -> StatusCode {
    match err {
        RevenueError::Database(e) => {
            tracing::error!(error = %e, "revenue summary query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/dashboard/properties`: properties belonging to the caller's tenant.
pub async fn list_properties(auth: AuthTenant) -> Json<&'static [PropertyEntry]> {
    Json(catalog::tenant_properties(&auth.tenant_id))
}

/// `GET /api/dashboard/summary?property_id=...`: revenue totals for one property.
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthTenant,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<DashboardSummary>, StatusCode> {
    let property_id = query
        .property_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;

    let totals = revenue::revenue_summary(state.revenue.as_ref(), &state.revenue_cache, &auth.tenant_id, property_id)
        .await
        .map_err(revenue_error_to_status)?;

    Ok(Json(totals.into()))
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
