use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::services::revenue::RevenueSource;
use crate::state::test_helpers::test_app_state;

struct FixedSource {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl RevenueSource for FixedSource {
    async fn totals(&self, tenant_id: &str, property_id: &str) -> Result<RevenueTotals, RevenueError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RevenueTotals {
            property_id: property_id.to_owned(),
            total: if tenant_id == "tenant-a" { 1250.5 } else { 0.0 },
            currency: "USD".to_owned(),
            count: 2,
        })
    }
}

fn fixed_source() -> Arc<FixedSource> {
    Arc::new(FixedSource { calls: AtomicUsize::new(0) })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn properties_require_authentication() {
    let app = api_routes(test_app_state(fixed_source(), None));
    let (status, _) = get_json(app, "/api/dashboard/properties").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn properties_list_tenant_catalog_in_order() {
    let app = api_routes(test_app_state(fixed_source(), Some("tenant-a")));
    let (status, body) = get_json(app, "/api/dashboard/properties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            { "id": "prop-001", "name": "Beach House Alpha" },
            { "id": "prop-002", "name": "City Apartment Downtown" },
            { "id": "prop-003", "name": "Country Villa Estate" },
        ])
    );
}

#[tokio::test]
async fn properties_empty_for_unknown_tenant() {
    let app = api_routes(test_app_state(fixed_source(), Some("tenant-z")));
    let (status, body) = get_json(app, "/api/dashboard/properties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn summary_requires_property_id() {
    let app = api_routes(test_app_state(fixed_source(), Some("tenant-a")));
    let (status, _) = get_json(app.clone(), "/api/dashboard/summary").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get_json(app, "/api/dashboard/summary?property_id=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_returns_totals_and_caches() {
    let source = fixed_source();
    let app = api_routes(test_app_state(source.clone(), Some("tenant-a")));

    let (status, body) = get_json(app.clone(), "/api/dashboard/summary?property_id=prop-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "property_id": "prop-001",
            "total_revenue": 1250.5,
            "currency": "USD",
            "reservations_count": 2,
        })
    );

    let (status, _) = get_json(app, "/api/dashboard/summary?property_id=prop-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn summary_for_foreign_ids_does_not_fill_cache() {
    let state = test_app_state(fixed_source(), Some("tenant-a"));
    let cache = state.revenue_cache.clone();
    let app = api_routes(state);

    for i in 0..50 {
        let (status, body) = get_json(app.clone(), &format!("/api/dashboard/summary?property_id=not-mine-{i}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["property_id"], format!("not-mine-{i}"));
    }
    assert!(cache.is_empty());
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_app_state(fixed_source(), None));
    let (status, _) = get_json(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn database_errors_map_to_500() {
    let err = RevenueError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(revenue_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn summary_from_totals_renames_fields() {
    let summary = DashboardSummary::from(RevenueTotals {
        property_id: "prop-004".to_owned(),
        total: 720.0,
        currency: "USD".to_owned(),
        count: 1,
    });
    assert_eq!(summary.property_id, "prop-004");
    assert_eq!(summary.reservations_count, 1);
    assert!((summary.total_revenue - 720.0).abs() < f64::EPSILON);
}
