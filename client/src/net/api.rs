//! REST API helpers for communicating with the dashboard server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. The browser sends
//! the `session_token` cookie on same-origin requests, so authorization stays
//! entirely on the server.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. Network, HTTP-status, and decode
//! failures collapse into one message so callers can degrade uniformly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Property, RevenueSummary};

pub const DASHBOARD_PROPERTIES_PATH: &str = "/api/dashboard/properties";
pub const DASHBOARD_SUMMARY_PATH: &str = "/api/dashboard/summary";

#[cfg(any(test, feature = "hydrate"))]
fn properties_failed_message(status: u16) -> String {
    format!("property list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_failed_message(status: u16) -> String {
    format!("revenue summary request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_query(property_id: &str) -> [(&'static str, &str); 1] {
    [("property_id", property_id)]
}

/// Fetch the properties the current user may view, in server order.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a property list.
pub async fn fetch_dashboard_properties() -> Result<Vec<Property>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DASHBOARD_PROPERTIES_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(properties_failed_message(resp.status()));
        }
        resp.json::<Vec<Property>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the revenue summary for one property via
/// `GET /api/dashboard/summary?property_id=...`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_revenue_summary(property_id: &str) -> Result<RevenueSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DASHBOARD_SUMMARY_PATH)
            .query(summary_query(property_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(summary_failed_message(resp.status()));
        }
        resp.json::<RevenueSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = property_id;
        Err("not available on server".to_owned())
    }
}
