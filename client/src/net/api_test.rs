use super::*;

#[test]
fn properties_failed_message_formats_status() {
    assert_eq!(properties_failed_message(401), "property list request failed: 401");
}

#[test]
fn summary_failed_message_formats_status() {
    assert_eq!(summary_failed_message(500), "revenue summary request failed: 500");
}

#[test]
fn summary_query_carries_raw_property_id() {
    assert_eq!(summary_query("prop 001&x"), [("property_id", "prop 001&x")]);
}

#[test]
fn dashboard_paths_live_under_api_prefix() {
    assert!(DASHBOARD_PROPERTIES_PATH.starts_with("/api/dashboard/"));
    assert!(DASHBOARD_SUMMARY_PATH.starts_with("/api/dashboard/"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_helpers_error_without_browser() {
    let props = futures::executor::block_on(fetch_dashboard_properties());
    assert_eq!(props, Err("not available on server".to_owned()));
    let summary = futures::executor::block_on(fetch_revenue_summary("prop-001"));
    assert_eq!(summary, Err("not available on server".to_owned()));
}
