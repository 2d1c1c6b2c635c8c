//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool used for session lookups, the revenue source, and
//! the revenue cache shared by every request.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::services::cache::RevenueCache;
use crate::services::revenue::RevenueSource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub revenue: Arc<dyn RevenueSource>,
    pub revenue_cache: RevenueCache,
    /// Tenant assumed for requests that carry no session token.
    pub dev_auth_tenant: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(
        pool: PgPool,
        revenue: Arc<dyn RevenueSource>,
        revenue_cache_ttl: Duration,
        dev_auth_tenant: Option<String>,
    ) -> Self {
        Self { pool, revenue, revenue_cache: RevenueCache::new(revenue_cache_ttl), dev_auth_tenant }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
