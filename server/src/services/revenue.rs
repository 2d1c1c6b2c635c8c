//! Revenue aggregation for the dashboard summary.
//!
//! ARCHITECTURE
//! ============
//! `RevenueSource` is the seam between the summary route and storage:
//! `PgRevenueSource` aggregates the `reservations` table, while tests plug in
//! in-memory sources. `revenue_summary` layers the per-tenant TTL cache on top.
//! Only ids from the tenant's catalog are cached; anything else is answered
//! straight from the source so caller-supplied ids cannot grow the cache.
//!
//! Totals are kept as `NUMERIC` in Postgres and only converted to `f64` in
//! the aggregate query, so the float never round-trips back into storage.

#[cfg(test)]
#[path = "revenue_test.rs"]
mod revenue_test;

use sqlx::{PgPool, Row};

use super::cache::RevenueCache;
use super::catalog;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, thiserror::Error)]
pub enum RevenueError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Aggregated reservation totals for one `(tenant, property)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueTotals {
    pub property_id: String,
    pub total: f64,
    pub currency: String,
    pub count: i64,
}

#[async_trait::async_trait]
pub trait RevenueSource: Send + Sync {
    async fn totals(&self, tenant_id: &str, property_id: &str) -> Result<RevenueTotals, RevenueError>;
}

/// Postgres-backed revenue source.
pub struct PgRevenueSource {
    pool: PgPool,
}

impl PgRevenueSource {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RevenueSource for PgRevenueSource {
    async fn totals(&self, tenant_id: &str, property_id: &str) -> Result<RevenueTotals, RevenueError> {
        let row = sqlx::query(
            r"SELECT
                  COALESCE(SUM(r.total_amount), 0)::float8 AS total,
                  COUNT(r.id)::bigint AS reservations,
                  COALESCE(
                      (SELECT p.currency FROM properties p WHERE p.id = $1 AND p.tenant_id = $2),
                      $3
                  ) AS currency
              FROM reservations r
              WHERE r.property_id = $1 AND r.tenant_id = $2",
        )
        .bind(property_id)
        .bind(tenant_id)
        .bind(DEFAULT_CURRENCY)
        .fetch_one(&self.pool)
        .await?;

        Ok(RevenueTotals {
            property_id: property_id.to_owned(),
            total: row.get("total"),
            currency: row.get("currency"),
            count: row.get("reservations"),
        })
    }
}

/// Cached revenue lookup scoped to a tenant.
///
/// # Errors
///
/// Returns the source error on a cache miss that fails; failures are never
/// cached.
pub async fn revenue_summary(
    source: &dyn RevenueSource,
    cache: &RevenueCache,
    tenant_id: &str,
    property_id: &str,
) -> Result<RevenueTotals, RevenueError> {
    let known = catalog::tenant_properties(tenant_id).iter().any(|p| p.id == property_id);
    if !known {
        tracing::debug!(%tenant_id, %property_id, "revenue lookup for property outside tenant catalog");
        return source.totals(tenant_id, property_id).await;
    }

    if let Some(hit) = cache.get(tenant_id, property_id) {
        tracing::debug!(%tenant_id, %property_id, "revenue cache hit");
        return Ok(hit);
    }

    let totals = source.totals(tenant_id, property_id).await?;
    cache.insert(tenant_id, property_id, totals.clone());
    tracing::debug!(%tenant_id, %property_id, count = totals.count, "revenue cache filled");
    Ok(totals)
}
