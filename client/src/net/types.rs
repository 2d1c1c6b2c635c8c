//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON responses field for field so the
//! dashboard can deserialize them without an intermediate mapping layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A managed property the current user can see on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Opaque property identifier (e.g. `"prop-001"`).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
}

/// Aggregated revenue figures for a single property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub property_id: String,
    /// Sum of reservation totals, in `currency` units.
    pub total_revenue: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    pub reservations_count: i64,
}
