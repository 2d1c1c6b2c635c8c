//! Tenant-to-property catalog.
//!
//! DESIGN
//! ======
//! The catalog is static and mirrors the seeded `properties` rows. Each tenant
//! sees only its own entries, in a fixed order that the dashboard relies on
//! for its default selection. Property ids are only unique per tenant.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

/// Tenant used when a session carries no tenant id.
pub const DEFAULT_TENANT: &str = "default_tenant";

/// A property as exposed by `GET /api/dashboard/properties`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub id: &'static str,
    pub name: &'static str,
}

const TENANT_A: &[PropertyEntry] = &[
    PropertyEntry { id: "prop-001", name: "Beach House Alpha" },
    PropertyEntry { id: "prop-002", name: "City Apartment Downtown" },
    PropertyEntry { id: "prop-003", name: "Country Villa Estate" },
];

const TENANT_B: &[PropertyEntry] = &[
    PropertyEntry { id: "prop-001", name: "Mountain Lodge Beta" },
    PropertyEntry { id: "prop-004", name: "Lakeside Cottage" },
    PropertyEntry { id: "prop-005", name: "Urban Loft Modern" },
];

const TENANT_PROPERTIES: &[(&str, &[PropertyEntry])] = &[("tenant-a", TENANT_A), ("tenant-b", TENANT_B)];

/// Map a blank tenant id to `DEFAULT_TENANT`.
#[must_use]
pub fn normalize_tenant_id(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { DEFAULT_TENANT } else { trimmed }
}

/// Properties visible to `tenant_id`; unknown tenants get an empty slice.
#[must_use]
pub fn tenant_properties(tenant_id: &str) -> &'static [PropertyEntry] {
    let tenant_id = normalize_tenant_id(tenant_id);
    TENANT_PROPERTIES
        .iter()
        .find_map(|&(id, items)| (id == tenant_id).then_some(items))
        .unwrap_or(&[])
}
