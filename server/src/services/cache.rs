//! In-memory TTL cache for revenue totals.
//!
//! DESIGN
//! ======
//! Entries are keyed by `(tenant_id, property_id)` because property ids are
//! only unique per tenant. Expired entries are evicted on lookup, and every
//! insert sweeps the whole map so keys that are never read again do not pile
//! up.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::revenue::RevenueTotals;

type CacheKey = (String, String);

#[derive(Clone)]
pub struct RevenueCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<CacheKey, (Instant, RevenueTotals)>>>,
}

impl RevenueCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Arc::new(Mutex::new(HashMap::new())) }
    }

    #[must_use]
    pub fn get(&self, tenant_id: &str, property_id: &str) -> Option<RevenueTotals> {
        self.get_at(tenant_id, property_id, Instant::now())
    }

    pub fn insert(&self, tenant_id: &str, property_id: &str, totals: RevenueTotals) {
        self.insert_at(tenant_id, property_id, totals, Instant::now());
    }

    fn get_at(&self, tenant_id: &str, property_id: &str, now: Instant) -> Option<RevenueTotals> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let key = (tenant_id.to_owned(), property_id.to_owned());
        let (stored_at, totals) = entries.get(&key)?;
        if now.saturating_duration_since(*stored_at) >= self.ttl {
            entries.remove(&key);
            return None;
        }
        Some(totals.clone())
    }

    fn insert_at(&self, tenant_id: &str, property_id: &str, totals: RevenueTotals, now: Instant) {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.retain(|_, (stored_at, _)| now.saturating_duration_since(*stored_at) < self.ttl);
        entries.insert((tenant_id.to_owned(), property_id.to_owned()), (now, totals));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
