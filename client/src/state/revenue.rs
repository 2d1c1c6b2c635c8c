//! Request bookkeeping for the revenue summary panel.
//!
//! Selection can change while a summary request is still in flight. Each
//! request gets a sequence number and only the latest one may settle.

#[cfg(test)]
#[path = "revenue_test.rs"]
mod revenue_test;

use crate::net::types::RevenueSummary;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevenuePanelState {
    pub loading: bool,
    pub summary: Option<RevenueSummary>,
    pub error: Option<String>,
    request_seq: u64,
}

impl RevenuePanelState {
    /// Start a new request, discarding whatever was shown before.
    pub fn begin(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.summary = None;
        self.error = None;
        self.request_seq
    }

    /// Record a response. Returns `false` when `seq` is stale and the result
    /// was dropped.
    pub fn settle(&mut self, seq: u64, result: Result<RevenueSummary, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(summary) => self.summary = Some(summary),
            Err(e) => self.error = Some(e),
        }
        true
    }
}
