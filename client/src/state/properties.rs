//! Property list and selection state for the dashboard page.
//!
//! DESIGN
//! ======
//! The page owns one `PropertiesState` inside an `RwSignal` and never mutates
//! it directly: every change goes through `PropertiesState::apply`, which
//! returns the side effect the page should run next. Rendering only reads the
//! struct, so the reducer is the single place where loading and selection
//! rules live.
//!
//! LIFECYCLE
//! =========
//! `Loading` -> `LoadedWithSelection` | `LoadedEmpty`. There is no refresh, so
//! nothing ever returns to `Loading`; a second `Mounted` or a late load result
//! is ignored.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::Property;

/// Coarse page phase derived from `PropertiesState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertiesPhase {
    Loading,
    LoadedWithSelection,
    LoadedEmpty,
}

/// Messages accepted by `PropertiesState::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertiesEvent {
    /// The page was mounted and wants its property list.
    Mounted,
    /// The property fetch resolved with this ordered list.
    Loaded(Vec<Property>),
    /// The property fetch failed.
    LoadFailed(String),
    /// The user picked a property in the selector.
    Selected(String),
}

/// Side effects requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertiesCommand {
    /// Issue the one and only property-list request.
    FetchProperties,
    /// Write a diagnostic to the console; nothing is shown to the user.
    ReportError(String),
}

/// Dashboard state: fetched properties, the current selection, and the
/// loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertiesState {
    pub items: Vec<Property>,
    /// Selected property id, or empty when nothing is selected yet.
    pub selected: String,
    pub loading: bool,
    fetch_requested: bool,
}

impl PropertiesState {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), selected: String::new(), loading: true, fetch_requested: false }
    }

    /// Apply one event and return the side effect to run, if any.
    pub fn apply(&mut self, event: PropertiesEvent) -> Option<PropertiesCommand> {
        match event {
            PropertiesEvent::Mounted => {
                if self.fetch_requested {
                    return None;
                }
                self.fetch_requested = true;
                self.loading = true;
                Some(PropertiesCommand::FetchProperties)
            }
            PropertiesEvent::Loaded(items) => {
                if !self.loading {
                    return None;
                }
                self.selected = items.first().map(|p| p.id.clone()).unwrap_or_default();
                self.items = items;
                self.loading = false;
                None
            }
            PropertiesEvent::LoadFailed(error) => {
                if !self.loading {
                    return None;
                }
                self.items.clear();
                self.loading = false;
                Some(PropertiesCommand::ReportError(format!("Failed to load properties: {error}")))
            }
            PropertiesEvent::Selected(id) => {
                if self.loading || !self.items.iter().any(|p| p.id == id) {
                    return None;
                }
                self.selected = id;
                None
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> PropertiesPhase {
        if self.loading {
            PropertiesPhase::Loading
        } else if self.selected.is_empty() {
            PropertiesPhase::LoadedEmpty
        } else {
            PropertiesPhase::LoadedWithSelection
        }
    }

    /// Property id the revenue panel should render, if any.
    #[must_use]
    pub fn revenue_property_id(&self) -> Option<&str> {
        match self.phase() {
            PropertiesPhase::LoadedWithSelection => Some(self.selected.as_str()),
            _ => None,
        }
    }
}

impl Default for PropertiesState {
    fn default() -> Self {
        Self::new()
    }
}

/// Await a property fetch and turn its outcome into a reducer event.
pub async fn load_properties<F, Fut>(fetch: F) -> PropertiesEvent
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Property>, String>>,
{
    match fetch().await {
        Ok(items) => PropertiesEvent::Loaded(items),
        Err(e) => PropertiesEvent::LoadFailed(e),
    }
}

/// Shared flag cleared when the owning view is torn down.
///
/// Async tasks check it before writing back into page state.
#[derive(Clone, Debug)]
pub struct MountedFlag(Arc<AtomicBool>);

impl MountedFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountedFlag {
    fn default() -> Self {
        Self::new()
    }
}
