//! Dashboard page: property selector plus revenue overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. On mount it requests the caller's accessible
//! properties once, defaults the selection to the first one, and hands the
//! selected id to the revenue panel.
//!
//! ERROR HANDLING
//! ==============
//! A failed property fetch is logged to the console only. The user sees an
//! empty selector and no revenue panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::property_selector::PropertySelector;
use crate::components::revenue_summary::RevenueSummary;
use crate::state::properties::{MountedFlag, PropertiesCommand, PropertiesEvent, PropertiesState};

/// Dashboard page component.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(PropertiesState::new());
    let mounted = MountedFlag::new();
    let mounted_cleanup = mounted.clone();
    on_cleanup(move || mounted_cleanup.unmount());

    // Effects only run in the browser, which makes this the mount hook.
    let mounted_effect = mounted.clone();
    Effect::new(move || dispatch(state, &mounted_effect, PropertiesEvent::Mounted));

    let on_select = Callback::new(move |id: String| dispatch(state, &mounted, PropertiesEvent::Selected(id)));

    view! { <DashboardLayout state=state on_select=on_select/> }
}

/// Page chrome around the selector and the revenue panel. The panel is only
/// mounted while a property is selected.
#[component]
fn DashboardLayout(state: RwSignal<PropertiesState>, on_select: Callback<String>) -> impl IntoView {
    let revenue_id = Memo::new(move |_| state.with(|s| s.revenue_property_id().map(str::to_owned)));

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__inner">
                <h1 class="dashboard-page__title">"Property Management Dashboard"</h1>

                <div class="dashboard-page__card">
                    <div class="dashboard-page__header">
                        <div>
                            <h2 class="dashboard-page__subtitle">"Revenue Overview"</h2>
                            <p class="dashboard-page__description">
                                "Monthly performance insights for your properties"
                            </p>
                        </div>
                        <PropertySelector state=state on_select=on_select/>
                    </div>

                    <div class="dashboard-page__panels">
                        <Show when=move || revenue_id.with(Option::is_some)>
                            <RevenueSummary property_id=Signal::derive(move || {
                                revenue_id.get().unwrap_or_default()
                            })/>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Feed one event through the reducer and run the command it returns.
///
/// Events arriving after the page was torn down are dropped.
fn dispatch(state: RwSignal<PropertiesState>, mounted: &MountedFlag, event: PropertiesEvent) {
    if !mounted.is_mounted() {
        return;
    }
    let Some(command) = state.try_update(|s| s.apply(event)).flatten() else {
        return;
    };
    match command {
        PropertiesCommand::FetchProperties => {
            #[cfg(feature = "hydrate")]
            {
                let mounted = mounted.clone();
                leptos::task::spawn_local(async move {
                    let event =
                        crate::state::properties::load_properties(crate::net::api::fetch_dashboard_properties).await;
                    dispatch(state, &mounted, event);
                });
            }
        }
        PropertiesCommand::ReportError(message) => report_error(&message),
    }
}

fn report_error(message: &str) {
    #[cfg(feature = "hydrate")]
    log::error!("{message}");
    #[cfg(not(feature = "hydrate"))]
    leptos::logging::error!("{message}");
}
