//! Revenue summary panel for a single property.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the dashboard only when a property is selected. Re-fetches
//! whenever `property_id` changes; stale responses from an earlier selection
//! are dropped by `RevenuePanelState`.

#[cfg(test)]
#[path = "revenue_summary_test.rs"]
mod revenue_summary_test;

use leptos::prelude::*;

use crate::net::types::RevenueSummary as Summary;
use crate::state::properties::MountedFlag;
use crate::state::revenue::RevenuePanelState;

/// Format an amount as `"{currency} 1,234.50"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_money(amount: f64, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{currency} {grouped}.{frac:02}")
}

/// Mean revenue per reservation, or `None` when there are no reservations.
#[allow(clippy::cast_precision_loss)]
pub fn average_per_reservation(summary: &Summary) -> Option<f64> {
    if summary.reservations_count <= 0 {
        return None;
    }
    Some(summary.total_revenue / summary.reservations_count as f64)
}

/// Summary cards for the selected property.
#[component]
pub fn RevenueSummary(#[prop(into)] property_id: Signal<String>) -> impl IntoView {
    let panel = RwSignal::new(RevenuePanelState::default());
    let mounted = MountedFlag::new();
    let mounted_cleanup = mounted.clone();
    on_cleanup(move || mounted_cleanup.unmount());

    Effect::new(move || {
        let id = property_id.get();
        if id.is_empty() {
            return;
        }
        let seq = panel.try_update(RevenuePanelState::begin).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let mounted = mounted.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_revenue_summary(&id).await;
                if !mounted.is_mounted() {
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("revenue summary for {id} failed: {e}");
                }
                panel.update(|p| {
                    p.settle(seq, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, &mounted);
    });

    view! {
        <section class="revenue-summary">
            {move || {
                let state = panel.get();
                if state.loading {
                    return view! { <p class="revenue-summary__loading">"Loading revenue..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! {
                        <p class="revenue-summary__error">"Revenue data unavailable: " {error}</p>
                    }
                    .into_any();
                }
                let Some(summary) = state.summary else {
                    return ().into_any();
                };
                let total = format_money(summary.total_revenue, &summary.currency);
                let average = average_per_reservation(&summary)
                    .map_or_else(|| "—".to_owned(), |avg| format_money(avg, &summary.currency));
                view! {
                    <div class="revenue-summary__cards">
                        <div class="stat-card">
                            <span class="stat-card__label">"Total Revenue"</span>
                            <span class="stat-card__value">{total}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Reservations"</span>
                            <span class="stat-card__value">{summary.reservations_count}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Avg. per Reservation"</span>
                            <span class="stat-card__value">{average}</span>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
