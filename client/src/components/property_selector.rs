//! Property dropdown shown in the dashboard header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the page-owned `PropertiesState` and reports user picks through a
//! callback; it never mutates state itself and never triggers a fetch.

#[cfg(test)]
#[path = "property_selector_test.rs"]
mod property_selector_test;

use leptos::prelude::*;

use crate::state::properties::PropertiesState;

/// One `<option>` row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Project the loaded properties into option rows, keeping server order.
pub fn selector_options(state: &PropertiesState) -> Vec<SelectorOption> {
    state
        .items
        .iter()
        .map(|p| SelectorOption { value: p.id.clone(), label: p.name.clone(), selected: p.id == state.selected })
        .collect()
}

/// "Select Property" control: a pulsing placeholder while loading, then a
/// single-choice `<select>` bound to the current selection.
#[component]
pub fn PropertySelector(state: RwSignal<PropertiesState>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="property-selector">
            <label class="property-selector__label" for="property-selector">
                "Select Property"
            </label>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="property-selector__placeholder" aria-busy="true"></div> }
            >
                <select
                    id="property-selector"
                    class="property-selector__control"
                    prop:value=move || state.with(|s| s.selected.clone())
                    on:change=move |ev| on_select.run(event_target_value(&ev))
                >
                    {move || {
                        state
                            .with(selector_options)
                            .into_iter()
                            .map(|opt| {
                                view! {
                                    <option value=opt.value selected=opt.selected>
                                        {opt.label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </Show>
        </div>
    }
}
