//! Tab Strip Component
//!
//! Metric-category tabs for the overview charts.

use leptos::*;

use crate::state::global::{GlobalState, Tab};

/// Tab strip over the four metric categories
#[component]
pub fn TabStrip(on_change: impl Fn(Tab) + 'static + Clone) -> impl IntoView {
    view! {
        <div class="flex space-x-2">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let on_change = on_change.clone();
                    view! { <TabButton tab=tab on_change=on_change /> }
                })
                .collect_view()}
        </div>
    }
}

/// Single tab button
#[component]
fn TabButton(tab: Tab, on_change: impl Fn(Tab) + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let active_tab = state.active_tab;
    let is_active = create_memo(move |_| active_tab.get() == tab);

    let on_click = move |_| {
        on_change(tab);
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {tab.title()}
        </button>
    }
}
