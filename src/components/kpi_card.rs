//! KPI Card Component
//!
//! Displays one fleet-wide count from the overview summary.

use leptos::*;

/// KPI summary card
#[component]
pub fn KpiCard(
    /// Caption shown above the value
    label: &'static str,
    /// Unit shown next to the value
    unit: &'static str,
    /// Count to display
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-gray-500 text-xs">{unit}</span>
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || value.get().to_string()}
            </div>
        </div>
    }
}
