//! Filter Bar Component
//!
//! Month-range filter for the overview trends.

use leptos::*;

use crate::state::global::GlobalState;

/// Month-range inputs with an apply button
#[component]
pub fn FilterBar(on_apply: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let filters = state.filters;

    let is_valid = create_memo(move |_| filters.get().is_valid());

    let state_for_apply = state.clone();
    let apply = move |_| {
        if is_valid.get() {
            on_apply();
        } else {
            state_for_apply.show_error("请输入有效的起始和结束月份！");
        }
    };

    view! {
        <div class="flex flex-wrap items-end gap-3 bg-gray-800 rounded-xl p-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"起始月份"</label>
                <input
                    type="month"
                    prop:value=move || filters.get().start_month
                    on:input=move |ev| {
                        filters.update(|f| f.start_month = event_target_value(&ev));
                    }
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"结束月份"</label>
                <input
                    type="month"
                    prop:value=move || filters.get().end_month
                    on:input=move |ev| {
                        filters.update(|f| f.end_month = event_target_value(&ev));
                    }
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                on:click=apply
                class=move || {
                    let base = "px-4 py-2 rounded-lg font-medium transition-colors";
                    if is_valid.get() {
                        format!("{} bg-primary-600 hover:bg-primary-700 text-white", base)
                    } else {
                        format!("{} bg-gray-700 text-gray-500 cursor-not-allowed", base)
                    }
                }
            >
                "应用筛选"
            </button>
        </div>
    }
}
