//! Data Management Page
//!
//! Backend connection settings and placeholder sections for import/export
//! tooling.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Data management page component
#[component]
pub fn DataManagement() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let last_updated = state.last_updated;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"数据管理"</h1>
                <p class="text-gray-400 mt-1">"车辆、油耗与维保数据的导入导出"</p>
            </div>

            <ApiSettings />

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"数据导入"</h2>
                <p class="text-gray-400">"批量导入功能即将上线。"</p>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"数据导出"</h2>
                <p class="text-gray-400">"报表导出功能即将上线。"</p>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"数据状态"</h2>
                <p class="text-gray-400">
                    {move || {
                        last_updated.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("概览数据更新于 {}", dt.format("%Y-%m-%d %H:%M:%S")))
                            .unwrap_or_else(|| "尚未加载概览数据".to_string())
                    }}
                </p>
            </section>
        </div>
    }
}

/// Backend API base URL setting, persisted in local storage
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state.show_success("后端地址已保存");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"后端连接"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"后端 API 地址"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "保存"
                    </button>
                </div>
            </div>
        </section>
    }
}
