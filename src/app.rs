//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    DataManagement, DepartmentDetail, Departments, Overview, VehicleDetail, Vehicles,
};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Overview />
                        <Route path="/departments" view=Departments />
                        <Route path="/vehicles" view=Vehicles />
                        <Route path="/data-management" view=DataManagement />
                        <Route path="/vehicle/:plate_number" view=VehicleDetail />
                        <Route path="/department/:id" view=DepartmentDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with data freshness
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing loading state and data freshness
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">"宣城车e管"</div>

                // Last summary fetch time
                <div class="text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("数据更新于 {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "尚未加载数据".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"加载中..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"页面不存在"</h1>
            <p class="text-gray-400 mb-6">"您访问的页面不存在。"</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "返回总览"
            </A>
        </div>
    }
}
