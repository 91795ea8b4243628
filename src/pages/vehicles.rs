//! Vehicles Page
//!
//! Vehicle overview list fetched from the backend.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::loading::ListSkeleton;
use crate::state::global::{GlobalState, Vehicle};

/// Fetch the vehicle list into global state if it is not already loaded.
pub fn ensure_vehicles(state: GlobalState) {
    if !state.vehicles.get_untracked().is_empty() {
        return;
    }

    spawn_local(async move {
        state.loading.set(true);
        match api::fetch_vehicles().await {
            Ok(vehicles) => {
                state.vehicles.set(vehicles);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("获取车辆列表失败: {}", e).into());
                state.show_error("无法加载车辆列表，请检查后端服务。");
            }
        }
        state.loading.set(false);
    });
}

/// Vehicle overview page
#[component]
pub fn Vehicles() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_effect = state.clone();
    create_effect(move |_| {
        ensure_vehicles(state_for_effect.clone());
    });

    let vehicles = state.vehicles;
    let loading = state.loading;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"车辆概览"</h1>
                <p class="text-gray-400 mt-1">"全部在册车辆"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=5 /> }.into_view()
                } else {
                    let vehicles = vehicles.get();
                    if vehicles.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"暂无车辆数据"</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {vehicles
                                    .into_iter()
                                    .map(|vehicle| view! { <VehicleListItem vehicle=vehicle /> })
                                    .collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Single vehicle list item linking to its detail view
#[component]
fn VehicleListItem(vehicle: Vehicle) -> impl IntoView {
    let href = format!("/vehicle/{}", vehicle.plate_number);

    view! {
        <A
            href=href
            class="block bg-gray-800 rounded-xl p-4 border border-gray-700
                   hover:border-gray-600 transition-colors"
        >
            <div class="flex items-start justify-between">
                <h3 class="font-semibold">{vehicle.plate_number.clone()}</h3>
                {vehicle.status.clone().map(|status| view! {
                    <span class="bg-gray-700 text-xs px-2 py-0.5 rounded-full text-gray-300">
                        {status}
                    </span>
                })}
            </div>

            <div class="flex items-center space-x-4 mt-3 text-sm text-gray-400">
                <span>{vehicle.department.clone().unwrap_or_else(|| "未分配".to_string())}</span>
                {vehicle.model.clone().map(|model| view! { <span>{model}</span> })}
            </div>
        </A>
    }
}
