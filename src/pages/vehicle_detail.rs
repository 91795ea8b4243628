//! Vehicle Detail Page
//!
//! Per-vehicle view addressed by plate number route parameter.

use leptos::*;
use leptos_router::*;

use crate::pages::vehicles::ensure_vehicles;
use crate::state::global::GlobalState;

/// Vehicle detail page. The plate number comes from `/vehicle/:plate_number`.
#[component]
pub fn VehicleDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let plate_number = move || {
        params.with(|p| p.get("plate_number").cloned().unwrap_or_default())
    };

    let state_for_effect = state.clone();
    create_effect(move |_| {
        ensure_vehicles(state_for_effect.clone());
    });

    let vehicles = state.vehicles;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{plate_number}</h1>
                <p class="text-gray-400 mt-1">"车辆详情"</p>
            </div>

            {move || {
                let plate = params.with(|p| p.get("plate_number").cloned().unwrap_or_default());
                let vehicle = vehicles.get().into_iter().find(|v| v.plate_number == plate);

                match vehicle {
                    Some(vehicle) => view! {
                        <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                            <DetailRow label="车牌号" value=vehicle.plate_number />
                            <DetailRow
                                label="所属部门"
                                value=vehicle.department.unwrap_or_else(|| "未分配".to_string())
                            />
                            <DetailRow
                                label="车型"
                                value=vehicle.model.unwrap_or_else(|| "—".to_string())
                            />
                            <DetailRow
                                label="状态"
                                value=vehicle.status.unwrap_or_else(|| "—".to_string())
                            />
                        </section>
                    }.into_view(),
                    None => view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"未找到该车辆"</p>
                            <A href="/vehicles" class="text-primary-400 hover:underline mt-2 inline-block">
                                "返回车辆概览"
                            </A>
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// One labelled detail line
#[component]
fn DetailRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between border-b border-gray-700 last:border-0 pb-2">
            <span class="text-gray-400 text-sm">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}
