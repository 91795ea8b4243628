//! Department Detail Page
//!
//! Per-department view addressed by id route parameter.

use leptos::*;
use leptos_router::*;

use crate::pages::departments::department_rollup;
use crate::pages::vehicles::ensure_vehicles;
use crate::state::global::GlobalState;

/// Department detail page. The id comes from `/department/:id` and indexes
/// the sorted department rollup.
#[component]
pub fn DepartmentDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let state_for_effect = state.clone();
    create_effect(move |_| {
        ensure_vehicles(state_for_effect.clone());
    });

    let vehicles = state.vehicles;

    let department_name = create_memo(move |_| {
        let id: usize = params
            .with(|p| p.get("id").cloned().unwrap_or_default())
            .parse()
            .ok()?;
        department_rollup(&vehicles.get())
            .into_iter()
            .nth(id)
            .map(|(name, _)| name)
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">
                    {move || department_name.get().unwrap_or_else(|| "部门详情".to_string())}
                </h1>
                <p class="text-gray-400 mt-1">"部门车辆清单"</p>
            </div>

            {move || {
                match department_name.get() {
                    Some(name) => {
                        let members: Vec<_> = vehicles
                            .get()
                            .into_iter()
                            .filter(|v| {
                                v.department.as_deref().unwrap_or("未分配") == name
                            })
                            .collect();

                        view! {
                            <section class="bg-gray-800 rounded-xl p-6">
                                <div class="space-y-2">
                                    {members
                                        .into_iter()
                                        .map(|vehicle| {
                                            let href = format!("/vehicle/{}", vehicle.plate_number);
                                            view! {
                                                <A
                                                    href=href
                                                    class="flex items-center justify-between py-2
                                                           border-b border-gray-700 last:border-0
                                                           hover:text-primary-400 transition-colors"
                                                >
                                                    <span>{vehicle.plate_number.clone()}</span>
                                                    <span class="text-gray-400 text-sm">
                                                        {vehicle.model.clone().unwrap_or_else(|| "—".to_string())}
                                                    </span>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }.into_view()
                    }
                    None => view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"未找到该部门"</p>
                            <A href="/departments" class="text-primary-400 hover:underline mt-2 inline-block">
                                "返回部门概览"
                            </A>
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}
