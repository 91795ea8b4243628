//! Departments Page
//!
//! Department overview derived from the vehicle list.

use leptos::*;
use leptos_router::*;

use crate::components::loading::ListSkeleton;
use crate::pages::vehicles::ensure_vehicles;
use crate::state::global::{GlobalState, Vehicle};

/// Group vehicles by department name, sorted by name. Vehicles without a
/// department land in a catch-all bucket.
pub fn department_rollup(vehicles: &[Vehicle]) -> Vec<(String, usize)> {
    let mut counts = std::collections::BTreeMap::new();
    for vehicle in vehicles {
        let name = vehicle
            .department
            .clone()
            .unwrap_or_else(|| "未分配".to_string());
        *counts.entry(name).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Department overview page
#[component]
pub fn Departments() -> impl IntoView {
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
                <h1 class="text-3xl font-bold">"部门概览"</h1>
                <p class="text-gray-400 mt-1">"各部门车辆分布"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=4 /> }.into_view()
                } else {
                    let rollup = department_rollup(&vehicles.get());
                    if rollup.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"暂无部门数据"</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {rollup
                                    .into_iter()
                                    .enumerate()
                                    .map(|(id, (name, count))| view! {
                                        <DepartmentCard id=id name=name count=count />
                                    })
                                    .collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Department card linking to its detail view
#[component]
fn DepartmentCard(id: usize, name: String, count: usize) -> impl IntoView {
    let href = format!("/department/{}", id);

    view! {
        <A
            href=href
            class="block bg-gray-800 rounded-xl p-4 border border-gray-700
                   hover:border-gray-600 transition-colors"
        >
            <h3 class="font-semibold">{name}</h3>
            <p class="text-gray-400 text-sm mt-1">{format!("{} 辆车", count)}</p>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(plate: &str, department: Option<&str>) -> Vehicle {
        Vehicle {
            plate_number: plate.to_string(),
            department: department.map(|d| d.to_string()),
            ..Vehicle::default()
        }
    }

    #[test]
    fn rollup_counts_per_department() {
        let vehicles = vec![
            vehicle("皖P00001", Some("办公室")),
            vehicle("皖P00002", Some("运输科")),
            vehicle("皖P00003", Some("办公室")),
        ];

        let rollup = department_rollup(&vehicles);
        assert_eq!(rollup.len(), 2);
        assert!(rollup.contains(&("办公室".to_string(), 2)));
        assert!(rollup.contains(&("运输科".to_string(), 1)));
    }

    #[test]
    fn rollup_buckets_missing_department() {
        let vehicles = vec![vehicle("皖P00001", None), vehicle("皖P00002", None)];

        let rollup = department_rollup(&vehicles);
        assert_eq!(rollup, vec![("未分配".to_string(), 2)]);
    }

    #[test]
    fn rollup_order_is_stable() {
        let vehicles = vec![
            vehicle("皖P00001", Some("b")),
            vehicle("皖P00002", Some("a")),
        ];

        let names: Vec<_> = department_rollup(&vehicles)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
