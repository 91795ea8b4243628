//! Overview Page
//!
//! Fleet-wide KPIs, month-range filter, and tabbed trend charts.

use leptos::*;

use crate::api;
use crate::components::chart;
use crate::components::{FilterBar, KpiCard, TabStrip, TrendCanvas};
use crate::components::loading::ChartSkeleton;
use crate::state::global::{GlobalState, Tab};

/// Generic user-facing message for any summary fetch failure
const FETCH_ERROR_MESSAGE: &str = "无法加载概览数据，请检查后端服务。";

/// Fetch the overview summary and redraw the active chart afterwards.
///
/// Always clears the loading flag. On failure the user sees one generic
/// error string; diagnostics go to the browser console. Overlapping calls
/// are not coordinated, the last response wins.
pub fn load_summary(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        state.error.set(None);

        let filter = state.filters.get_untracked();
        let result = api::fetch_summary(&filter).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("获取概览数据失败: {}", e).into());
        }
        apply_summary_result(&state, result);

        // The canvas only reappears once the DOM reflects the cleared
        // loading flag, so draw on the next frame.
        let state = state.clone();
        request_animation_frame(move || chart::render_active_tab_chart(&state));
    });
}

/// Store a fetch outcome: the summary is replaced wholesale on success, one
/// generic error string is surfaced on failure, and the loading flag is
/// cleared either way.
fn apply_summary_result(state: &GlobalState, result: Result<crate::state::global::Summary, String>) {
    match result {
        Ok(summary) => {
            state.summary.set(summary);
            state
                .last_updated
                .set(Some(chrono::Utc::now().timestamp_millis()));
        }
        Err(_) => {
            state.error.set(Some(FETCH_ERROR_MESSAGE.to_string()));
        }
    }
    state.loading.set(false);
}

/// Overview page component
#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        load_summary(state_for_effect.clone());
    });

    let state_for_apply = state.clone();
    let on_apply = move || {
        load_summary(state_for_apply.clone());
    };

    // Tab switches destroy and recreate the canvas element, so rendering is
    // deferred to the next animation frame.
    let state_for_tab = state.clone();
    let on_tab_change = move |tab: Tab| {
        state_for_tab.active_tab.set(tab);
        let state = state_for_tab.clone();
        request_animation_frame(move || chart::render_active_tab_chart(&state));
    };

    let summary = state.summary;
    let loading = state.loading;
    let error = state.error;
    let active_tab = state.active_tab;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"总览"</h1>
                    <p class="text-gray-400 mt-1">"车队运行状况一览"</p>
                </div>
            </div>

            // Month-range filter
            <FilterBar on_apply=on_apply />

            // KPI cards
            <section>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <KpiCard
                        label="车辆总数"
                        unit="辆"
                        value=Signal::derive(move || summary.get().kpi.total_vehicles)
                    />
                    <KpiCard
                        label="部门总数"
                        unit="个"
                        value=Signal::derive(move || summary.get().kpi.total_departments)
                    />
                </div>
            </section>

            // Tabbed trend chart
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold">"月度趋势"</h2>
                    <TabStrip on_change=on_tab_change />
                </div>

                {move || {
                    if loading.get() {
                        view! { <ChartSkeleton /> }.into_view()
                    } else if let Some(message) = error.get() {
                        view! {
                            <div class="h-64 flex items-center justify-center">
                                <p class="text-red-400">{message}</p>
                            </div>
                        }.into_view()
                    } else {
                        // Recreated per tab switch; the renderer disposes the
                        // previous chart handle for the canvas id.
                        view! { <TrendCanvas tab=active_tab.get() /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::{GlobalState, Series, Summary};

    #[test]
    fn fetch_failure_sets_error_and_clears_loading() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.loading.set(true);

        apply_summary_result(&state, Err("Network error: connection refused".to_string()));

        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some(FETCH_ERROR_MESSAGE)
        );
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn fetch_success_stores_summary_verbatim() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state.loading.set(true);

        let mut summary = Summary::default();
        summary.kpi.total_vehicles = 42;
        summary.charts.insert(
            "fuel_trend".to_string(),
            Series {
                labels: vec!["2025-01".to_string(), "2025-02".to_string()],
                data: vec![10.0, 20.0],
            },
        );

        apply_summary_result(&state, Ok(summary.clone()));

        assert_eq!(state.summary.get_untracked(), summary);
        assert!(state.error.get_untracked().is_none());
        assert!(!state.loading.get_untracked());
        assert!(state.last_updated.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn replacement_summary_is_not_merged() {
        let runtime = create_runtime();

        let state = GlobalState::new();

        let mut first = Summary::default();
        first.charts.insert("mileage_trend".to_string(), Series::default());
        first.charts.insert("fuel_trend".to_string(), Series::default());
        apply_summary_result(&state, Ok(first));

        let mut second = Summary::default();
        second
            .charts
            .insert("violation_trend".to_string(), Series::default());
        apply_summary_result(&state, Ok(second));

        let stored = state.summary.get_untracked();
        assert_eq!(stored.charts.len(), 1);
        assert!(stored.charts.contains_key("violation_trend"));

        runtime.dispose();
    }
}
