//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::charts::ChartRegistry;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Last fetched overview summary, replaced wholesale per fetch
    pub summary: RwSignal<Summary>,
    /// Month-range filter for the overview queries
    pub filters: RwSignal<MonthFilter>,
    /// Active metric-category tab on the overview
    pub active_tab: RwSignal<Tab>,
    /// Vehicle list for the vehicles / departments views
    pub vehicles: RwSignal<Vec<Vehicle>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Timestamp (ms) of the last successful summary fetch
    pub last_updated: RwSignal<Option<i64>>,
    /// Live chart handles, one per canvas id. Single-threaded ownership.
    pub charts: Rc<RefCell<ChartRegistry>>,
}

/// Overview summary as returned by `/api/overview/summary`
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Summary {
    #[serde(default)]
    pub kpi: Kpi,
    #[serde(default)]
    pub charts: HashMap<String, Series>,
}

/// Fleet-wide counts, not affected by the month filter
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Kpi {
    #[serde(default)]
    pub total_vehicles: u64,
    #[serde(default)]
    pub total_departments: u64,
}

/// One plottable series: parallel label and value vectors
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Series {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.data.is_empty()
    }
}

/// A vehicle row from `/api/vehicles`. The backend sends whole table rows;
/// only the fields the views need are kept, everything else is ignored.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Vehicle {
    #[serde(default)]
    pub plate_number: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Month-range filter in `YYYY-MM` form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthFilter {
    pub start_month: String,
    pub end_month: String,
}

impl Default for MonthFilter {
    fn default() -> Self {
        Self {
            start_month: "2025-01".to_string(),
            end_month: "2025-06".to_string(),
        }
    }
}

impl MonthFilter {
    /// Both months set and start not later than end. Lexicographic comparison
    /// is correct for zero-padded `YYYY-MM` strings.
    pub fn is_valid(&self) -> bool {
        !self.start_month.is_empty()
            && !self.end_month.is_empty()
            && self.start_month <= self.end_month
    }
}

/// Metric-category tabs on the overview page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Mileage,
    Fuel,
    Violations,
    Maintenance,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Mileage
    }
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Mileage, Tab::Fuel, Tab::Violations, Tab::Maintenance];

    /// Tab strip caption
    pub fn title(self) -> &'static str {
        match self {
            Tab::Mileage => "里程管理",
            Tab::Fuel => "油耗管理",
            Tab::Violations => "违章管理",
            Tab::Maintenance => "维保管理",
        }
    }

    /// Id of the canvas element this tab's chart draws on
    pub fn canvas_id(self) -> &'static str {
        match self {
            Tab::Mileage => "mileage-trend-chart",
            Tab::Fuel => "fuel-trend-chart",
            Tab::Violations => "violation-trend-chart",
            Tab::Maintenance => "maintenance-trend-chart",
        }
    }

    /// Key of this tab's series in `Summary::charts`
    pub fn chart_key(self) -> &'static str {
        match self {
            Tab::Mileage => "mileage_trend",
            Tab::Fuel => "fuel_trend",
            Tab::Violations => "violation_trend",
            Tab::Maintenance => "maintenance_trend",
        }
    }

    /// Dataset legend label
    pub fn dataset_label(self) -> &'static str {
        match self {
            Tab::Mileage => "总里程",
            Tab::Fuel => "总油耗",
            Tab::Violations => "违章次数",
            Tab::Maintenance => "维保费用",
        }
    }

    /// Unit suffix for tick and tooltip labels
    pub fn unit(self) -> &'static str {
        match self {
            Tab::Mileage => "公里",
            Tab::Fuel => "升",
            Tab::Violations => "次",
            Tab::Maintenance => "元",
        }
    }

    /// Series color
    pub fn color(self) -> &'static str {
        match self {
            Tab::Mileage => "#FF6384",
            Tab::Fuel => "#4BC0C0",
            Tab::Violations => "#FFCE56",
            Tab::Maintenance => "#9966FF",
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            summary: create_rw_signal(Summary::default()),
            filters: create_rw_signal(MonthFilter::default()),
            active_tab: create_rw_signal(Tab::default()),
            vehicles: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            last_updated: create_rw_signal(None),
            charts: Rc::new(RefCell::new(ChartRegistry::new())),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_valid() {
        assert!(MonthFilter::default().is_valid());
    }

    #[test]
    fn filter_valid_when_start_not_after_end() {
        let filter = MonthFilter {
            start_month: "2025-01".to_string(),
            end_month: "2025-06".to_string(),
        };
        assert!(filter.is_valid());

        let same_month = MonthFilter {
            start_month: "2025-03".to_string(),
            end_month: "2025-03".to_string(),
        };
        assert!(same_month.is_valid());
    }

    #[test]
    fn filter_invalid_when_start_after_end() {
        let filter = MonthFilter {
            start_month: "2025-07".to_string(),
            end_month: "2025-01".to_string(),
        };
        assert!(!filter.is_valid());
    }

    #[test]
    fn filter_invalid_when_a_month_is_missing() {
        let filter = MonthFilter {
            start_month: String::new(),
            end_month: "2025-06".to_string(),
        };
        assert!(!filter.is_valid());

        let filter = MonthFilter {
            start_month: "2025-01".to_string(),
            end_month: String::new(),
        };
        assert!(!filter.is_valid());
    }

    #[test]
    fn filter_comparison_spans_years() {
        let filter = MonthFilter {
            start_month: "2024-12".to_string(),
            end_month: "2025-01".to_string(),
        };
        assert!(filter.is_valid());
    }

    #[test]
    fn tabs_have_distinct_canvases_and_keys() {
        let canvases: Vec<_> = Tab::ALL.iter().map(|t| t.canvas_id()).collect();
        let keys: Vec<_> = Tab::ALL.iter().map(|t| t.chart_key()).collect();

        for (i, canvas) in canvases.iter().enumerate() {
            for other in &canvases[i + 1..] {
                assert_ne!(canvas, other);
            }
        }
        for (i, key) in keys.iter().enumerate() {
            for other in &keys[i + 1..] {
                assert_ne!(key, other);
            }
        }
    }

    #[test]
    fn summary_decodes_backend_payload() {
        let payload = r#"{
            "kpi": {"total_vehicles": 128, "total_departments": 12},
            "charts": {
                "mileage_trend": {"labels": ["2025-01", "2025-02"], "data": [1034.5, 1200]}
            }
        }"#;

        let summary: Summary = serde_json::from_str(payload).unwrap();
        assert_eq!(summary.kpi.total_vehicles, 128);
        assert_eq!(summary.kpi.total_departments, 12);

        let series = &summary.charts["mileage_trend"];
        assert_eq!(series.labels, vec!["2025-01", "2025-02"]);
        assert_eq!(series.data, vec![1034.5, 1200.0]);
    }

    #[test]
    fn summary_tolerates_missing_sections() {
        let summary: Summary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.kpi.total_vehicles, 0);
        assert!(summary.charts.is_empty());
    }

    #[test]
    fn vehicle_ignores_unknown_columns() {
        let payload = r#"{
            "plate_number": "皖P12345",
            "department": "办公室",
            "purchase_date": "2021-04-01",
            "vin": "LFV3A23C8K3******"
        }"#;

        let vehicle: Vehicle = serde_json::from_str(payload).unwrap();
        assert_eq!(vehicle.plate_number, "皖P12345");
        assert_eq!(vehicle.department.as_deref(), Some("办公室"));
        assert!(vehicle.model.is_none());
    }
}
