//! State Management
//!
//! Global application state and the chart-instance registry.

pub mod charts;
pub mod global;

pub use charts::{ChartHandle, ChartRegistry};
pub use global::{provide_global_state, GlobalState, Kpi, MonthFilter, Series, Summary, Tab, Vehicle};
