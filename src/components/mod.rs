//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod kpi_card;
pub mod filter_bar;
pub mod tabs;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::TrendCanvas;
pub use kpi_card::KpiCard;
pub use filter_bar::FilterBar;
pub use tabs::TabStrip;
pub use loading::Loading;
pub use toast::Toast;
