//! HTTP API Client
//!
//! Functions for communicating with the fleet backend REST API.

use gloo_net::http::Request;

use crate::state::global::{MonthFilter, Summary, Vehicle};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("fleet_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("fleet_api_url", url);
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Fetch the overview summary for a month range.
///
/// The backend applies the range to the trend series only; KPI counts are
/// fleet-wide totals.
pub async fn fetch_summary(filter: &MonthFilter) -> Result<Summary, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/overview/summary", api_base))
        .query([
            ("start_month", filter.start_month.as_str()),
            ("end_month", filter.end_month.as_str()),
        ])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("HTTP {}", response.status()),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the vehicle list
pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/vehicles", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("HTTP {}", response.status()),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
