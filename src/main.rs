//! 宣城车e管 Dashboard
//!
//! Vehicle fleet management dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Fleet KPIs and monthly trend charts (mileage, fuel, violations, maintenance)
//! - Month-range filtering of the overview summary
//! - Department and vehicle views with detail routes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the fleet backend via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
