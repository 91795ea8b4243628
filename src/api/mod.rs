//! API Client
//!
//! HTTP access to the fleet backend.

pub mod client;

pub use client::*;
