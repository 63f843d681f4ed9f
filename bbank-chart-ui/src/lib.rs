//! Shared Dioxus components and Plotly.js bridge for the blood bank dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Plotly.js via `js_sys::eval()`
//! - `state`: the application state container created at the app root
//! - `components`: reusable RSX components, including the generic `ChartPanel`

pub mod components;
pub mod js_bridge;
pub mod state;
