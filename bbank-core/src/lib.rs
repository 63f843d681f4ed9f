//! Core types and data sources for the blood bank dashboard.
//!
//! This crate provides:
//! - `blood_type` / `models`: the transient entities charts are built from
//! - `error`: the error taxonomy shared by every chart panel
//! - `config` / `dataset`: where data lives and how long to wait for it
//! - `source`: the `DataSource` seam, mock payloads and the mock fallback
//! - `client`: the reqwest API client (feature `api`)

pub mod blood_type;
pub mod config;
pub mod dataset;
pub mod error;
pub mod mock;
pub mod models;
pub mod source;

#[cfg(feature = "api")]
pub mod client;

pub use blood_type::BloodType;
pub use config::ApiConfig;
pub use dataset::Dataset;
pub use error::{DashboardError, NetworkError, Result};
pub use source::{DataSource, MockSource, WithFallback};
