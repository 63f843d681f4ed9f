//! Error taxonomy for fetching, parsing and plotting chart data.
use std::time::Duration;
use thiserror::Error;

use crate::dataset::Dataset;

/// Ways a request to the remote service can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// No response within the configured timeout
    #[error("request timed out after {}s", .after.as_secs_f64())]
    Timeout { after: Duration },

    /// The server answered with a non-2xx status
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Connection refused, DNS failure, reset, ...
    #[error("connection failed: {0}")]
    Connection(String),

    /// The dataset has no remote route and is only served from mock data
    #[error("dataset '{0}' is not served by the remote API")]
    NotServed(Dataset),
}

/// Main error type for dashboard data operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request failed or timed out
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The response was not in the expected shape
    #[error("unexpected response shape: {0}")]
    Parse(String),

    /// Structurally valid data with nothing in it
    #[error("no data available")]
    EmptyData,

    /// Input rejected before anything was sent
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DashboardError {
    pub fn parse(msg: impl Into<String>) -> Self {
        DashboardError::Parse(msg.into())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, DashboardError::Network(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DashboardError::Network(NetworkError::Timeout { .. }))
    }

    pub fn is_empty_data(&self) -> bool {
        matches!(self, DashboardError::EmptyData)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Parse(e.to_string())
    }
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
