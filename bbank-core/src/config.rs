use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the blood bank API.
pub const DEFAULT_BASE_URL: &str = "https://blood-bank-backend-fixed.onrender.com";

/// Default predict-expiry endpoint. This is a separate service from the
/// chart API and is configured on its own.
pub const DEFAULT_PREDICT_URL: &str = "http://localhost:8000/api/predict_expiry";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of donation records requested for the frequency chart.
pub const DEFAULT_DONATION_LIMIT: u32 = 100;

/// Where the dashboard gets its data from and how long it waits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub predict_url: String,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    pub donation_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            donation_limit: DEFAULT_DONATION_LIMIT,
        }
    }
}

impl ApiConfig {
    /// Join a relative route onto the base URL.
    pub fn url_for(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_slashes() {
        let mut config = ApiConfig::default();
        config.base_url = "http://localhost:9000/".to_string();
        assert_eq!(config.url_for("/chart/blood-types"), "http://localhost:9000/chart/blood-types");
        assert_eq!(config.url_for("donations?limit=5"), "http://localhost:9000/donations?limit=5");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"timeout": 3}"#).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.donation_limit, DEFAULT_DONATION_LIMIT);
    }
}
