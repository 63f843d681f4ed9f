//! reqwest client for the blood bank API and the predict-expiry service.

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::dataset::Dataset;
use crate::error::{DashboardError, NetworkError, Result};
use crate::models::{ExpiryPrediction, ExpiryPredictionRequest};
use crate::source::DataSource;

/// Issues single GET/POST requests against the configured hosts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        // Browsers own the connection; the timeout is only enforceable natively.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder
            .build()
            .map_err(|e| NetworkError::Connection(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET a route relative to the base URL and parse the body as JSON.
    pub async fn get_json(&self, route: &str) -> Result<Value> {
        let url = self.config.url_for(route);
        info!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let body = self.success_body(response, &url).await?;
        debug!("{} returned {} bytes", url, body.len());
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a prediction request to the predict-expiry service.
    pub async fn predict_expiry(
        &self,
        request: &ExpiryPredictionRequest,
    ) -> Result<ExpiryPrediction> {
        request.validate()?;
        let url = self.config.predict_url.clone();
        info!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let body = self.success_body(response, &url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn success_body(&self, response: reqwest::Response, url: &str) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        response.text().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, e: reqwest::Error) -> DashboardError {
        if e.is_timeout() {
            NetworkError::Timeout {
                after: self.config.timeout,
            }
            .into()
        } else if e.is_decode() {
            DashboardError::parse(e.to_string())
        } else {
            NetworkError::Connection(e.to_string()).into()
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for ApiClient {
    async fn fetch(&self, dataset: Dataset) -> Result<Value> {
        match dataset.remote_path(self.config.donation_limit) {
            Some(route) => self.get_json(&route).await,
            None => Err(NetworkError::NotServed(dataset).into()),
        }
    }
}
