//! Picks the data source for a CLI run.

use bbank_core::client::ApiClient;
use bbank_core::{DataSource, MockSource, WithFallback};
use log::info;

use crate::ApiArgs;

pub type BoxedSource = Box<dyn DataSource + Send + Sync>;

/// `--mock` → mock payloads only; `--no-fallback` → the API only;
/// otherwise the API with mock fallback.
pub fn build_source(api: &ApiArgs) -> anyhow::Result<BoxedSource> {
    if api.mock {
        info!("Serving built-in mock data");
        return Ok(Box::new(MockSource));
    }
    let client = ApiClient::new(api.config())?;
    info!("Fetching from {}", api.api_url);
    if api.no_fallback {
        Ok(Box::new(client))
    } else {
        Ok(Box::new(WithFallback::new(client)))
    }
}
