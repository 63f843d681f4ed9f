//! The `DataSource` seam between chart panels and wherever data comes from.

use async_trait::async_trait;
use log::warn;
use serde_json::Value;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::mock;

/// Anything that can produce the raw JSON payload for a dataset.
///
/// Each call performs at most one request; there is no retry, caching or
/// deduplication at this layer.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Value>;
}

/// Serves the canned payloads from [`mock`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MockSource;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for MockSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Value> {
        Ok(mock::payload(dataset))
    }
}

/// Wraps a source and serves mock data when it fails with a network error.
///
/// Parse errors are passed through: a server that answers with garbage is a
/// bug to surface, not something to paper over.
#[derive(Debug, Clone, PartialEq)]
pub struct WithFallback<S> {
    inner: S,
}

impl<S> WithFallback<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl<S> DataSource for WithFallback<S>
where
    S: DataSource + Send + Sync,
{
    async fn fetch(&self, dataset: Dataset) -> Result<Value> {
        or_mock(self.inner.fetch(dataset).await, dataset)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl<S: DataSource> DataSource for WithFallback<S> {
    async fn fetch(&self, dataset: Dataset) -> Result<Value> {
        or_mock(self.inner.fetch(dataset).await, dataset)
    }
}

fn or_mock(result: Result<Value>, dataset: Dataset) -> Result<Value> {
    match result {
        Err(e) if e.is_network() => {
            warn!("Serving mock data for {}: {}", dataset, e);
            Ok(mock::payload(dataset))
        }
        other => other,
    }
}
