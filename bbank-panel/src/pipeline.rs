use bbank_core::{DataSource, Result};
use bbank_data::series::Series;
use log::info;

use crate::config::PanelConfig;
use crate::state::LoadTracker;

/// Fetch the panel's dataset and reshape it into a series.
pub async fn fetch_series<S>(source: &S, config: &PanelConfig) -> Result<Series>
where
    S: DataSource + ?Sized,
{
    let raw = source.fetch(config.dataset).await?;
    let series = config.transform.apply(&raw)?;
    info!("{}: {} points", config.id, series.len());
    Ok(series)
}

/// Run one full load cycle on a tracker the caller owns exclusively.
///
/// Views that share the tracker with other event handlers should call
/// `begin`/`settle` themselves so the ticket check can reject stale results.
pub async fn load_panel<S>(
    tracker: &mut LoadTracker<Series>,
    source: &S,
    config: &PanelConfig,
) -> bool
where
    S: DataSource + ?Sized,
{
    let ticket = tracker.begin();
    let result = fetch_series(source, config).await;
    tracker.settle(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::find_preset;
    use crate::state::LoadState;
    use async_trait::async_trait;
    use bbank_core::{Dataset, MockSource, NetworkError, WithFallback};
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::time::Duration;

    /// Answers after `delay` with a fixed payload or a connection error.
    struct Delayed {
        delay: Duration,
        payload: Option<Value>,
    }

    #[async_trait]
    impl DataSource for Delayed {
        async fn fetch(&self, _dataset: Dataset) -> Result<Value> {
            tokio::time::sleep(self.delay).await;
            self.payload
                .clone()
                .ok_or_else(|| NetworkError::Connection("refused".to_string()).into())
        }
    }

    #[tokio::test]
    async fn test_fetch_series_from_mock() {
        let config = find_preset("donation-frequency").unwrap();
        let series = fetch_series(&MockSource, &config).await.unwrap();
        assert!(series.is_temporal());
        // 10 mock records, one without a date
        assert_eq!(series.total(), 9.0);
    }

    #[tokio::test]
    async fn test_fetch_series_reports_network_error() {
        let config = find_preset("stock-over-time").unwrap();
        let source = Delayed {
            delay: Duration::ZERO,
            payload: None,
        };
        let err = fetch_series(&source, &config).await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_fallback_serves_mock_series() {
        let config = find_preset("stock-over-time").unwrap();
        let source = WithFallback::new(Delayed {
            delay: Duration::ZERO,
            payload: None,
        });
        let series = fetch_series(&source, &config).await.unwrap();
        assert_eq!(series.len(), 7);
    }

    #[tokio::test]
    async fn test_parse_error_reaches_tracker() {
        let config = find_preset("blood-type-distribution").unwrap();
        let source = Delayed {
            delay: Duration::ZERO,
            payload: Some(json!("not a list")),
        };
        let mut tracker = LoadTracker::new();
        assert!(load_panel(&mut tracker, &source, &config).await);
        assert!(tracker.state().error().is_some());
    }

    #[tokio::test]
    async fn test_empty_payload_is_success_not_error() {
        let config = find_preset("donation-frequency").unwrap();
        let source = Delayed {
            delay: Duration::ZERO,
            payload: Some(json!([])),
        };
        let mut tracker = LoadTracker::new();
        load_panel(&mut tracker, &source, &config).await;
        assert!(matches!(tracker.state(), LoadState::Success(s) if s.is_empty()));

        let view = crate::view::panel_view(
            tracker.state(),
            &config,
            config.default_kind,
            bbank_chart::Theme::Light,
        );
        assert!(matches!(view, crate::view::PanelView::Empty { .. }));
        // an empty result can still be refreshed
        assert!(tracker.refresh().is_some());
        assert!(tracker.state().is_loading());
    }

    #[tokio::test]
    async fn test_slow_stale_request_loses_to_retry() {
        let config = find_preset("stock-over-time").unwrap();
        let slow_failure = Delayed {
            delay: Duration::from_millis(80),
            payload: None,
        };
        let fast_success = Delayed {
            delay: Duration::from_millis(5),
            payload: Some(json!([{"date": "2025-08-01", "count": 1}])),
        };

        let tracker = RefCell::new(LoadTracker::new());
        let first = tracker.borrow_mut().begin();
        let second = tracker.borrow_mut().retry().unwrap();

        let stale = async {
            let result = fetch_series(&slow_failure, &config).await;
            tracker.borrow_mut().settle(first, result)
        };
        let latest = async {
            let result = fetch_series(&fast_success, &config).await;
            tracker.borrow_mut().settle(second, result)
        };
        let (stale_applied, latest_applied) = tokio::join!(stale, latest);

        assert!(!stale_applied);
        assert!(latest_applied);
        let state = tracker.into_inner();
        assert_eq!(state.state().data().map(|s| s.len()), Some(1));
    }
}
