//! `presets`, `series` and `chart` subcommands.

use anyhow::{anyhow, bail};
use bbank_chart::{ChartKind, Theme};
use bbank_core::DataSource;
use bbank_data::series::Series;
use bbank_panel::presets::{find_preset, presets};
use bbank_panel::{load_panel, panel_view, LoadState, LoadTracker, PanelConfig, PanelView};
use log::warn;

use crate::source::build_source;
use crate::ApiArgs;

pub fn list_presets() -> anyhow::Result<()> {
    for preset in presets() {
        let kinds: Vec<&str> = preset.kinds.iter().map(|k| k.as_str()).collect();
        println!(
            "{:<26} {:<18} {}",
            preset.id,
            preset.dataset.name(),
            kinds.join(", ")
        );
    }
    Ok(())
}

pub async fn run_series(api: &ApiArgs, preset_id: &str) -> anyhow::Result<()> {
    let config = lookup(preset_id)?;
    let source = build_source(api)?;
    let series = load(source.as_ref(), &config).await?;
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}

pub async fn run_chart(
    api: &ApiArgs,
    preset_id: &str,
    kind: Option<&str>,
    dark: bool,
) -> anyhow::Result<()> {
    let source = build_source(api)?;
    let view = build_view(source.as_ref(), preset_id, kind, Theme::from_dark_mode(dark)).await?;
    match view {
        PanelView::Chart(spec) => println!("{}", serde_json::to_string_pretty(&spec)?),
        PanelView::Empty { message } => warn!("{}: {}", preset_id, message),
        PanelView::Error { message } => bail!("{}: {}", preset_id, message),
        PanelView::Idle | PanelView::Loading => bail!("{}: load did not settle", preset_id),
    }
    Ok(())
}

/// Fetch and plot one panel the way the dashboard would.
pub async fn build_view<S>(
    source: &S,
    preset_id: &str,
    kind: Option<&str>,
    theme: Theme,
) -> anyhow::Result<PanelView>
where
    S: DataSource + ?Sized,
{
    let config = lookup(preset_id)?;
    let kind = match kind {
        Some(k) => k.parse::<ChartKind>()?,
        None => config.default_kind,
    };
    if !config.kinds.contains(&kind) {
        let offered: Vec<&str> = config.kinds.iter().map(|k| k.as_str()).collect();
        bail!(
            "{} cannot be drawn as {} (offers: {})",
            config.id,
            kind,
            offered.join(", ")
        );
    }
    let series = load(source, &config).await?;
    Ok(panel_view(&LoadState::Success(series), &config, kind, theme))
}

/// One load cycle through a fresh tracker.
pub async fn load<S>(source: &S, config: &PanelConfig) -> anyhow::Result<Series>
where
    S: DataSource + ?Sized,
{
    let mut tracker = LoadTracker::new();
    load_panel(&mut tracker, source, config).await;
    match tracker.state() {
        LoadState::Success(series) => Ok(series.clone()),
        LoadState::Error(message) => bail!("{}: {}", config.id, message),
        LoadState::Idle | LoadState::Loading => bail!("{}: load did not settle", config.id),
    }
}

fn lookup(preset_id: &str) -> anyhow::Result<PanelConfig> {
    find_preset(preset_id)
        .ok_or_else(|| anyhow!("unknown preset '{}' (run `presets` to list them)", preset_id))
}
