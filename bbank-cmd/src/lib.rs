//! Command implementations for the blood bank dashboard CLI.
//!
//! Runs the same fetch → transform → plot pipeline the web dashboard uses
//! and prints the results as JSON, plus a client for the separate
//! predict-expiry service.

use clap::{Args, Subcommand};

use bbank_core::config::{
    DEFAULT_BASE_URL, DEFAULT_DONATION_LIMIT, DEFAULT_PREDICT_URL, DEFAULT_TIMEOUT_SECS,
};
use bbank_core::{ApiConfig, BloodType};
use std::time::Duration;

pub mod chart;
pub mod predict;
pub mod source;

/// Connection settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Base URL of the blood bank API
    #[arg(long, env = "BBANK_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Predict-expiry endpoint (a separate service)
    #[arg(long, env = "BBANK_PREDICT_URL", default_value = DEFAULT_PREDICT_URL, global = true)]
    pub predict_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "BBANK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Number of donation records to request
    #[arg(long, env = "BBANK_DONATION_LIMIT", default_value_t = DEFAULT_DONATION_LIMIT, global = true)]
    pub donation_limit: u32,

    /// Serve built-in mock data only, never touch the network
    #[arg(long, global = true)]
    pub mock: bool,

    /// Fail instead of falling back to mock data when the API is unreachable
    #[arg(long, global = true, conflicts_with = "mock")]
    pub no_fallback: bool,
}

impl ApiArgs {
    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            predict_url: self.predict_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            donation_limit: self.donation_limit,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the dashboard's chart panels
    Presets,

    /// Fetch a panel's dataset and print the transformed series
    Series {
        /// Panel id (see `presets`)
        preset: String,
    },

    /// Fetch a panel's dataset and print its Plotly figure
    Chart {
        /// Panel id (see `presets`)
        preset: String,

        /// bar, horizontal, pie, donut or line (defaults to the panel's own)
        #[arg(short, long)]
        kind: Option<String>,

        /// Use the dark theme colours
        #[arg(long)]
        dark: bool,
    },

    /// Ask the prediction service for the shelf life of a donation
    PredictExpiry {
        #[arg(long)]
        day: u32,

        #[arg(long)]
        month: u32,

        /// e.g. O+, AB-
        #[arg(long)]
        blood_type: BloodType,

        /// Collected volume in ml
        #[arg(long)]
        volume_ml: f64,

        /// Hemoglobin in g/dL
        #[arg(long)]
        hemoglobin: f64,

        /// Donor age in years
        #[arg(long)]
        age: u32,
    },
}

pub async fn run(command: Command, api: ApiArgs) -> anyhow::Result<()> {
    match command {
        Command::Presets => chart::list_presets(),
        Command::Series { preset } => chart::run_series(&api, &preset).await,
        Command::Chart { preset, kind, dark } => {
            chart::run_chart(&api, &preset, kind.as_deref(), dark).await
        }
        Command::PredictExpiry {
            day,
            month,
            blood_type,
            volume_ml,
            hemoglobin,
            age,
        } => {
            let request = bbank_core::models::ExpiryPredictionRequest {
                donation_day: day,
                donation_month: month,
                blood_type,
                collection_volume_ml: volume_ml,
                hemoglobin_g_dl: hemoglobin,
                donor_age: age,
            };
            predict::run_predict(&api, &request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        api: ApiArgs,
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_api_args_defaults() {
        let cli = TestCli::parse_from(["bbank", "presets"]);
        let config = cli.api.config();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.predict_url, DEFAULT_PREDICT_URL);
        assert!(!cli.api.mock);
    }

    #[test]
    fn test_predict_args_parse_blood_type() {
        let cli = TestCli::parse_from([
            "bbank",
            "predict-expiry",
            "--day", "3",
            "--month", "8",
            "--blood-type", "ab-",
            "--volume-ml", "450",
            "--hemoglobin", "13.2",
            "--age", "41",
            "--timeout-secs", "2",
        ]);
        assert_eq!(cli.api.timeout_secs, 2);
        match cli.command {
            Command::PredictExpiry { blood_type, .. } => assert_eq!(blood_type, BloodType::AbNeg),
            _ => panic!("expected predict-expiry"),
        }
    }

    #[test]
    fn test_mock_conflicts_with_no_fallback() {
        assert!(TestCli::try_parse_from(["bbank", "--mock", "--no-fallback", "presets"]).is_err());
    }
}
