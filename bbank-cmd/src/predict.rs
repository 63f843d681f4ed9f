//! `predict-expiry` subcommand.

use anyhow::bail;
use bbank_core::client::ApiClient;
use bbank_core::models::ExpiryPredictionRequest;
use log::info;

use crate::ApiArgs;

pub async fn run_predict(api: &ApiArgs, request: &ExpiryPredictionRequest) -> anyhow::Result<()> {
    if api.mock {
        bail!("the prediction service has no mock data; run without --mock");
    }
    let client = ApiClient::new(api.config())?;
    info!("Requesting shelf-life prediction for {}", request.blood_type);
    let prediction = client.predict_expiry(request).await?;
    println!(
        "Predicted shelf life: {} days",
        prediction.predicted_shelf_life_days
    );
    Ok(())
}
