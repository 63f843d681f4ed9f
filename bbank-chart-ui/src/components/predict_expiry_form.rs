//! Expiry prediction form: six inputs, one POST to the prediction service.
//!
//! Input is parsed and validated before anything is sent, so bad values show
//! up inline as "invalid input" without a round trip. Requests go through a
//! `LoadTracker` like the chart panels, so a slow answer to an earlier submit
//! never overwrites a newer one.

use bbank_core::client::ApiClient;
use bbank_core::models::ExpiryForm;
use bbank_panel::{LoadState, LoadTracker};
use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn PredictExpiryForm(state: AppState) -> Element {
    let mut form = use_signal(ExpiryForm::default);
    let mut tracker = use_signal(LoadTracker::<f64>::new);

    use_drop(move || {
        if let Ok(mut tracker) = tracker.try_write() {
            tracker.teardown();
        }
    });

    let on_submit = move |_: MouseEvent| {
        let ticket = tracker.write().begin();
        let request = match form.read().to_request() {
            Ok(request) => request,
            Err(e) => {
                tracker.write().settle(ticket, Err::<f64, _>(e));
                return;
            }
        };
        let api = state.api.read().clone();
        spawn(async move {
            let result = match ApiClient::new(api) {
                Ok(client) => client
                    .predict_expiry(&request)
                    .await
                    .map(|p| p.predicted_shelf_life_days),
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::warn!("Expiry prediction failed: {}", e);
            }
            tracker.write().settle(ticket, result);
        });
    };

    let outcome = tracker.read().state().clone();
    let pending = outcome.is_loading();
    let values = form.read().clone();

    rsx! {
        div {
            class: "predict-expiry",
            style: "max-width: 420px; margin: 32px auto; padding: 24px; border-radius: 12px; box-shadow: 0 1px 4px rgba(0,0,0,0.15);",
            h3 {
                style: "margin: 0 0 16px 0; font-size: 18px; text-align: center;",
                "Predict Blood Expiry"
            }
            FormInput {
                placeholder: "Donation Day",
                value: values.donation_day,
                on_input: move |v: String| form.write().donation_day = v,
            }
            FormInput {
                placeholder: "Donation Month",
                value: values.donation_month,
                on_input: move |v: String| form.write().donation_month = v,
            }
            FormInput {
                placeholder: "Blood Type (e.g. O+, A-)",
                input_type: "text",
                value: values.blood_type,
                on_input: move |v: String| form.write().blood_type = v,
            }
            FormInput {
                placeholder: "Collection Volume (ml)",
                step: "0.1",
                value: values.collection_volume_ml,
                on_input: move |v: String| form.write().collection_volume_ml = v,
            }
            FormInput {
                placeholder: "Hemoglobin (g/dL)",
                step: "0.1",
                value: values.hemoglobin_g_dl,
                on_input: move |v: String| form.write().hemoglobin_g_dl = v,
            }
            FormInput {
                placeholder: "Donor Age",
                value: values.donor_age,
                on_input: move |v: String| form.write().donor_age = v,
            }
            button {
                r#type: "button",
                style: "width: 100%; padding: 8px; border: none; border-radius: 4px; background: #2563eb; color: white; cursor: pointer;",
                disabled: pending,
                onclick: on_submit,
                if pending { "Predicting..." } else { "Predict" }
            }
            {
                match outcome {
                    LoadState::Success(days) => rsx! {
                        div {
                            style: "margin-top: 16px; padding: 12px; border-radius: 4px; background: #dcfce7; color: #166534; text-align: center;",
                            "Predicted Shelf Life: "
                            strong { "{days} days" }
                        }
                    },
                    LoadState::Error(message) => rsx! {
                        div {
                            style: "margin-top: 16px; padding: 12px; border-radius: 4px; background: #fee2e2; color: #991b1b; text-align: center;",
                            "{message}"
                        }
                    },
                    LoadState::Idle | LoadState::Loading => rsx! {},
                }
            }
        }
    }
}

#[component]
fn FormInput(
    placeholder: &'static str,
    #[props(default = "number")] input_type: &'static str,
    #[props(default = "1")] step: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            r#type: "{input_type}",
            step: "{step}",
            placeholder: "{placeholder}",
            value: "{value}",
            style: "display: block; width: 100%; box-sizing: border-box; margin-bottom: 12px; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
            oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
        }
    }
}
