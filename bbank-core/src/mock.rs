//! Canned payloads served when the remote API is unreachable, and for the
//! datasets the API never serves.
//!
//! Each payload has the same JSON shape the live endpoint returns so it goes
//! through the same transformer.

use serde_json::{json, Value};

use crate::dataset::Dataset;

/// The mock payload for a dataset.
pub fn payload(dataset: Dataset) -> Value {
    match dataset {
        Dataset::BloodTypes => json!({
            "O+": 1420,
            "A+": 1180,
            "B+": 640,
            "AB+": 210,
            "O-": 330,
            "A-": 270,
            "B-": 120,
            "AB-": 60
        }),
        Dataset::BloodTypeList => json!([
            { "label": "O+", "value": 1420 },
            { "label": "A+", "value": 1180 },
            { "label": "B+", "value": 640 },
            { "label": "AB+", "value": 210 },
            { "label": "O-", "value": 330 },
            { "label": "A-", "value": 270 },
            { "label": "B-", "value": 120 },
            { "label": "AB-", "value": 60 }
        ]),
        Dataset::StockOverTime => json!([
            { "date": "2025-07-28", "count": 3890 },
            { "date": "2025-07-29", "count": 3962 },
            { "date": "2025-07-30", "count": 4015 },
            { "date": "2025-07-31", "count": 3978 },
            { "date": "2025-08-01", "count": 4120 },
            { "date": "2025-08-02", "count": 4230 },
            { "date": "2025-08-03", "count": 4185 }
        ]),
        Dataset::DonationRecords => json!([
            { "donation_date": "2025-08-01T09:15:00Z" },
            { "donation_date": "2025-08-01T10:00:00Z" },
            { "donation_date": "2025-08-01T16:45:00Z" },
            { "donation_date": "2025-08-02T08:30:00Z" },
            { "donation_date": "2025-08-02T12:10:00Z" },
            { "donation_date": "2025-08-03T11:05:00Z" },
            { "donation_date": null },
            { "donation_date": "2025-08-04T14:20:00Z" },
            { "donation_date": "2025-08-04T15:00:00Z" },
            { "donation_date": "2025-08-04T17:40:00Z" }
        ]),
        Dataset::HistoricalStock => json!([
            { "date": "2025-01-01", "count": 3520 },
            { "date": "2025-02-01", "count": 3310 },
            { "date": "2025-03-01", "count": 3605 },
            { "date": "2025-04-01", "count": 3790 },
            { "date": "2025-05-01", "count": 3880 },
            { "date": "2025-06-01", "count": 3640 },
            { "date": "2025-07-01", "count": 3925 },
            { "date": "2025-08-01", "count": 4120 }
        ]),
        Dataset::DonationTrends => json!([
            { "date": "2025-03-01", "count": 412 },
            { "date": "2025-04-01", "count": 436 },
            { "date": "2025-05-01", "count": 468 },
            { "date": "2025-06-01", "count": 397 },
            { "date": "2025-07-01", "count": 455 },
            { "date": "2025-08-01", "count": 489 }
        ]),
        Dataset::Forecast => json!([
            { "date": "2025-08-11", "count": 4210 },
            { "date": "2025-08-04", "count": 4160 },
            { "date": "2025-08-18", "count": 4095 },
            { "date": "2025-08-25", "count": 3980 },
            { "date": "2025-09-01", "count": 4050 }
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dataset_has_a_payload() {
        for dataset in Dataset::ALL {
            let value = payload(dataset);
            assert!(value.is_object() || value.is_array(), "{}", dataset);
        }
    }

    #[test]
    fn test_blood_type_payload_keeps_key_order() {
        let value = payload(Dataset::BloodTypes);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys[0], "O+");
        assert_eq!(keys[7], "AB-");
    }
}
