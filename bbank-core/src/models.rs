//! Transient entities held by chart panels, plus the predict-expiry payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::blood_type::BloodType;
use crate::error::{DashboardError, Result};

/// Units on hand for one blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodTypeCount {
    pub label: BloodType,
    pub value: u64,
}

/// A value observed on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A donation as listed by the donations endpoint. Only the date matters here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(default)]
    pub donation_date: Option<String>,
}

/// One row of a pre-aggregated `{date, count}` series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedCount {
    pub date: String,
    pub count: f64,
}

/// Inputs accepted by the expiry prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryPredictionRequest {
    pub donation_day: u32,
    pub donation_month: u32,
    pub blood_type: BloodType,
    pub collection_volume_ml: f64,
    pub hemoglobin_g_dl: f64,
    pub donor_age: u32,
}

impl ExpiryPredictionRequest {
    /// Reject requests the service could never answer meaningfully.
    pub fn validate(&self) -> Result<()> {
        if !(1..=31).contains(&self.donation_day) {
            return Err(DashboardError::InvalidInput(format!(
                "donation_day must be 1-31, got {}",
                self.donation_day
            )));
        }
        if !(1..=12).contains(&self.donation_month) {
            return Err(DashboardError::InvalidInput(format!(
                "donation_month must be 1-12, got {}",
                self.donation_month
            )));
        }
        if !(self.collection_volume_ml.is_finite() && self.collection_volume_ml > 0.0) {
            return Err(DashboardError::InvalidInput(
                "collection_volume_ml must be positive".to_string(),
            ));
        }
        if !(self.hemoglobin_g_dl.is_finite() && self.hemoglobin_g_dl > 0.0) {
            return Err(DashboardError::InvalidInput(
                "hemoglobin_g_dl must be positive".to_string(),
            ));
        }
        if !(1..=120).contains(&self.donor_age) {
            return Err(DashboardError::InvalidInput(format!(
                "donor_age must be 1-120, got {}",
                self.donor_age
            )));
        }
        Ok(())
    }
}

/// Raw text of the expiry prediction form, one field per input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpiryForm {
    pub donation_day: String,
    pub donation_month: String,
    pub blood_type: String,
    pub collection_volume_ml: String,
    pub hemoglobin_g_dl: String,
    pub donor_age: String,
}

impl ExpiryForm {
    /// Parse every field and validate the resulting request.
    pub fn to_request(&self) -> Result<ExpiryPredictionRequest> {
        let blood_type = self.blood_type.parse::<BloodType>().map_err(|_| {
            DashboardError::InvalidInput(format!(
                "blood_type must be one of A+, A-, B+, B-, AB+, AB-, O+, O-, got '{}'",
                self.blood_type.trim()
            ))
        })?;
        let request = ExpiryPredictionRequest {
            donation_day: form_field("donation_day", &self.donation_day)?,
            donation_month: form_field("donation_month", &self.donation_month)?,
            blood_type,
            collection_volume_ml: form_field("collection_volume_ml", &self.collection_volume_ml)?,
            hemoglobin_g_dl: form_field("hemoglobin_g_dl", &self.hemoglobin_g_dl)?,
            donor_age: form_field("donor_age", &self.donor_age)?,
        };
        request.validate()?;
        Ok(request)
    }
}

fn form_field<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::InvalidInput(format!("{} is required", name)));
    }
    trimmed
        .parse()
        .map_err(|_| DashboardError::InvalidInput(format!("{} is not a number: '{}'", name, trimmed)))
}

/// The service's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryPrediction {
    pub predicted_shelf_life_days: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ExpiryPredictionRequest {
        ExpiryPredictionRequest {
            donation_day: 14,
            donation_month: 8,
            blood_type: BloodType::OPos,
            collection_volume_ml: 450.0,
            hemoglobin_g_dl: 13.5,
            donor_age: 34,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_invalid_requests() {
        let mut r = request();
        r.donation_month = 13;
        assert!(matches!(r.validate(), Err(DashboardError::InvalidInput(_))));

        let mut r = request();
        r.donation_day = 0;
        assert!(r.validate().is_err());

        let mut r = request();
        r.collection_volume_ml = -1.0;
        assert!(r.validate().is_err());

        let mut r = request();
        r.hemoglobin_g_dl = f64::NAN;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_request_serializes_blood_type_code() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["blood_type"], "O+");
        assert_eq!(json["donor_age"], 34);
    }

    fn form() -> ExpiryForm {
        ExpiryForm {
            donation_day: "14".to_string(),
            donation_month: " 8 ".to_string(),
            blood_type: "o+".to_string(),
            collection_volume_ml: "450".to_string(),
            hemoglobin_g_dl: "13.5".to_string(),
            donor_age: "34".to_string(),
        }
    }

    #[test]
    fn test_form_parses_into_request() {
        assert_eq!(form().to_request().unwrap(), request());
    }

    #[test]
    fn test_form_errors_are_invalid_input() {
        let mut f = form();
        f.donor_age = String::new();
        assert_eq!(
            f.to_request(),
            Err(DashboardError::InvalidInput("donor_age is required".to_string()))
        );

        let mut f = form();
        f.hemoglobin_g_dl = "lots".to_string();
        assert!(matches!(f.to_request(), Err(DashboardError::InvalidInput(_))));

        let mut f = form();
        f.blood_type = "C+".to_string();
        assert!(matches!(f.to_request(), Err(DashboardError::InvalidInput(_))));

        let mut f = form();
        f.donation_month = "13".to_string();
        assert!(matches!(f.to_request(), Err(DashboardError::InvalidInput(_))));

        assert!(matches!(
            ExpiryForm::default().to_request(),
            Err(DashboardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_donation_record_missing_date() {
        let records: Vec<DonationRecord> =
            serde_json::from_str(r#"[{"id": 1}, {"donation_date": null}, {"donation_date": "2025-08-01T10:00:00Z"}]"#)
                .unwrap();
        assert_eq!(records[0].donation_date, None);
        assert_eq!(records[1].donation_date, None);
        assert_eq!(records[2].donation_date.as_deref(), Some("2025-08-01T10:00:00Z"));
    }
}
