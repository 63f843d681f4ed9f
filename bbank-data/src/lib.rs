//! Reshapes raw API payloads into plottable series.
//!
//! Every chart consumes a [`series::Series`]: an ordered sequence of
//! (label, value) or (date, value) pairs. The transformers in [`transform`]
//! are pure; the only ordering they apply is the one they are asked for,
//! except that time series always come out sorted by date.

/// The uniform shape handed to the chart view.
pub mod series {
    use bbank_core::models::{BloodTypeCount, TimeSeriesPoint};
    use serde::Serialize;

    /// Date format used for temporal labels: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(tag = "kind", content = "points", rename_all = "snake_case")]
    pub enum Series {
        /// Units per blood type, in transformer output order
        Categorical(Vec<BloodTypeCount>),
        /// Values per day, ascending by date
        Temporal(Vec<TimeSeriesPoint>),
    }

    impl Series {
        pub fn len(&self) -> usize {
            match self {
                Series::Categorical(points) => points.len(),
                Series::Temporal(points) => points.len(),
            }
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        pub fn is_temporal(&self) -> bool {
            matches!(self, Series::Temporal(_))
        }

        /// Category codes or ISO dates, one per point.
        pub fn labels(&self) -> Vec<String> {
            match self {
                Series::Categorical(points) => {
                    points.iter().map(|p| p.label.to_string()).collect()
                }
                Series::Temporal(points) => points
                    .iter()
                    .map(|p| p.date.format(DATE_FORMAT).to_string())
                    .collect(),
            }
        }

        pub fn values(&self) -> Vec<f64> {
            match self {
                Series::Categorical(points) => points.iter().map(|p| p.value as f64).collect(),
                Series::Temporal(points) => points.iter().map(|p| p.value).collect(),
            }
        }

        pub fn total(&self) -> f64 {
            self.values().iter().sum()
        }

        /// (min, max) over the values, `None` for an empty series.
        pub fn value_bounds(&self) -> Option<(f64, f64)> {
            let values = self.values();
            let first = *values.first()?;
            Some(values.iter().fold((first, first), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            }))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use bbank_core::BloodType;
        use chrono::NaiveDate;

        #[test]
        fn test_parallel_arrays() {
            let series = Series::Temporal(vec![
                TimeSeriesPoint {
                    date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                    value: 2.0,
                },
                TimeSeriesPoint {
                    date: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
                    value: 1.0,
                },
            ]);
            assert_eq!(series.labels(), vec!["2025-08-01", "2025-08-02"]);
            assert_eq!(series.values(), vec![2.0, 1.0]);
            assert_eq!(series.total(), 3.0);
            assert_eq!(series.value_bounds(), Some((1.0, 2.0)));
        }

        #[test]
        fn test_empty_series() {
            let series = Series::Categorical(Vec::new());
            assert!(series.is_empty());
            assert_eq!(series.value_bounds(), None);
        }

        #[test]
        fn test_serialized_shape() {
            let series = Series::Categorical(vec![BloodTypeCount {
                label: BloodType::OPos,
                value: 5,
            }]);
            let json = serde_json::to_value(&series).unwrap();
            assert_eq!(json["kind"], "categorical");
            assert_eq!(json["points"][0]["label"], "O+");
            assert_eq!(json["points"][0]["value"], 5);
        }
    }
}

/// Raw payload → [`series::Series`].
pub mod transform {
    use std::collections::{HashMap, HashSet};

    use bbank_core::models::{BloodTypeCount, DatedCount, DonationRecord, TimeSeriesPoint};
    use bbank_core::{BloodType, DashboardError, Result};
    use chrono::NaiveDate;
    use log::debug;
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::series::{Series, DATE_FORMAT};

    /// Output order for object-of-counts payloads.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LabelOrder {
        /// Keep the order the keys arrived in
        #[default]
        Insertion,
        /// Sort by blood type code, byte-wise ("A+" < "A-" < "AB+" < ...).
        /// Not locale collation, which puts "A-" before "A+".
        ByLabel,
    }

    /// Which reshaping a chart panel applies to its payload.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SeriesTransform {
        /// Object-of-counts (or `[{label, value}]`) → categorical
        CountsByLabel(LabelOrder),
        /// Donation records → per-day counts
        BucketByDay,
        /// `[{date, count}]` → temporal
        DatedCounts,
    }

    impl SeriesTransform {
        pub fn apply(&self, raw: &Value) -> Result<Series> {
            match self {
                SeriesTransform::CountsByLabel(order) => {
                    counts_by_label(raw, *order).map(Series::Categorical)
                }
                SeriesTransform::BucketByDay => {
                    let records: Vec<DonationRecord> = serde_json::from_value(raw.clone())?;
                    Ok(Series::Temporal(bucket_by_day(&records)?))
                }
                SeriesTransform::DatedCounts => dated_counts(raw).map(Series::Temporal),
            }
        }
    }

    /// Variant A: `{ "A+": 10, "O-": 3 }` or `[{ "label": "A+", "value": 10 }]`.
    pub fn counts_by_label(raw: &Value, order: LabelOrder) -> Result<Vec<BloodTypeCount>> {
        let pairs: Vec<(&str, &Value)> = match raw {
            Value::Object(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            Value::Array(items) => items.iter().map(label_value).collect::<Result<_>>()?,
            other => {
                return Err(DashboardError::parse(format!(
                    "expected an object of counts, got {}",
                    json_kind(other)
                )))
            }
        };

        let mut seen = HashSet::new();
        let mut counts = Vec::with_capacity(pairs.len());
        for (label, value) in pairs {
            let label: BloodType = label.parse()?;
            if !seen.insert(label) {
                return Err(DashboardError::parse(format!("duplicate label '{}'", label)));
            }
            counts.push(BloodTypeCount {
                label,
                value: parse_count(label, value)?,
            });
        }

        if order == LabelOrder::ByLabel {
            counts.sort_by(|a, b| a.label.code().cmp(b.label.code()));
        }
        Ok(counts)
    }

    /// Variant B: count donations per calendar day.
    ///
    /// Records without a date are left out. The output is sorted ascending.
    pub fn bucket_by_day(records: &[DonationRecord]) -> Result<Vec<TimeSeriesPoint>> {
        let mut buckets: HashMap<NaiveDate, u64> = HashMap::new();
        let mut skipped = 0usize;
        for record in records {
            match record.donation_date.as_deref() {
                Some(timestamp) => *buckets.entry(day_of(timestamp)?).or_insert(0) += 1,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("Left {} donation records without a date out of bucketing", skipped);
        }

        let mut points: Vec<TimeSeriesPoint> = buckets
            .into_iter()
            .map(|(date, count)| TimeSeriesPoint {
                date,
                value: count as f64,
            })
            .collect();
        sort_by_date(&mut points);
        Ok(points)
    }

    /// Variant C: `[{ "date": ..., "count": ... }]`, sorted ascending by date.
    pub fn dated_counts(raw: &Value) -> Result<Vec<TimeSeriesPoint>> {
        let rows: Vec<DatedCount> = serde_json::from_value(raw.clone())?;
        let mut points = rows
            .iter()
            .map(|row| {
                Ok(TimeSeriesPoint {
                    date: day_of(&row.date)?,
                    value: row.count,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        sort_by_date(&mut points);
        Ok(points)
    }

    /// Sort step shared by every temporal variant. Stable, so same-day
    /// points keep their input order.
    pub fn sort_by_date(points: &mut [TimeSeriesPoint]) {
        points.sort_by_key(|p| p.date);
    }

    /// Truncate a timestamp to its calendar day as written
    /// ("2025-08-01T23:30:00-05:00" is 2025-08-01).
    pub fn day_of(timestamp: &str) -> Result<NaiveDate> {
        let trimmed = timestamp.trim();
        let day = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
        NaiveDate::parse_from_str(day, DATE_FORMAT)
            .map_err(|e| DashboardError::parse(format!("bad date '{}': {}", trimmed, e)))
    }

    fn label_value(item: &Value) -> Result<(&str, &Value)> {
        let label = item
            .get("label")
            .and_then(Value::as_str)
            .ok_or_else(|| DashboardError::parse("entry without a string 'label'"))?;
        let value = item
            .get("value")
            .ok_or_else(|| DashboardError::parse(format!("'{}' has no 'value'", label)))?;
        Ok((label, value))
    }

    fn parse_count(label: BloodType, value: &Value) -> Result<u64> {
        let parsed = match value {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            DashboardError::parse(format!("'{}' is not a unit count for {}", value, label))
        })
    }

    fn json_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        fn date(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        fn record(ts: Option<&str>) -> DonationRecord {
            DonationRecord {
                donation_date: ts.map(str::to_string),
            }
        }

        #[test]
        fn test_counts_sorted_by_label() {
            let raw = json!({"O+": 5, "A+": 10});
            let counts = counts_by_label(&raw, LabelOrder::ByLabel).unwrap();
            assert_eq!(
                counts,
                vec![
                    BloodTypeCount { label: BloodType::APos, value: 10 },
                    BloodTypeCount { label: BloodType::OPos, value: 5 },
                ]
            );
        }

        #[test]
        fn test_counts_keep_insertion_order() {
            let raw = json!({"O-": 3, "AB+": 7, "A+": 10, "B-": 1});
            let counts = counts_by_label(&raw, LabelOrder::Insertion).unwrap();
            assert_eq!(counts.len(), 4);
            let labels: Vec<&str> = counts.iter().map(|c| c.label.code()).collect();
            assert_eq!(labels, vec!["O-", "AB+", "A+", "B-"]);
            for (count, (key, value)) in counts.iter().zip(raw.as_object().unwrap()) {
                assert_eq!(count.label.code(), key);
                assert_eq!(count.value, value.as_u64().unwrap());
            }
        }

        #[test]
        fn test_label_sort_is_bytewise() {
            let raw = json!({"B-": 1, "AB-": 2, "A-": 3, "AB+": 4, "A+": 5});
            let counts = counts_by_label(&raw, LabelOrder::ByLabel).unwrap();
            let labels: Vec<&str> = counts.iter().map(|c| c.label.code()).collect();
            assert_eq!(labels, vec!["A+", "A-", "AB+", "AB-", "B-"]);
        }

        #[test]
        fn test_counts_from_label_list_with_string_values() {
            let raw = json!([{"label": "B+", "value": "12"}, {"label": "A-", "value": 4.0}]);
            let counts = counts_by_label(&raw, LabelOrder::Insertion).unwrap();
            assert_eq!(counts[0], BloodTypeCount { label: BloodType::BPos, value: 12 });
            assert_eq!(counts[1], BloodTypeCount { label: BloodType::ANeg, value: 4 });
        }

        #[test]
        fn test_counts_reject_bad_shapes() {
            assert!(counts_by_label(&json!({"A+": -1}), LabelOrder::Insertion).is_err());
            assert!(counts_by_label(&json!({"A+": 2.5}), LabelOrder::Insertion).is_err());
            assert!(counts_by_label(&json!({"Q+": 2}), LabelOrder::Insertion).is_err());
            assert!(counts_by_label(&json!("A+"), LabelOrder::Insertion).is_err());
            let dup = json!([{"label": "A+", "value": 1}, {"label": "a+", "value": 2}]);
            assert!(counts_by_label(&dup, LabelOrder::Insertion).is_err());
        }

        #[test]
        fn test_bucket_by_day_scenario() {
            let records = vec![
                record(Some("2025-08-01T10:00:00Z")),
                record(Some("2025-08-01T11:00:00Z")),
                record(Some("2025-08-02T00:00:00Z")),
            ];
            let points = bucket_by_day(&records).unwrap();
            assert_eq!(
                points,
                vec![
                    TimeSeriesPoint { date: date(2025, 8, 1), value: 2.0 },
                    TimeSeriesPoint { date: date(2025, 8, 2), value: 1.0 },
                ]
            );
        }

        #[test]
        fn test_bucket_by_day_sorts_and_preserves_total() {
            let records = vec![
                record(Some("2025-08-03T09:00:00Z")),
                record(None),
                record(Some("2025-07-30 14:00:00")),
                record(Some("2025-08-03T18:00:00+02:00")),
                record(Some("2025-08-01")),
                record(None),
                record(Some("2025-07-30T01:00:00.250Z")),
            ];
            let points = bucket_by_day(&records).unwrap();
            let total: f64 = points.iter().map(|p| p.value).sum();
            assert_eq!(total as usize, records.len() - 2);
            assert!(points.windows(2).all(|w| w[0].date <= w[1].date));
            assert_eq!(points[0].date, date(2025, 7, 30));
            assert_eq!(points[0].value, 2.0);
        }

        #[test]
        fn test_bucket_by_day_rejects_malformed_dates() {
            let records = vec![record(Some("yesterday"))];
            assert!(matches!(bucket_by_day(&records), Err(DashboardError::Parse(_))));
        }

        #[test]
        fn test_dated_counts_are_sorted() {
            let raw = json!([
                {"date": "2025-08-03", "count": 30},
                {"date": "2025-08-01", "count": 10},
                {"date": "2025-08-02", "count": 20}
            ]);
            let points = dated_counts(&raw).unwrap();
            let values: Vec<f64> = points.iter().map(|p| p.value).collect();
            assert_eq!(values, vec![10.0, 20.0, 30.0]);
        }

        #[test]
        fn test_empty_inputs_give_empty_series() {
            for transform in [
                SeriesTransform::CountsByLabel(LabelOrder::ByLabel),
                SeriesTransform::BucketByDay,
                SeriesTransform::DatedCounts,
            ] {
                let series = transform.apply(&json!([])).unwrap();
                assert!(series.is_empty(), "{:?}", transform);
            }
            let series = SeriesTransform::CountsByLabel(LabelOrder::Insertion)
                .apply(&json!({}))
                .unwrap();
            assert!(series.is_empty());
        }

        #[test]
        fn test_apply_picks_series_kind() {
            let donations = json!([{"donation_date": "2025-08-01T10:00:00Z"}]);
            assert!(SeriesTransform::BucketByDay.apply(&donations).unwrap().is_temporal());
            let counts = json!({"A+": 1});
            assert!(!SeriesTransform::CountsByLabel(LabelOrder::Insertion)
                .apply(&counts)
                .unwrap()
                .is_temporal());
            assert!(SeriesTransform::DatedCounts.apply(&counts).is_err());
        }
    }
}
