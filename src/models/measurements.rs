//! Historical sensor measurements.

use serde::{Deserialize, Serialize};

use crate::models::common::null_as_default;

/// One sample of a measured value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Measurement {
    /// Sample time.
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    /// Sample value.
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

/// Temperature and humidity history of a device.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HistoricalMeasurements {
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: Vec<Measurement>,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: Vec<Measurement>,
}

impl HistoricalMeasurements {
    /// Returns the most recent temperature sample, if any.
    #[must_use]
    pub fn latest_temperature(&self) -> Option<&Measurement> {
        self.temperature.last()
    }

    /// Returns the most recent humidity sample, if any.
    #[must_use]
    pub fn latest_humidity(&self) -> Option<&Measurement> {
        self.humidity.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_historical_measurements_keep_sample_order() {
        let history: HistoricalMeasurements = serde_json::from_value(json!({
            "temperature": [
                {"time": "2024-01-01T10:00:00Z", "value": 20.5},
                {"time": "2024-01-01T10:15:00Z", "value": 21.0}
            ],
            "humidity": [{"time": "2024-01-01T10:00:00Z", "value": 48}]
        }))
        .unwrap();

        assert_eq!(history.temperature.len(), 2);
        assert!((history.latest_temperature().unwrap().value - 21.0).abs() < f64::EPSILON);
        assert_eq!(history.latest_humidity().unwrap().time, "2024-01-01T10:00:00Z");
    }

    #[test]
    fn test_historical_measurements_empty() {
        let history: HistoricalMeasurements = serde_json::from_str("{}").unwrap();
        assert!(history.latest_temperature().is_none());
        assert!(history.latest_humidity().is_none());
    }

    #[test]
    fn test_historical_measurements_tolerate_nulls() {
        let history: HistoricalMeasurements = serde_json::from_value(json!({
            "temperature": [{"time": "2024-01-01T10:00:00Z", "value": null}],
            "humidity": null
        }))
        .unwrap();

        let sample = history.latest_temperature().unwrap();
        assert!(sample.value.abs() < f64::EPSILON);
        assert_eq!(sample.time, "2024-01-01T10:00:00Z");
        assert!(history.humidity.is_empty());

        let sample: Measurement = serde_json::from_str(r#"{"time": null, "value": 3}"#).unwrap();
        assert!(sample.time.is_empty());
    }
}
