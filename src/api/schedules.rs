//! Device schedules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::{encode, segment, ApiError, SensiboClient};
use crate::clients::HttpTransport;
use crate::config::ApiVersion;
use crate::models::{ACStateData, DeviceSchedule};

/// Body of [`SensiboClient::create_device_schedule`].
///
/// # Example
///
/// ```rust
/// use sensibo_api::api::CreateDeviceSchedulePayload;
/// use sensibo_api::models::ACStateData;
///
/// let payload = CreateDeviceSchedulePayload {
///     target_time_local: "07:30".to_string(),
///     time_zone: "Europe/Tbilisi".to_string(),
///     ac_state: ACStateData { on: true, ..Default::default() },
///     recurring_days: vec!["Monday".to_string(), "Friday".to_string()],
/// };
///
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["timezone"], "Europe/Tbilisi");
/// assert_eq!(json["recurOnDaysOfWeek"][1], "Friday");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceSchedulePayload {
    /// Local time of day to fire at (`HH:MM`).
    pub target_time_local: String,

    /// IANA time zone of `target_time_local`.
    #[serde(rename = "timezone")]
    pub time_zone: String,

    /// The state to apply.
    pub ac_state: ACStateData,

    /// Days of the week to repeat on (`Monday`, `Tuesday`, ...).
    #[serde(rename = "recurOnDaysOfWeek")]
    pub recurring_days: Vec<String>,
}

/// Body of [`SensiboClient::toggle_device_schedule`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSchedulePayload {
    pub is_enabled: bool,
}

impl<T: HttpTransport> SensiboClient<T> {
    /// Lists the device's schedules.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn get_device_schedules(&self, id: &str) -> Result<Vec<DeviceSchedule>, ApiError> {
        self.get_result(
            "getting schedules",
            ApiVersion::V1,
            &schedules_path(id),
            HashMap::new(),
        )
        .await
    }

    /// Gets one schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn get_device_schedule(
        &self,
        id: &str,
        schedule_id: &str,
    ) -> Result<DeviceSchedule, ApiError> {
        self.get_result(
            "getting schedule",
            ApiVersion::V1,
            &schedule_path(id, schedule_id),
            HashMap::new(),
        )
        .await
    }

    /// Creates a schedule.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_device_schedule(
        &self,
        id: &str,
        schedule: &CreateDeviceSchedulePayload,
    ) -> Result<String, ApiError> {
        const OPERATION: &str = "creating a schedule";

        let body = encode(OPERATION, schedule)?;

        self.http
            .post(ApiVersion::V1, &schedules_path(id), body)
            .await
            .map_err(|e| ApiError::request(OPERATION, e))
    }

    /// Enables or disables a schedule.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn toggle_device_schedule(
        &self,
        id: &str,
        schedule_id: &str,
        enabled: bool,
    ) -> Result<String, ApiError> {
        const OPERATION: &str = "toggling schedule";

        let body = encode(OPERATION, &ToggleSchedulePayload { is_enabled: enabled })?;

        self.http
            .put(ApiVersion::V1, &schedule_path(id, schedule_id), body)
            .await
            .map_err(|e| ApiError::request(OPERATION, e))
    }

    /// Deletes a schedule.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_device_schedule(
        &self,
        id: &str,
        schedule_id: &str,
    ) -> Result<String, ApiError> {
        self.http
            .delete(ApiVersion::V1, &schedule_path(id, schedule_id))
            .await
            .map_err(|e| ApiError::request("deleting schedule", e))
    }
}

fn schedules_path(id: &str) -> String {
    format!("pods/{}/schedules", segment(id))
}

fn schedule_path(id: &str, schedule_id: &str) -> String {
    format!("pods/{}/schedules/{}", segment(id), segment(schedule_id))
}
