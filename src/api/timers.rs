//! Device timer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::{encode, segment, ApiError, SensiboClient};
use crate::clients::HttpTransport;
use crate::config::ApiVersion;
use crate::models::{ACStateData, DeviceTimer};

/// Body of [`SensiboClient::set_device_timer`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetDeviceTimerPayload {
    /// Delay before the timer fires.
    pub minutes_from_now: u32,
    /// The state applied when it does.
    pub ac_state: ACStateData,
}

impl<T: HttpTransport> SensiboClient<T> {
    /// Gets the timer set on the device.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn get_device_timer(&self, id: &str) -> Result<DeviceTimer, ApiError> {
        self.get_result(
            "getting timer",
            ApiVersion::V1,
            &timer_path(id),
            HashMap::new(),
        )
        .await
    }

    /// Sets a timer that applies `state` in `minutes_from_now` minutes.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn set_device_timer(
        &self,
        id: &str,
        minutes_from_now: u32,
        state: &ACStateData,
    ) -> Result<String, ApiError> {
        const OPERATION: &str = "setting timer";

        let payload = SetDeviceTimerPayload {
            minutes_from_now,
            ac_state: state.clone(),
        };
        let body = encode(OPERATION, &payload)?;

        self.http
            .put(ApiVersion::V1, &timer_path(id), body)
            .await
            .map_err(|e| ApiError::request(OPERATION, e))
    }

    /// Removes the timer from the device.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_device_timer(&self, id: &str) -> Result<String, ApiError> {
        self.http
            .delete(ApiVersion::V1, &timer_path(id))
            .await
            .map_err(|e| ApiError::request("deleting timer", e))
    }
}

fn timer_path(id: &str) -> String {
    format!("pods/{}/timer", segment(id))
}
