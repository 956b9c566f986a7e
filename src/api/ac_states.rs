//! AC state log and AC state changes.

use serde::{Deserialize, Serialize};

use crate::api::{encode, segment, single_param, ApiError, SensiboClient};
use crate::clients::HttpTransport;
use crate::config::ApiVersion;
use crate::models::{ACState, ACStateData};

/// Body of [`SensiboClient::set_device_ac_state`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetACStatePayload {
    pub ac_state: ACStateData,
}

/// Body of [`SensiboClient::set_device_ac_state_property`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetACStatePropertyPayload {
    /// The new value of the property, as the API expects it.
    pub new_value: serde_json::Value,
}

impl<T: HttpTransport> SensiboClient<T> {
    /// Gets the most recent `limit` entries of the device's AC state log.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn get_device_ac_states(
        &self,
        id: &str,
        limit: u32,
    ) -> Result<Vec<ACState>, ApiError> {
        self.get_result(
            "getting AC states",
            ApiVersion::V2,
            &format!("pods/{}/acStates", segment(id)),
            single_param("limit", limit),
        )
        .await
    }

    /// Changes a single AC state property (`on`, `mode`, `targetTemperature`, ...).
    ///
    /// Returns the raw response body.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// client.set_device_ac_state_property("abc", "on", true).await?;
    /// client.set_device_ac_state_property("abc", "mode", "heat").await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn set_device_ac_state_property(
        &self,
        id: &str,
        property: &str,
        value: impl Into<serde_json::Value>,
    ) -> Result<String, ApiError> {
        const OPERATION: &str = "updating property";

        let payload = SetACStatePropertyPayload {
            new_value: value.into(),
        };
        let body = encode(OPERATION, &payload)?;

        self.http
            .patch(
                ApiVersion::V2,
                &format!("pods/{}/acStates/{}", segment(id), segment(property)),
                body,
            )
            .await
            .map_err(|e| ApiError::request(OPERATION, e))
    }

    /// Replaces the whole AC state.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn set_device_ac_state(
        &self,
        id: &str,
        state: &ACStateData,
    ) -> Result<String, ApiError> {
        const OPERATION: &str = "setting AC state";

        let payload = SetACStatePayload {
            ac_state: state.clone(),
        };
        let body = encode(OPERATION, &payload)?;

        self.http
            .post(
                ApiVersion::V2,
                &format!("pods/{}/acStates", segment(id)),
                body,
            )
            .await
            .map_err(|e| ApiError::request(OPERATION, e))
    }
}
