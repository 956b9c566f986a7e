//! Climate React settings.

use serde::{Deserialize, Serialize};

use crate::api::{encode, segment, ApiError, SensiboClient};
use crate::clients::HttpTransport;
use crate::config::ApiVersion;
use crate::models::ClimateReact;

/// Body of [`SensiboClient::toggle_device_climate_react`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToggleClimateReactPayload {
    pub enabled: bool,
}

impl<T: HttpTransport> SensiboClient<T> {
    /// Gets the device's Climate React settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn get_device_climate_react_settings(
        &self,
        id: &str,
    ) -> Result<ClimateReact, ApiError> {
        self.get_result(
            "getting climate react settings",
            ApiVersion::V2,
            &format!("pods/{}/smartmode", segment(id)),
            std::collections::HashMap::new(),
        )
        .await
    }

    /// Turns Climate React on or off.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn toggle_device_climate_react(
        &self,
        id: &str,
        enabled: bool,
    ) -> Result<String, ApiError> {
        const OPERATION: &str = "setting climate react";

        let body = encode(OPERATION, &ToggleClimateReactPayload { enabled })?;

        self.http
            .put(
                ApiVersion::V2,
                &format!("pods/{}/smartmode", segment(id)),
                body,
            )
            .await
            .map_err(|e| ApiError::request(OPERATION, e))
    }
}
