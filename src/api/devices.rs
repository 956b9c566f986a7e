//! Device lookup and sensor history.

use crate::api::{segment, single_param, ApiError, SensiboClient};
use crate::clients::HttpTransport;
use crate::config::ApiVersion;
use crate::models::{Device, HistoricalMeasurements};

fn fields_param(fields: &[&str]) -> std::collections::HashMap<String, String> {
    single_param("fields", fields.join(","))
}

impl<T: HttpTransport> SensiboClient<T> {
    /// Lists every device of the account.
    ///
    /// `fields` selects which parts of each [`Device`] the API fills in
    /// (`["*"]` for all of them).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a list
    /// of devices.
    pub async fn get_all_devices(&self, fields: &[&str]) -> Result<Vec<Device>, ApiError> {
        self.get_result(
            "getting all devices",
            ApiVersion::V2,
            "users/me/pods",
            fields_param(fields),
        )
        .await
    }

    /// Gets one device.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a device.
    pub async fn get_device(&self, id: &str, fields: &[&str]) -> Result<Device, ApiError> {
        self.get_result(
            "getting device",
            ApiVersion::V2,
            &format!("pods/{}", segment(id)),
            fields_param(fields),
        )
        .await
    }

    /// Gets temperature and humidity history for the last `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be decoded.
    pub async fn get_device_historical_measurements(
        &self,
        id: &str,
        days: u32,
    ) -> Result<HistoricalMeasurements, ApiError> {
        self.get_result(
            "getting historical measurements",
            ApiVersion::V2,
            &format!("pods/{}/historicalMeasurements", segment(id)),
            single_param("days", days),
        )
        .await
    }
}
