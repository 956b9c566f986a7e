//! Error type for endpoint bindings.
//!
//! Every binding reports failures as an [`ApiError`] naming the operation
//! that failed. The variant tells a failed call apart from a call that
//! succeeded but returned data that could not be decoded.
//!
//! # Example
//!
//! ```rust,ignore
//! use sensibo_api::ApiError;
//!
//! match client.get_device("abc", &["id", "room"]).await {
//!     Ok(device) => println!("{:?}", device.room_name()),
//!     Err(ApiError::Decode { operation, cause }) => {
//!         println!("{operation} returned unexpected data: {cause}");
//!     }
//!     Err(e) if e.status_code() == Some(404) => println!("no such device"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error returned by [`SensiboClient`](crate::api::SensiboClient) operations.
///
/// Display output is `failed <operation>: <cause>`, for example
/// `failed getting device: failed making request: Code: 404, Msg: , Err: <none>`.
/// The cause is part of the message and is not returned again from
/// [`source`](std::error::Error::source); match on the variant to reach it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be made or was answered with a non-200 status.
    #[error("failed {operation}: {cause}")]
    Request {
        /// The operation that failed (e.g., "getting device").
        operation: &'static str,
        /// The pipeline error.
        cause: HttpError,
    },

    /// The response was `200 OK` but its body did not match the expected shape.
    ///
    /// Covers malformed JSON, an envelope without `result` and type mismatches.
    #[error("failed {operation}: invalid response body: {cause}")]
    Decode {
        /// The operation that failed.
        operation: &'static str,
        /// The JSON error.
        cause: serde_json::Error,
    },

    /// The request payload could not be serialized, for example because a
    /// target temperature is NaN or infinite.
    #[error("failed {operation}: invalid request payload: {cause}")]
    Encode {
        /// The operation that failed.
        operation: &'static str,
        /// The JSON error.
        cause: serde_json::Error,
    },
}

impl ApiError {
    pub(crate) const fn request(operation: &'static str, cause: HttpError) -> Self {
        Self::Request { operation, cause }
    }

    pub(crate) const fn decode(operation: &'static str, cause: serde_json::Error) -> Self {
        Self::Decode { operation, cause }
    }

    pub(crate) const fn encode(operation: &'static str, cause: serde_json::Error) -> Self {
        Self::Encode { operation, cause }
    }

    /// Returns the name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Request { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Encode { operation, .. } => *operation,
        }
    }

    /// Returns `true` if the call succeeded but the body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { cause, .. } => cause.status_code(),
            Self::Decode { .. } | Self::Encode { .. } => None,
        }
    }

    /// Returns the raw response body of a failed request, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Request { cause, .. } => cause.response_body(),
            Self::Decode { .. } | Self::Encode { .. } => None,
        }
    }
}
