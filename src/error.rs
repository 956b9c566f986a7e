//! Error types for the Sensibo API client.
//!
//! This module contains the configuration and validation errors raised while
//! building a [`SensiboConfig`](crate::SensiboConfig). Errors raised while
//! talking to the API live in [`clients`](crate::clients) and [`api`](crate::api).
//!
//! # Example
//!
//! ```rust
//! use sensibo_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Generate one at https://home.sensibo.com/me/api.")]
    EmptyApiKey,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v1' or 'v2'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://home.sensibo.com/api').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
