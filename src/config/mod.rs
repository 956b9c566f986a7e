//! Configuration types for the Sensibo API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SensiboConfig`]: The configuration struct holding all client settings
//! - [`SensiboConfigBuilder`]: A builder for constructing [`SensiboConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API root URL
//! - [`ApiVersion`]: The version segment of an endpoint
//!
//! # Example
//!
//! ```rust
//! use sensibo_api::{SensiboConfig, ApiKey};
//!
//! let config = SensiboConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://home.sensibo.com/api");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Sensibo API client.
///
/// Immutable once built. `SensiboConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use sensibo_api::{SensiboConfig, ApiKey, BaseUrl};
///
/// let config = SensiboConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .base_url(BaseUrl::new("http://localhost:9000/api").unwrap())
///     .user_agent_prefix("thermostat-bridge/0.3")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("thermostat-bridge/0.3"));
/// ```
#[derive(Clone, Debug)]
pub struct SensiboConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl SensiboConfig {
    /// Creates a new builder for constructing a `SensiboConfig`.
    #[must_use]
    pub fn builder() -> SensiboConfigBuilder {
        SensiboConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SensiboConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SensiboConfig>();
};

/// Builder for constructing [`SensiboConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SensiboConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl SensiboConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API root URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SensiboConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<SensiboConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(SensiboConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
