//! Sensibo API version segments.
//!
//! Every endpoint lives under either `/api/v1/` or `/api/v2/`; the choice is
//! fixed per endpoint rather than per client.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Version segment of a Sensibo API endpoint.
///
/// # Example
///
/// ```rust
/// use sensibo_api::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(ApiVersion::V1.to_string(), "v1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// The original API, still used for timers and schedules.
    V1,
    /// The current API, used for devices, AC states and climate react.
    V2,
}

impl ApiVersion {
    /// Returns the path segment for this version (e.g. `"v2"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Returns the most recent API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
