//! HTTP request types for the Sensibo API client.
//!
//! This module provides the [`HttpMethod`] enum and the [`HttpRequest`]
//! endpoint descriptor with its builder.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::ApiVersion;

/// HTTP methods used by the Sensibo API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Reads a resource.
    Get,
    /// Replaces a resource (timers, climate react, schedule toggles).
    Put,
    /// Updates a single AC state property.
    Patch,
    /// Creates a resource (AC states, schedules).
    Post,
    /// Removes a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the method token as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method carry a JSON body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Put | Self::Patch | Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "POST" => Ok(Self::Post),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// An endpoint descriptor: one call against the Sensibo API.
///
/// Holds the API version segment, the path (identifiers already
/// interpolated), the query parameters and an optional JSON body. Use
/// [`HttpRequest::builder`] to construct one.
///
/// Query parameters are kept in a map with no defined order; the URL
/// builder sorts them by key before encoding.
///
/// # Example
///
/// ```rust
/// use sensibo_api::clients::{HttpRequest, HttpMethod};
/// use sensibo_api::ApiVersion;
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V2, "pods/abc/acStates")
///     .query_param("limit", "10")
///     .build()
///     .unwrap();
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, ApiVersion::V2, "pods/abc/smartmode")
///     .body(json!({"enabled": true}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The API version segment.
    pub version: ApiVersion,
    /// The path below the version segment.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append after the API key.
    pub query: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(
        method: HttpMethod,
        version: ApiVersion,
        path: impl Into<String>,
    ) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, version, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Put`, `Patch` or `Post` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.has_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    version: ApiVersion,
    path: String,
    body: Option<serde_json::Value>,
    query: HashMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, version: ApiVersion, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            version,
            path: path.into(),
            body: None,
            query: HashMap::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            version: self.version,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
