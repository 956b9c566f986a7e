//! HTTP-specific error types for the Sensibo API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A response other than `200 OK`, or a transport
//!   failure that still produced a status line and body
//! - [`TransportError`]: The exchange could not be completed by the transport
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use sensibo_api::clients::HttpError;
//!
//! match http_client.get(ApiVersion::V2, "users/me/pods", params).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Error returned when a request does not end with `200 OK`.
///
/// A non-200 status and a transport failure that came with a response are
/// reported through this same shape. `cause` is `None` in the former case.
/// Its message is part of this error's message, so it is not repeated as
/// [`source`](std::error::Error::source).
///
/// # Example
///
/// ```rust
/// use sensibo_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 301,
///     message: String::new(),
///     cause: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "failed making request: Code: 301, Msg: , Err: <none>"
/// );
/// ```
#[derive(Debug, Error)]
#[error(
    "failed making request: Code: {code}, Msg: {message}, Err: {}",
    describe_cause(.cause)
)]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// The transport error reported alongside the response, if any.
    pub cause: Option<TransportError>,
}

#[allow(clippy::ref_option)]
fn describe_cause(cause: &Option<TransportError>) -> String {
    cause
        .as_ref()
        .map_or_else(|| "<none>".to_string(), ToString::to_string)
}

/// Error reported by an [`HttpTransport`](crate::clients::HttpTransport).
///
/// Covers connection failures, timeouts, aborted exchanges and body read
/// failures. A transport may attach the response it managed to read before
/// failing; the pipeline then reports the failure as an
/// [`HttpResponseError`] carrying that status code and body.
///
/// # Example
///
/// ```rust
/// use sensibo_api::clients::{HttpResponse, TransportError};
///
/// let error = TransportError::new("connection reset")
///     .with_response(HttpResponse::new(200, "partial"));
///
/// assert_eq!(error.to_string(), "connection reset");
/// assert_eq!(error.response().map(|r| r.code), Some(200));
/// ```
#[derive(Debug)]
pub struct TransportError {
    inner: Box<dyn StdError + Send + Sync>,
    response: Option<HttpResponse>,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// Displays as the wrapped error, so the chain continues below it.
impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl TransportError {
    /// Creates a transport error from any error value or message.
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            inner: error.into(),
            response: None,
        }
    }

    /// Attaches the response that was received before the failure.
    #[must_use]
    pub fn with_response(mut self, response: HttpResponse) -> Self {
        self.response = Some(response);
        self
    }

    /// Returns the response received before the failure, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Detaches the response received before the failure, if any.
    pub fn take_response(&mut self) -> Option<HttpResponse> {
        self.response.take()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent. With the typed endpoint bindings these
/// indicate a programming error rather than a runtime condition.
///
/// # Example
///
/// ```rust
/// use sensibo_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "POST".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method token is not one the API uses.
    #[error("Invalid Http method {method:?}.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// A PUT, PATCH or POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-200 response, or a transport failure that came with a response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The transport could not complete the exchange.
    #[error("failed making request: {0}")]
    Transport(TransportError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl From<TransportError> for HttpError {
    fn from(error: TransportError) -> Self {
        Self::Transport(error)
    }
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Transport(e) => e.response().map(|r| r.code),
            Self::InvalidRequest(_) => None,
        }
    }

    /// Returns the raw response body, if a response was received.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Response(e) => Some(e.message.as_str()),
            Self::Transport(e) => e.response().map(|r| r.body.as_str()),
            Self::InvalidRequest(_) => None,
        }
    }
}
