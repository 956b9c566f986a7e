//! HTTP response type for the Sensibo API client.

/// A response as read by an [`HttpTransport`](crate::clients::HttpTransport).
///
/// The body is the full response text, undecoded. Decoding is left to the
/// endpoint bindings.
///
/// # Example
///
/// ```rust
/// use sensibo_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, "Success");
/// assert!(response.is_ok());
/// assert_eq!(response.body, "Success");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Returns `true` if the status is exactly `200 OK`.
    ///
    /// The Sensibo API answers every successful call with 200; any other
    /// status, including other 2xx codes and redirects, is a failure.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }
}
