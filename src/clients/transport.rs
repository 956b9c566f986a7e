//! The transport seam between the request pipeline and the network.
//!
//! The pipeline never talks to a global HTTP client. It is handed an
//! [`HttpTransport`] at construction time and performs every exchange
//! through it, which keeps the pipeline testable without real network I/O.
//!
//! - [`ReqwestTransport`]: the default transport, backed by `reqwest`
//! - [`FnTransport`]: a transport backed by a closure, for tests and adapters

use std::future::Future;
use std::sync::Arc;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// A fully-built request handed to a transport.
///
/// The URL already carries the API key and the encoded query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The fully-qualified URL.
    pub url: String,
    /// Request headers.
    pub headers: Vec<(String, String)>,
    /// The serialized JSON body, if any.
    pub body: Option<String>,
}

impl TransportRequest {
    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Capability that performs one HTTP exchange.
///
/// Implementations must read the whole response body before returning and
/// release the underlying stream on every path. A transport may return an
/// error that still carries the response it read (see
/// [`TransportError::with_response`]); the pipeline treats that as a failed
/// request regardless of the status code.
///
/// Dropping the returned future must abort the exchange. This is how
/// caller-side cancellation and deadlines reach the network call.
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the response.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: HttpTransport> HttpTransport for Arc<T> {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}

/// The default transport, backed by a [`reqwest::Client`].
///
/// Cloning is cheap and clones share the same connection pool, so a single
/// transport can serve any number of clients.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use sensibo_api::clients::ReqwestTransport;
///
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// let transport = ReqwestTransport::from_client(http);
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default rustls-backed client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Wraps an existing reqwest client.
    ///
    /// Timeouts, proxies and pool settings of `client` apply unchanged.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req_builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();

        // `text` consumes the response, so the body stream is released here
        // whether or not reading succeeds.
        match res.text().await {
            Ok(body) => Ok(HttpResponse::new(code, body)),
            Err(e) => Err(TransportError::from(e).with_response(HttpResponse::new(code, ""))),
        }
    }
}

/// A transport backed by a closure.
///
/// The closure receives each request and returns the outcome directly.
/// This is the simplest way to exercise the pipeline without a network,
/// and to adapt a synchronous HTTP stack.
///
/// # Example
///
/// ```rust
/// use sensibo_api::clients::{FnTransport, HttpResponse};
///
/// let transport = FnTransport::new(|request| {
///     assert!(request.url.contains("apiKey="));
///     Ok(HttpResponse::new(200, "Success"))
/// });
/// ```
#[derive(Clone)]
pub struct FnTransport<F> {
    handler: F,
}

impl<F> FnTransport<F>
where
    F: Fn(&TransportRequest) -> Result<HttpResponse, TransportError> + Send + Sync,
{
    /// Creates a transport that answers every request with `handler`.
    pub const fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> std::fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}

impl<F> HttpTransport for FnTransport<F>
where
    F: Fn(&TransportRequest) -> Result<HttpResponse, TransportError> + Send + Sync,
{
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        let outcome = (self.handler)(&request);
        std::future::ready(outcome)
    }
}

// Verify transports are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
    assert_send_sync::<TransportRequest>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> TransportRequest {
        TransportRequest {
            method: HttpMethod::Get,
            url: "https://home.sensibo.com/api/v2/users/me/pods?apiKey=k".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = sample_request();
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Accept"), None);
    }

    #[tokio::test]
    async fn test_fn_transport_returns_handler_outcome() {
        let transport = FnTransport::new(|request| {
            Ok(HttpResponse::new(200, format!("{} {}", request.method, request.url)))
        });

        let response = transport.send(sample_request()).await.unwrap();
        assert_eq!(
            response.body,
            "GET https://home.sensibo.com/api/v2/users/me/pods?apiKey=k"
        );
    }

    #[tokio::test]
    async fn test_arc_transport_delegates() {
        let transport = Arc::new(FnTransport::new(|_| {
            Err(TransportError::new("unreachable host"))
        }));

        let error = transport.send(sample_request()).await.unwrap_err();
        assert_eq!(error.to_string(), "unreachable host");
    }

    #[tokio::test]
    async fn test_reqwest_transport_reports_connection_errors() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let transport = ReqwestTransport::new();
        let mut request = sample_request();
        request.url = "http://127.0.0.1:9/api/v2/users/me/pods?apiKey=k".to_string();

        let error = transport.send(request).await.unwrap_err();
        assert!(error.response().is_none());
    }
}
