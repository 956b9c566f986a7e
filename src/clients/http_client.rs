//! The request pipeline shared by every Sensibo endpoint.
//!
//! This module provides the [`HttpClient`] type: it builds authenticated
//! URLs, dispatches each call through the injected transport and classifies
//! the outcome.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use crate::config::{ApiKey, ApiVersion, BaseUrl, SensiboConfig};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apiKey";

/// HTTP client for making requests to the Sensibo API.
///
/// The client handles:
/// - URL construction: base URL, version segment, path, API key and sorted query
/// - Default headers (`Content-Type`, `Accept`, `User-Agent`)
/// - Status classification: only `200 OK` is a success
///
/// It makes exactly one attempt per call: no retries, no backoff and no
/// timeout of its own. The only state is the API key and the transport
/// handle, both read-only after construction.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust,ignore
/// use sensibo_api::{SensiboConfig, ApiKey, ApiVersion};
/// use sensibo_api::clients::{HttpClient, ReqwestTransport};
///
/// let config = SensiboConfig::builder()
///     .api_key(ApiKey::new("my-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config, ReqwestTransport::new());
/// let body = client.get(ApiVersion::V2, "users/me/pods", Default::default()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient<T = ReqwestTransport> {
    /// The injected transport.
    transport: T,
    /// Credential appended to every URL.
    api_key: ApiKey,
    /// API root (e.g., `https://home.sensibo.com/api`).
    base_url: BaseUrl,
    /// Headers sent with every request.
    default_headers: Vec<(String, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl<T: HttpTransport> HttpClient<T> {
    /// Creates a new pipeline over `transport`.
    #[must_use]
    pub fn new(config: &SensiboConfig, transport: T) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Sensibo API Library v{SDK_VERSION} | Rust");

        let default_headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "*/*".to_string()),
            ("User-Agent".to_string(), user_agent),
        ];

        Self {
            transport,
            api_key: config.api_key().clone(),
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the injected transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the full URL for an endpoint.
    ///
    /// The result is `<base>/<version>/<path>?apiKey=<key>` followed by every
    /// entry of `params` sorted by key. Keys and values are percent-encoded.
    /// Two calls with the same parameters produce the same URL regardless of
    /// map iteration order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut params = HashMap::new();
    /// params.insert("limit".to_string(), "5".to_string());
    ///
    /// assert_eq!(
    ///     client.build_url(ApiVersion::V2, "pods/abc/acStates", &params),
    ///     "https://home.sensibo.com/api/v2/pods/abc/acStates?apiKey=key&limit=5"
    /// );
    /// ```
    #[must_use]
    pub fn build_url(
        &self,
        version: ApiVersion,
        path: &str,
        params: &HashMap<String, String>,
    ) -> String {
        let path = path.trim_start_matches('/');
        let mut url = format!(
            "{}/{}/{}?{}={}",
            self.base_url,
            version,
            path,
            API_KEY_PARAM,
            urlencoding::encode(self.api_key.as_ref())
        );

        let mut keys: Vec<&String> = params.keys().collect();
        keys.sort();

        for key in keys {
            url.push('&');
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(&params[key]));
        }

        url
    }

    /// Performs a single HTTP exchange and classifies the outcome.
    ///
    /// Returns the raw response body when the status is `200 OK`. The body
    /// is not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] if the status is anything other than
    /// 200, or if the transport failed after receiving a response (the
    /// status code and body are kept either way).
    /// Returns [`HttpError::Transport`] if no response was received at all.
    pub async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<String, HttpError> {
        let request = TransportRequest {
            method,
            url: url.to_string(),
            headers: self.default_headers.clone(),
            body,
        };

        match self.transport.send(request).await {
            Ok(response) if response.is_ok() => {
                tracing::trace!(bytes = response.body.len(), "Sensibo request succeeded");
                Ok(response.body)
            }
            Ok(response) => {
                tracing::debug!(
                    code = response.code,
                    %method,
                    "Sensibo request returned a non-200 status"
                );
                Err(HttpError::Response(HttpResponseError {
                    code: response.code,
                    message: response.body,
                    cause: None,
                }))
            }
            Err(mut error) => match error.take_response() {
                Some(response) => Err(HttpError::Response(HttpResponseError {
                    code: response.code,
                    message: response.body,
                    cause: Some(error),
                })),
                None => Err(HttpError::Transport(error)),
            },
        }
    }

    /// Sends an [`HttpRequest`] descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the descriptor fails
    /// validation, otherwise anything [`execute`](Self::execute) returns.
    pub async fn request(&self, request: HttpRequest) -> Result<String, HttpError> {
        request.verify()?;

        tracing::debug!(
            method = %request.http_method,
            version = %request.version,
            path = %request.path,
            "Sending Sensibo request"
        );

        // The URL is never logged: it carries the API key.
        let url = self.build_url(request.version, &request.path, &request.query);
        let body = request.body.as_ref().map(ToString::to_string);

        self.execute(request.http_method, &url, body).await
    }

    /// Sends a GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get(
        &self,
        version: ApiVersion,
        path: &str,
        params: HashMap<String, String>,
    ) -> Result<String, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, version, path)
            .query(params)
            .build()?;
        self.request(request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn put(
        &self,
        version: ApiVersion,
        path: &str,
        body: serde_json::Value,
    ) -> Result<String, HttpError> {
        self.send_with_body(HttpMethod::Put, version, path, body)
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn patch(
        &self,
        version: ApiVersion,
        path: &str,
        body: serde_json::Value,
    ) -> Result<String, HttpError> {
        self.send_with_body(HttpMethod::Patch, version, path, body)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post(
        &self,
        version: ApiVersion,
        path: &str,
        body: serde_json::Value,
    ) -> Result<String, HttpError> {
        self.send_with_body(HttpMethod::Post, version, path, body)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn delete(&self, version: ApiVersion, path: &str) -> Result<String, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, version, path).build()?;
        self.request(request).await
    }

    async fn send_with_body(
        &self,
        method: HttpMethod,
        version: ApiVersion,
        path: &str,
        body: serde_json::Value,
    ) -> Result<String, HttpError> {
        let request = HttpRequest::builder(method, version, path)
            .body(body)
            .build()?;
        self.request(request).await
    }
}
