//! The request pipeline for Sensibo API communication.
//!
//! This module provides the layer every endpoint binding is built on: it
//! builds authenticated URLs, sends requests through an injected transport
//! and classifies responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The pipeline (`build_url`, `execute` and the verb helpers)
//! - [`HttpRequest`]: An endpoint descriptor (method, version, path, query, body)
//! - [`HttpResponse`]: The status code and raw body read by a transport
//! - [`HttpMethod`]: Supported HTTP methods (GET, PUT, PATCH, POST, DELETE)
//! - [`HttpTransport`]: The transport capability injected into the pipeline
//! - [`ReqwestTransport`]: The default `reqwest`-backed transport
//! - [`FnTransport`]: A closure-backed transport for tests and adapters
//! - [`HttpError`]: Unified error type for pipeline failures
//!
//! # Example
//!
//! ```rust,ignore
//! use sensibo_api::{ApiKey, ApiVersion, SensiboConfig};
//! use sensibo_api::clients::{HttpClient, HttpMethod, HttpRequest, ReqwestTransport};
//!
//! let config = SensiboConfig::builder()
//!     .api_key(ApiKey::new("my-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config, ReqwestTransport::new());
//!
//! let request = HttpRequest::builder(HttpMethod::Get, ApiVersion::V2, "users/me/pods")
//!     .query_param("fields", "id,room")
//!     .build()
//!     .unwrap();
//!
//! let raw_body = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Only `200 OK` counts as success. Every call is a single attempt: the
//! pipeline does not retry, back off or impose a timeout. Callers needing
//! resilience wrap the client; callers needing a deadline wrap the returned
//! future (for example with `tokio::time::timeout`), and dropping the future
//! aborts the in-flight exchange.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, API_KEY_PARAM, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{FnTransport, HttpTransport, ReqwestTransport, TransportRequest};
