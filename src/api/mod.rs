//! Endpoint bindings for the Sensibo API.
//!
//! [`SensiboClient`] exposes one method per operation of the API. Each method
//! fixes the API version, path template and verb, then hands the call to the
//! request pipeline ([`HttpClient`]).
//!
//! # Overview
//!
//! - Read operations unwrap the `{status, result}` [`Envelope`] and decode
//!   `result` into a typed record from [`crate::models`].
//! - Write and delete operations return the raw response body unchanged.
//! - Every failure is an [`ApiError`] naming the operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use sensibo_api::{ApiKey, SensiboClient, SensiboConfig};
//! use sensibo_api::models::ACStateData;
//!
//! let config = SensiboConfig::builder()
//!     .api_key(ApiKey::new("my-key")?)
//!     .build()?;
//! let client = SensiboClient::new(&config);
//!
//! for device in client.get_all_devices(&["id", "room", "acState"]).await? {
//!     println!("{:?} on={}", device.room_name(), device.is_on());
//! }
//!
//! let state = ACStateData { on: false, ..Default::default() };
//! client.set_device_ac_state("abc", &state).await?;
//! ```
//!
//! # Concurrency
//!
//! Methods take `&self` and hold no state beyond the API key and the
//! transport, so one client can serve any number of concurrent calls. Wrap
//! it in an `Arc` to share it across tasks.

mod ac_states;
mod climate_react;
mod devices;
mod envelope;
mod errors;
mod schedules;
mod timers;

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpClient, HttpTransport, ReqwestTransport};
use crate::config::{ApiVersion, SensiboConfig};

pub use ac_states::{SetACStatePayload, SetACStatePropertyPayload};
pub use climate_react::ToggleClimateReactPayload;
pub use envelope::Envelope;
pub use errors::ApiError;
pub use schedules::{CreateDeviceSchedulePayload, ToggleSchedulePayload};
pub use timers::SetDeviceTimerPayload;

/// Typed client for the Sensibo API.
///
/// # Thread Safety
///
/// `SensiboClient` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust
/// use sensibo_api::{ApiKey, SensiboClient, SensiboConfig};
/// use sensibo_api::clients::{FnTransport, HttpResponse};
///
/// let config = SensiboConfig::builder()
///     .api_key(ApiKey::new("my-key").unwrap())
///     .build()
///     .unwrap();
///
/// let transport = FnTransport::new(|_| Ok(HttpResponse::new(200, "Success")));
/// let client = SensiboClient::with_transport(&config, transport);
/// ```
#[derive(Debug)]
pub struct SensiboClient<T = ReqwestTransport> {
    http: HttpClient<T>,
}

// Verify SensiboClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SensiboClient>();
};

impl SensiboClient {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created (see
    /// [`ReqwestTransport::new`]).
    #[must_use]
    pub fn new(config: &SensiboConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> SensiboClient<T> {
    /// Creates a client over the given transport.
    #[must_use]
    pub fn with_transport(config: &SensiboConfig, transport: T) -> Self {
        Self {
            http: HttpClient::new(config, transport),
        }
    }

    /// Returns the underlying request pipeline.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient<T> {
        &self.http
    }

    /// GETs `path` and decodes the envelope's `result`.
    async fn get_result<R: DeserializeOwned>(
        &self,
        operation: &'static str,
        version: ApiVersion,
        path: &str,
        params: HashMap<String, String>,
    ) -> Result<R, ApiError> {
        let body = self
            .http
            .get(version, path, params)
            .await
            .map_err(|e| ApiError::request(operation, e))?;

        envelope::decode_result(&body).map_err(|e| ApiError::decode(operation, e))
    }
}

/// Serializes a write payload.
fn encode<P: Serialize>(operation: &'static str, payload: &P) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::encode(operation, e))
}

/// Percent-encodes an identifier for use as one path segment.
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

fn single_param(key: &str, value: impl ToString) -> HashMap<String, String> {
    HashMap::from([(key.to_string(), value.to_string())])
}


#[cfg(test)]
mod tests {
    use super::test_support::{config, recording_client};
    use super::*;
    use crate::clients::{FnTransport, HttpResponse, TransportError, TransportRequest};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll};
    use std::time::Duration;

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
    }

    #[tokio::test]
    async fn test_concurrent_reads_do_not_interfere() {
        let transport = FnTransport::new(|request: &TransportRequest| {
            let id = if request.url.contains("/pods/first?") {
                "first"
            } else {
                "second"
            };
            Ok(HttpResponse::new(
                200,
                format!(r#"{{"status":"success","result":{{"id":"{id}"}}}}"#),
            ))
        });
        let client = Arc::new(SensiboClient::with_transport(&config(), transport));

        let a = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_device("first", &["id"]).await })
        };
        let b = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_device("second", &["id"]).await })
        };
        let (a, b) = tokio::join!(a, b);

        assert_eq!(a.unwrap().unwrap().id.as_deref(), Some("first"));
        assert_eq!(b.unwrap().unwrap().id.as_deref(), Some("second"));
    }

    /// A transport that never completes and records when its call is dropped.
    struct StallingTransport {
        dropped: Arc<AtomicBool>,
    }

    struct Stall {
        dropped: Arc<AtomicBool>,
    }

    impl Future for Stall {
        type Output = Result<HttpResponse, TransportError>;

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
            Poll::Pending
        }
    }

    impl Drop for Stall {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    impl HttpTransport for StallingTransport {
        fn send(
            &self,
            _request: TransportRequest,
        ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
            Stall {
                dropped: Arc::clone(&self.dropped),
            }
        }
    }

    #[tokio::test]
    async fn test_caller_deadline_aborts_in_flight_call() {
        let dropped = Arc::new(AtomicBool::new(false));
        let client = SensiboClient::with_transport(
            &config(),
            StallingTransport {
                dropped: Arc::clone(&dropped),
            },
        );

        let outcome =
            tokio::time::timeout(Duration::from_millis(20), client.get_device_timer("abc")).await;

        assert!(outcome.is_err());
        assert!(dropped.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_read_reports_decode_error_separately() {
        let (client, _) = recording_client(200, "Success");

        let error = client.get_device_timer("abc").await.unwrap_err();

        assert!(error.is_decode());
        assert_eq!(error.operation(), "getting timer");
    }

    #[tokio::test]
    async fn test_read_reports_http_error() {
        let (client, _) = recording_client(403, r#"{"reason":"forbidden"}"#);

        let error = client.get_device_schedules("abc").await.unwrap_err();

        assert!(!error.is_decode());
        assert_eq!(error.status_code(), Some(403));
        assert_eq!(error.response_body(), Some(r#"{"reason":"forbidden"}"#));
        assert_eq!(
            error.to_string(),
            r#"failed getting schedules: failed making request: Code: 403, Msg: {"reason":"forbidden"}, Err: <none>"#
        );
        assert!(std::error::Error::source(&error).is_none());
    }

    #[test]
    fn test_client_exposes_pipeline() {
        let (client, _) = recording_client(200, "");
        assert_eq!(
            client.http_client().base_url().as_ref(),
            "https://home.sensibo.com/api"
        );
    }
}
