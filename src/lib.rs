//! # Sensibo API Rust Client
//!
//! A typed client for the Sensibo climate-control cloud API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SensiboConfig`] and [`SensiboConfigBuilder`]
//! - A request pipeline ([`HttpClient`]) that builds authenticated URLs,
//!   dispatches requests through an injected transport and classifies responses
//! - Typed endpoint bindings on [`SensiboClient`] for devices, AC states,
//!   timers, schedules and Climate React
//! - Typed records for every resource in [`models`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sensibo_api::{ApiKey, SensiboConfig};
//!
//! let config = SensiboConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://home.sensibo.com/api");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use sensibo_api::{ApiKey, SensiboClient, SensiboConfig};
//!
//! let config = SensiboConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = SensiboClient::new(&config);
//!
//! let devices = client.get_all_devices(&["id", "room", "acState"]).await?;
//! for device in &devices {
//!     if let Some(id) = &device.id {
//!         let timer = client.get_device_timer(id).await?;
//!         println!("{:?}: timer enabled = {}", device.room_name(), timer.is_enabled);
//!     }
//! }
//!
//! client.set_device_ac_state_property("abc", "on", false).await?;
//! ```
//!
//! ## Testing Without a Network
//!
//! The transport is a constructor argument, so tests can answer requests
//! with a closure:
//!
//! ```rust
//! use sensibo_api::{ApiKey, SensiboClient, SensiboConfig};
//! use sensibo_api::clients::{FnTransport, HttpResponse};
//!
//! let config = SensiboConfig::builder()
//!     .api_key(ApiKey::new("test").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let transport = FnTransport::new(|request| {
//!     assert!(request.url.contains("apiKey=test"));
//!     Ok(HttpResponse::new(200, r#"{"status":"success","result":[]}"#))
//! });
//!
//! let client = SensiboClient::with_transport(&config, transport);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and transport are passed explicitly
//! - **Fail fast**: configuration is validated when it is built
//! - **Single attempt**: no retries, backoff or internal timeouts
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, BaseUrl, SensiboConfig, SensiboConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use api::{ApiError, Envelope, SensiboClient};
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, HttpTransport, InvalidHttpRequestError, ReqwestTransport, TransportError,
};
