//! # Rakuten Web Service SDK
//!
//! A Rust client for the Rakuten Web Services: the public REST APIs
//! (Ichiba, Books, Travel, Auction, Kobo, GORA, Recipe) and the RMS merchant
//! SOAP services.
//!
//! ## Overview
//!
//! This SDK provides:
//!
//! - Type-safe configuration via [`WebServiceConfig`] and [`WebServiceConfigBuilder`]
//! - Validated newtypes for credentials, base URLs and API versions
//! - A declarative catalog of services, endpoints and methods in [`registry`]
//! - REST URL construction with sorted, camel-cased query parameters
//! - Pass-through JSON responses with page-by-page iteration
//! - ESA key authentication and a SOAP client for the RMS services
//!
//! ## Quick Start
//!
//! ```rust
//! use rakuten_ws::{ApplicationId, QueryParams, RakutenWebService, WebServiceConfig};
//!
//! let config = WebServiceConfig::builder()
//!     .application_id(ApplicationId::new("your-application-id").unwrap())
//!     .build()
//!     .unwrap();
//! let ws = RakutenWebService::new(config);
//!
//! // Build a request without sending it
//! let request = ws
//!     .ichiba()
//!     .endpoint("item")
//!     .unwrap()
//!     .request("search", QueryParams::new().with("keyword", "matcha"))
//!     .unwrap();
//! let url = request.build_url(ws.config()).unwrap();
//! assert!(url.starts_with("https://app.rakuten.co.jp/services/api/IchibaItem/Search/20140222?"));
//! ```
//!
//! ## Calling the REST APIs
//!
//! ```rust,ignore
//! let books = ws.books().endpoint("book")?;
//! let response = books
//!     .call("search", QueryParams::new().with("title", "rust").with("page", 1))
//!     .await?;
//!
//! println!("{} results", response["count"]);
//!
//! // Fetch the remaining pages through the same session
//! let mut pages = response.pages(2);
//! while let Some(page) = pages.next().await {
//!     for item in page?["Items"].as_array().into_iter().flatten() {
//!         println!("{}", item["title"]);
//!     }
//! }
//! ```
//!
//! ## Calling the RMS services
//!
//! ```rust,ignore
//! use rakuten_ws::{LicenseKey, SecretService};
//! use serde_json::json;
//!
//! let config = WebServiceConfig::builder()
//!     .license_key(LicenseKey::new("license")?)
//!     .secret_service(SecretService::new("secret")?)
//!     .build()?;
//! let ws = RakutenWebService::new(config);
//!
//! let result = ws.rms().order().call("getRequestId", json!({})).await?;
//! println!("{}", result["requestId"]);
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`](https://docs.rs/tracing) events and installs no
//! subscriber. Credentials are never logged.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod registry;

// Re-export public types at crate root for convenience
pub use auth::{EsaKey, UserAuthModel};
pub use config::{
    ApiVersion, ApplicationId, BaseUrl, FormatVersion, LicenseKey, SecretService,
    WebServiceConfig, WebServiceConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError};

// Re-export REST and SOAP client types
pub use clients::rest::{
    ApiRequest, ApiResponse, EndpointHandle, Pages, QueryParams, RakutenWebService, RestError,
    ServiceHandle,
};
pub use clients::soap::{RmsService, SoapClient, SoapError};
