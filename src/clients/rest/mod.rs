//! REST client for the public Rakuten Web Service APIs.
//!
//! - [`RakutenWebService`]: the client, with one accessor per catalog service
//! - [`ServiceHandle`], [`EndpointHandle`]: lookups bound to a client
//! - [`ApiRequest`], [`QueryParams`]: request construction
//! - [`ApiResponse`], [`Pages`]: decoded responses and pagination
//! - [`RestError`]: REST-specific errors
//!
//! # Example
//!
//! ```rust,ignore
//! use rakuten_ws::{ApplicationId, QueryParams, RakutenWebService, WebServiceConfig};
//!
//! let ws = RakutenWebService::new(
//!     WebServiceConfig::builder()
//!         .application_id(ApplicationId::new("my-app-id")?)
//!         .build()?,
//! );
//!
//! let books = ws.books().endpoint("book")?;
//! let response = books
//!     .call("search", QueryParams::new().with("title", "rust").with("page", 1))
//!     .await?;
//!
//! let mut pages = response.pages(2);
//! while let Some(page) = pages.next().await {
//!     println!("{}", page?["page"]);
//! }
//! ```

mod client;
mod errors;
mod request;
mod response;

pub use client::{EndpointHandle, RakutenWebService, ServiceHandle};
pub use errors::RestError;
pub use request::{set_query_param, ApiRequest, QueryParams};
pub use response::{ApiResponse, Pages};
