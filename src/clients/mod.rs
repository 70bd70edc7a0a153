//! HTTP clients for the Rakuten Web Services.
//!
//! - [`HttpClient`]: shared async transport with default headers
//! - [`HttpResponse`]: a raw response
//! - [`HttpError`], [`HttpResponseError`]: transport errors
//! - [`rest`]: the public REST APIs (Ichiba, Books, Travel, ...)
//! - [`soap`]: the RMS merchant SOAP services
//!
//! No retries are performed: a failed request surfaces as an error
//! immediately.

mod errors;
mod http_client;
mod http_response;
pub mod rest;
pub mod soap;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
