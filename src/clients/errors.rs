//! HTTP-specific error types for the Rakuten Web Service SDK.
//!
//! - [`HttpResponseError`]: a non-2xx response, raised on request through
//!   [`ApiResponse::error_for_status`](crate::clients::rest::ApiResponse::error_for_status)
//! - [`HttpError`]: unified error type for transport and decoding failures
//!
//! # Example
//!
//! ```rust,ignore
//! use rakuten_ws::clients::HttpError;
//!
//! match response.error_for_status() {
//!     Ok(response) => println!("Items: {}", response["Items"]),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("Transport error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// The message is a JSON object holding the `error` and `error_description`
/// fields of the response, plus an `error_reference` when the response
/// carried an `X-Request-Id` header.
///
/// ```rust
/// use rakuten_ws::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     message: r#"{"error":"wrong_parameter"}"#.to_string(),
///     error_reference: None,
/// };
/// assert_eq!(error.to_string(), r#"{"error":"wrong_parameter"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body was not valid JSON.
    #[error("Invalid JSON response from {url}: {message}")]
    InvalidJson {
        /// The request URL, without its query.
        url: String,
        /// The decoder message.
        message: String,
    },

    /// A request URL could not be parsed.
    #[error("Invalid request URL: {message}")]
    InvalidUrl {
        /// The parser message.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
