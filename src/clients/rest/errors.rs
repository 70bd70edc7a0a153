//! REST-specific error types for the Rakuten Web Service SDK.
//!
//! - [`RestError::Config`]: a precondition failed before any request was sent
//!   (most often a missing application id)
//! - [`RestError::UnknownApi`], [`RestError::UnknownEndpoint`],
//!   [`RestError::UnknownMethod`]: a lookup in the service catalog failed
//! - [`RestError::Http`]: wraps transport and decoding errors
//!
//! # Example
//!
//! ```rust,ignore
//! use rakuten_ws::clients::rest::RestError;
//!
//! match ws.ichiba().endpoint("item")?.call("search", params).await {
//!     Ok(response) => println!("Found {} pages", response.page_count().unwrap_or(0)),
//!     Err(RestError::Config(e)) => println!("Not configured: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// ```rust
/// use rakuten_ws::clients::rest::RestError;
/// use rakuten_ws::ConfigError;
///
/// let error: RestError = ConfigError::MissingApplicationId.into();
/// assert_eq!(error.to_string(), "An 'application_id' must be provided");
///
/// let error = RestError::UnknownMethod {
///     endpoint: "item".to_string(),
///     name: "delete".to_string(),
/// };
/// assert!(error.to_string().contains("delete"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The configuration does not allow the request to be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No service with this name exists in the catalog.
    #[error("Unknown API: {name}")]
    UnknownApi {
        /// The requested service name.
        name: String,
    },

    /// The service has no endpoint with this name.
    #[error("Unknown endpoint '{name}' for API '{service}'")]
    UnknownEndpoint {
        /// The service that was searched.
        service: String,
        /// The requested endpoint name.
        name: String,
    },

    /// The endpoint has no method with this name.
    #[error("Unknown method '{name}' for endpoint '{endpoint}'")]
    UnknownMethod {
        /// The endpoint that was searched.
        endpoint: String,
        /// The requested method name.
        name: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
