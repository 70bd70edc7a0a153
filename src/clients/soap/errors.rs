//! SOAP-specific error types for the RMS services.

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for RMS SOAP operations.
///
/// ```rust
/// use rakuten_ws::clients::soap::SoapError;
///
/// let error = SoapError::Fault {
///     code: "soap:Server".to_string(),
///     message: "Authentication failed".to_string(),
/// };
/// assert_eq!(error.to_string(), "SOAP fault soap:Server: Authentication failed");
/// ```
#[derive(Debug, Error)]
pub enum SoapError {
    /// The license key or service secret is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The service answered with a SOAP fault.
    #[error("SOAP fault {code}: {message}")]
    Fault {
        /// The `faultcode` of the fault.
        code: String,
        /// The `faultstring` of the fault.
        message: String,
    },

    /// The request could not be encoded or the response could not be parsed.
    #[error("Invalid SOAP message: {message}")]
    Xml {
        /// What went wrong.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl SoapError {
    pub(crate) fn xml(message: impl Into<String>) -> Self {
        Self::Xml {
            message: message.into(),
        }
    }
}
