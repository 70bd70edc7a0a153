//! Error types for the Rakuten Web Service SDK.
//!
//! This module contains the configuration and precondition errors used
//! throughout the SDK.
//!
//! # Error Handling
//!
//! Newtype constructors return `Result<T, ConfigError>` to enable fail-fast
//! validation. Credentials are optional when the configuration is built; the
//! `Missing*` variants are returned later, when a request that needs them is
//! about to be built, and always before any network activity.
//!
//! # Example
//!
//! ```rust
//! use rakuten_ws::{ApplicationId, ConfigError};
//!
//! let result = ApplicationId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApplicationId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration and request preparation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Application id cannot be empty.
    #[error("Application id cannot be empty. Please provide a valid Rakuten application id.")]
    EmptyApplicationId,

    /// License key cannot be empty.
    #[error("License key cannot be empty. Please provide a valid RMS license key.")]
    EmptyLicenseKey,

    /// Service secret cannot be empty.
    #[error("Service secret cannot be empty. Please provide a valid RMS service secret.")]
    EmptySecretService,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYYMMDD' (e.g., '20140222').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://app.rakuten.co.jp/services/api').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A REST request was prepared without an application id.
    #[error("An 'application_id' must be provided")]
    MissingApplicationId,

    /// An RMS call was prepared without a license key.
    #[error("An 'license_key' and 'secret_service' must be provided (license key is missing)")]
    MissingLicenseKey,

    /// An RMS call was prepared without a service secret.
    #[error("An 'license_key' and 'secret_service' must be provided (service secret is missing)")]
    MissingSecretService,
}
