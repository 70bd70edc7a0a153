//! Configuration types for the Rakuten Web Service SDK.
//!
//! This module provides the configuration used to initialize a
//! [`RakutenWebService`](crate::RakutenWebService) client.
//!
//! # Overview
//!
//! - [`WebServiceConfig`]: credentials, base URLs and format settings
//! - [`WebServiceConfigBuilder`]: a builder for [`WebServiceConfig`]
//! - [`ApplicationId`], [`LicenseKey`], [`SecretService`]: validated credentials
//! - [`BaseUrl`]: a validated API base URL
//! - [`ApiVersion`], [`FormatVersion`]: request and response versions
//!
//! # Example
//!
//! ```rust
//! use rakuten_ws::{WebServiceConfig, ApplicationId};
//!
//! let config = WebServiceConfig::builder()
//!     .application_id(ApplicationId::new("my-app-id").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url().as_ref(), "https://app.rakuten.co.jp/services/api");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApplicationId, BaseUrl, LicenseKey, SecretService};
pub use version::{ApiVersion, FormatVersion};

use crate::error::ConfigError;

/// Default base URL of the public Rakuten Web Service REST APIs.
pub const DEFAULT_API_URL: &str = "https://app.rakuten.co.jp/services/api";

/// Default base URL of the RMS (merchant) SOAP services.
pub const DEFAULT_RMS_API_URL: &str = "https://api.rms.rakuten.co.jp/es/1.0";

/// Configuration for the Rakuten Web Service SDK.
///
/// All credentials are optional here. The application id is checked when a
/// REST request is built, and the license key and secret are checked when an
/// RMS call is prepared, so a client can be created for one API family
/// without holding credentials for the other.
///
/// # Thread Safety
///
/// `WebServiceConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::{WebServiceConfig, ApplicationId, LicenseKey, SecretService, FormatVersion};
///
/// let config = WebServiceConfig::builder()
///     .application_id(ApplicationId::new("app-id").unwrap())
///     .license_key(LicenseKey::new("license").unwrap())
///     .secret_service(SecretService::new("secret").unwrap())
///     .format_version(FormatVersion::V1)
///     .build()
///     .unwrap();
///
/// assert!(config.application_id().is_some());
/// assert_eq!(config.format_version(), FormatVersion::V1);
/// ```
#[derive(Clone, Debug)]
pub struct WebServiceConfig {
    application_id: Option<ApplicationId>,
    license_key: Option<LicenseKey>,
    secret_service: Option<SecretService>,
    api_url: BaseUrl,
    rms_api_url: BaseUrl,
    format_version: FormatVersion,
    user_agent_prefix: Option<String>,
}

impl WebServiceConfig {
    /// Creates a new builder for constructing a `WebServiceConfig`.
    #[must_use]
    pub fn builder() -> WebServiceConfigBuilder {
        WebServiceConfigBuilder::new()
    }

    /// Returns the application id, if configured.
    #[must_use]
    pub const fn application_id(&self) -> Option<&ApplicationId> {
        self.application_id.as_ref()
    }

    /// Returns the application id or the precondition error for REST calls.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApplicationId`] if no id is configured.
    pub fn require_application_id(&self) -> Result<&ApplicationId, ConfigError> {
        self.application_id
            .as_ref()
            .ok_or(ConfigError::MissingApplicationId)
    }

    /// Returns the RMS license key, if configured.
    #[must_use]
    pub const fn license_key(&self) -> Option<&LicenseKey> {
        self.license_key.as_ref()
    }

    /// Returns the RMS service secret, if configured.
    #[must_use]
    pub const fn secret_service(&self) -> Option<&SecretService> {
        self.secret_service.as_ref()
    }

    /// Returns the REST base URL.
    #[must_use]
    pub const fn api_url(&self) -> &BaseUrl {
        &self.api_url
    }

    /// Returns the RMS base URL.
    #[must_use]
    pub const fn rms_api_url(&self) -> &BaseUrl {
        &self.rms_api_url
    }

    /// Returns the response format version.
    #[must_use]
    pub const fn format_version(&self) -> FormatVersion {
        self.format_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WebServiceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebServiceConfig>();
};

/// Builder for constructing [`WebServiceConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `rms_api_url`: [`DEFAULT_RMS_API_URL`]
/// - `format_version`: [`FormatVersion::V2`]
/// - credentials and `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WebServiceConfigBuilder {
    application_id: Option<ApplicationId>,
    license_key: Option<LicenseKey>,
    secret_service: Option<SecretService>,
    api_url: Option<BaseUrl>,
    rms_api_url: Option<BaseUrl>,
    format_version: Option<FormatVersion>,
    user_agent_prefix: Option<String>,
}

impl WebServiceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application id used by REST calls.
    #[must_use]
    pub fn application_id(mut self, id: ApplicationId) -> Self {
        self.application_id = Some(id);
        self
    }

    /// Sets the RMS license key.
    #[must_use]
    pub fn license_key(mut self, key: LicenseKey) -> Self {
        self.license_key = Some(key);
        self
    }

    /// Sets the RMS service secret.
    #[must_use]
    pub fn secret_service(mut self, secret: SecretService) -> Self {
        self.secret_service = Some(secret);
        self
    }

    /// Overrides the REST base URL.
    #[must_use]
    pub fn api_url(mut self, url: BaseUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Overrides the RMS base URL.
    #[must_use]
    pub fn rms_api_url(mut self, url: BaseUrl) -> Self {
        self.rms_api_url = Some(url);
        self
    }

    /// Sets the response format version.
    #[must_use]
    pub const fn format_version(mut self, version: FormatVersion) -> Self {
        self.format_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebServiceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if a default base URL cannot be
    /// parsed. Credentials are never required at this point.
    pub fn build(self) -> Result<WebServiceConfig, ConfigError> {
        let api_url = match self.api_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_URL)?,
        };
        let rms_api_url = match self.rms_api_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_RMS_API_URL)?,
        };

        Ok(WebServiceConfig {
            application_id: self.application_id,
            license_key: self.license_key,
            secret_service: self.secret_service,
            api_url,
            rms_api_url,
            format_version: self.format_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
