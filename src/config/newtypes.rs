//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Rakuten application id.
///
/// The application id is the public key sent as `applicationId` on every
/// REST call.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::ApplicationId;
///
/// let id = ApplicationId::new("1234567890").unwrap();
/// assert_eq!(id.as_ref(), "1234567890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new validated application id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApplicationId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyApplicationId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated RMS license key.
///
/// The `Debug` implementation masks the value.
///
/// ```rust
/// use rakuten_ws::LicenseKey;
///
/// let key = LicenseKey::new("SL000000_abcdef").unwrap();
/// assert_eq!(format!("{:?}", key), "LicenseKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// Creates a new validated license key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLicenseKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyLicenseKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for LicenseKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LicenseKey(*****)")
    }
}

/// A validated RMS service secret.
///
/// The `Debug` implementation masks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretService(String);

impl SecretService {
    /// Creates a new validated service secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretService`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecretService);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for SecretService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretService(*****)")
    }
}

/// A validated base URL for an API family.
///
/// The URL must have an alphabetic scheme and a non-empty host. Trailing
/// slashes are removed so path segments can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::BaseUrl;
///
/// let url = BaseUrl::new("https://app.rakuten.co.jp/services/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://app.rakuten.co.jp/services/api");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "app.rakuten.co.jp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host,
    /// or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if url.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends path segments to the base URL, skipping empty ones.
    ///
    /// ```rust
    /// use rakuten_ws::BaseUrl;
    ///
    /// let url = BaseUrl::new("https://example.com/api").unwrap();
    /// assert_eq!(
    ///     url.join(&["IchibaItem", "Search", "20140222"]),
    ///     "https://example.com/api/IchibaItem/Search/20140222"
    /// );
    /// ```
    #[must_use]
    pub fn join(&self, segments: &[&str]) -> String {
        let mut joined = self.url.clone();
        for segment in segments {
            let segment = segment.trim_matches('/');
            if segment.is_empty() {
                continue;
            }
            joined.push('/');
            joined.push_str(segment);
        }
        joined
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
