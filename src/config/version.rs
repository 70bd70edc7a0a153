//! Rakuten API version definitions.
//!
//! Every Rakuten Web Service operation is versioned by its release date,
//! written as `YYYYMMDD` in the request path. This module provides
//! [`ApiVersion`] for those path versions and [`FormatVersion`] for the
//! response layout selected through the `formatVersion` query parameter.

use crate::error::ConfigError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A Rakuten API version such as `20140222`.
///
/// Versions are usually taken from the built-in catalog, where they are
/// declared as `'static` strings through [`ApiVersion::from_static`]. Versions
/// coming from user input go through [`ApiVersion::new`] or [`FromStr`], which
/// validate the `YYYYMMDD` shape.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::ApiVersion;
///
/// let version: ApiVersion = "20170706".parse().unwrap();
/// assert_eq!(version.to_string(), "20170706");
///
/// assert!("2017-07-06".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion(Cow<'static, str>);

impl ApiVersion {
    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] unless the version is
    /// exactly eight ASCII digits.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let trimmed = version.trim();
        if !Self::is_valid(trimmed) {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// Wraps a `'static` version string without validation.
    ///
    /// Intended for catalog declarations; the catalog tests check every
    /// declared version with [`ApiVersion::is_valid`].
    #[must_use]
    pub const fn from_static(version: &'static str) -> Self {
        Self(Cow::Borrowed(version))
    }

    /// Returns `true` if `version` has the `YYYYMMDD` shape.
    #[must_use]
    pub fn is_valid(version: &str) -> bool {
        version.len() == 8 && version.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Response layout requested through the `formatVersion` query parameter.
///
/// Version 2 flattens item arrays (`Items: [{...}]` instead of
/// `Items: [{"Item": {...}}]`) and is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// Original nested layout.
    V1,
    /// Flattened layout.
    #[default]
    V2,
}

impl FormatVersion {
    /// Returns the numeric value sent on the wire.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
