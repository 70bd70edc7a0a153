//! Declarative mapping from services to endpoints to remote operations.
//!
//! The Rakuten REST APIs all share one URL layout:
//!
//! ```text
//! {base_url}/{Endpoint}/{Method}/{version}?applicationId=...&formatVersion=2&...
//! ```
//!
//! This module describes that layout as `'static` data:
//!
//! - [`ApiMethod`]: a callable operation with an optional remote alias and
//!   version override
//! - [`Endpoint`]: a named group of methods sharing a path segment
//! - [`ServiceApi`]: a service (Ichiba, Books, Travel, ...) with a default
//!   API version
//! - [`catalog`]: the built-in Rakuten services
//!
//! All descriptor constructors are `const fn`, so additional services can be
//! declared as statics next to the built-in ones.
//!
//! # Example
//!
//! ```rust
//! use rakuten_ws::registry::{ApiMethod, Endpoint, ServiceApi};
//!
//! static ITEM_METHODS: &[ApiMethod] = &[
//!     ApiMethod::new("search"),
//!     ApiMethod::new("ranking").with_version("20120927"),
//! ];
//! static ITEM: Endpoint = Endpoint::new("item", ITEM_METHODS);
//! static ICHIBA_ENDPOINTS: &[&Endpoint] = &[&ITEM];
//! static ICHIBA: ServiceApi = ServiceApi::new("ichiba", "20140222", ICHIBA_ENDPOINTS);
//!
//! let endpoint = ICHIBA.endpoint("item").unwrap();
//! assert_eq!(endpoint.path_segment(&ICHIBA), "IchibaItem");
//!
//! let ranking = endpoint.method("ranking").unwrap();
//! assert_eq!(ranking.remote_name(), "Ranking");
//! assert_eq!(ICHIBA.version_for(ranking).as_str(), "20120927");
//! ```

mod casing;
pub mod catalog;

pub use casing::{camelize, clean_name};

use crate::config::ApiVersion;

/// A remote operation exposed by an [`Endpoint`].
///
/// `name` is the identifier callers use; `alias` is the remote operation name
/// and defaults to `name`. The remote path segment is the camel-cased alias.
/// Versions are `YYYYMMDD` strings, see [`ApiVersion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiMethod {
    /// Name used to look the method up.
    pub name: &'static str,
    /// Remote operation name, when it differs from `name`.
    pub alias: Option<&'static str>,
    /// Version override; falls back to the service version when `None`.
    pub api_version: Option<&'static str>,
}

impl ApiMethod {
    /// Declares a method whose remote name is derived from `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            api_version: None,
        }
    }

    /// Declares a method that is sent under a different remote name.
    #[must_use]
    pub const fn aliased(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias: Some(alias),
            api_version: None,
        }
    }

    /// Overrides the service version for this method.
    #[must_use]
    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Returns the alias, or the name when no alias is set.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self.alias {
            Some(alias) => alias,
            None => self.name,
        }
    }

    /// Returns the path segment sent for this method (e.g. `Search`).
    #[must_use]
    pub fn remote_name(&self) -> String {
        camelize(self.alias(), true)
    }
}

/// A named group of remote operations sharing one URL path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Name used to look the endpoint up.
    pub name: &'static str,
    /// Explicit path segment; derived from the service and endpoint names when `None`.
    pub api_endpoint: Option<&'static str>,
    /// Operations exposed by the endpoint.
    pub methods: &'static [ApiMethod],
}

impl Endpoint {
    /// Declares an endpoint whose path segment is derived from its name.
    #[must_use]
    pub const fn new(name: &'static str, methods: &'static [ApiMethod]) -> Self {
        Self {
            name,
            api_endpoint: None,
            methods,
        }
    }

    /// Declares an endpoint with an explicit path segment.
    #[must_use]
    pub const fn with_path(
        name: &'static str,
        api_endpoint: &'static str,
        methods: &'static [ApiMethod],
    ) -> Self {
        Self {
            name,
            api_endpoint: Some(api_endpoint),
            methods,
        }
    }

    /// Returns the path segment for this endpoint within `service`.
    ///
    /// Without an explicit segment this is `camelize("{service}_{endpoint}")`,
    /// e.g. `IchibaItem` for the `item` endpoint of the `ichiba` service.
    #[must_use]
    pub fn path_segment(&self, service: &ServiceApi) -> String {
        self.api_endpoint.map_or_else(
            || camelize(&format!("{}_{}", service.name, self.name), true),
            str::to_string,
        )
    }

    /// Finds a method by name, ignoring spelling differences.
    ///
    /// Both the method name and its alias are matched after
    /// [`clean_name`] normalization.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&'static ApiMethod> {
        let wanted = clean_name(name);
        self.methods
            .iter()
            .find(|m| clean_name(m.name) == wanted)
            .or_else(|| self.methods.iter().find(|m| clean_name(m.alias()) == wanted))
    }

    /// Returns the lookup names of all methods.
    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(|m| m.name)
    }
}

/// A Rakuten service: a set of endpoints sharing a default API version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceApi {
    /// Service name; also the prefix of derived endpoint path segments.
    pub name: &'static str,
    /// Version used by methods without an override.
    pub api_version: &'static str,
    /// Endpoints of this service.
    pub endpoints: &'static [&'static Endpoint],
}

impl ServiceApi {
    /// Declares a service.
    #[must_use]
    pub const fn new(
        name: &'static str,
        api_version: &'static str,
        endpoints: &'static [&'static Endpoint],
    ) -> Self {
        Self {
            name,
            api_version,
            endpoints,
        }
    }

    /// Finds an endpoint by name, ignoring spelling differences.
    #[must_use]
    pub fn endpoint(&self, name: &str) -> Option<&'static Endpoint> {
        let wanted = clean_name(name);
        self.endpoints
            .iter()
            .copied()
            .find(|e| clean_name(e.name) == wanted)
    }

    /// Returns the version a method is called with.
    #[must_use]
    pub const fn version_for(&self, method: &ApiMethod) -> ApiVersion {
        match method.api_version {
            Some(version) => ApiVersion::from_static(version),
            None => ApiVersion::from_static(self.api_version),
        }
    }

    /// Returns the lookup names of all endpoints.
    pub fn endpoint_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.endpoints.iter().map(|e| e.name)
    }
}

// Verify descriptor types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiMethod>();
    assert_send_sync::<Endpoint>();
    assert_send_sync::<ServiceApi>();
};
