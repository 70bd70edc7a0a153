//! REST request construction.
//!
//! An [`ApiRequest`] is the endpoint path segment, the remote method name,
//! the API version and the caller's parameters. [`ApiRequest::build_url`]
//! turns it into the final URL:
//!
//! ```text
//! {api_url}/{endpoint}/{Method}/{version}?{sorted, camel-cased query}
//! ```

use std::collections::{BTreeMap, HashMap};

use reqwest::Url;

use crate::clients::errors::HttpError;
use crate::config::{ApiVersion, WebServiceConfig};
use crate::error::ConfigError;
use crate::registry::camelize;

/// Caller-supplied query parameters.
///
/// Keys are stored as given and camel-cased when the URL is built, so
/// `item_code` and `itemCode` address the same remote parameter. Values are
/// stored as strings.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::clients::rest::QueryParams;
///
/// let params = QueryParams::new()
///     .with("keyword", "naruto")
///     .with("hits", 10);
/// assert_eq!(params.get("hits"), Some("10"));
///
/// let params: QueryParams = [("item_code", "book:17924463")].into();
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Adds a parameter and returns the set, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key` as given by the caller.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the parameters with camel-cased keys, sorted by key.
    #[must_use]
    pub fn camelized(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (camelize(k, false), v.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// A request to a Rakuten REST operation.
///
/// Requests are plain data: building the URL needs the configuration for the
/// base URL, application id and format version, and sending it is the job of
/// [`RakutenWebService`](crate::RakutenWebService).
///
/// # Example
///
/// ```rust
/// use rakuten_ws::clients::rest::{ApiRequest, QueryParams};
/// use rakuten_ws::{ApiVersion, ApplicationId, WebServiceConfig};
///
/// let config = WebServiceConfig::builder()
///     .application_id(ApplicationId::new("app-1").unwrap())
///     .build()
///     .unwrap();
///
/// let request = ApiRequest::new(
///     "IchibaItem",
///     "search",
///     ApiVersion::from_static("20140222"),
///     QueryParams::new().with("item_code", "book:17924463"),
/// );
///
/// assert_eq!(
///     request.build_url(&config).unwrap(),
///     "https://app.rakuten.co.jp/services/api/IchibaItem/Search/20140222\
///      ?applicationId=app-1&formatVersion=2&itemCode=book%3A17924463"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: String,
    method_name: String,
    api_version: ApiVersion,
    params: QueryParams,
}

impl ApiRequest {
    /// Creates a request.
    ///
    /// `endpoint` is used verbatim as the first path segment; `method_name`
    /// is camel-cased with an upper-case first letter.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        method_name: impl Into<String>,
        api_version: ApiVersion,
        params: QueryParams,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            method_name: method_name.into(),
            api_version,
            params,
        }
    }

    /// Returns the endpoint path segment.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the remote method name as given.
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the caller's parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the query parameters sent with the request, sorted by key.
    ///
    /// `applicationId` and `formatVersion` come from the configuration;
    /// caller parameters are camel-cased and override them on collision.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApplicationId`] if the configuration has
    /// no application id.
    pub fn query(&self, config: &WebServiceConfig) -> Result<BTreeMap<String, String>, ConfigError> {
        let application_id = config.require_application_id()?;

        let mut query = BTreeMap::new();
        query.insert(
            "applicationId".to_string(),
            application_id.as_ref().to_string(),
        );
        query.insert(
            "formatVersion".to_string(),
            config.format_version().to_string(),
        );
        query.extend(self.params.camelized());

        Ok(query)
    }

    /// Builds the request URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApplicationId`] if the configuration has
    /// no application id. The check runs before anything else.
    pub fn build_url(&self, config: &WebServiceConfig) -> Result<String, ConfigError> {
        let query = self.query(config)?;

        let method_segment = camelize(&self.method_name, true);
        let path = config.api_url().join(&[
            &self.endpoint,
            &method_segment,
            self.api_version.as_str(),
        ]);

        Ok(format!("{path}?{}", encode_query(&query)))
    }
}

/// Percent-encodes a sorted query map into `k=v&k=v` form.
fn encode_query(query: &BTreeMap<String, String>) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Returns `url` with the query parameter `key` set to `value`.
///
/// Existing occurrences of `key` are removed and the query is re-sorted by
/// key so the result stays deterministic.
///
/// # Errors
///
/// Returns [`HttpError::InvalidUrl`] if `url` cannot be parsed.
pub fn set_query_param(url: &str, key: &str, value: &str) -> Result<String, HttpError> {
    let mut url = Url::parse(url).map_err(|e| HttpError::InvalidUrl {
        message: e.to_string(),
    })?;

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.push((key.to_string(), value.to_string()));
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    url.query_pairs_mut().clear().extend_pairs(pairs);
    Ok(url.into())
}
