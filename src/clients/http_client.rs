//! HTTP transport shared by the REST and SOAP clients.
//!
//! [`HttpClient`] owns the single `reqwest::Client` a
//! [`RakutenWebService`](crate::RakutenWebService) reuses for every call, and
//! the default headers injected into each request.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::WebServiceConfig;

/// SDK version used in the User-Agent header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Rakuten APIs.
///
/// Cloning is cheap: clones share the underlying connection pool, which is
/// how paginated responses keep issuing requests through the session that
/// fetched the first page.
///
/// # Example
///
/// ```rust
/// use rakuten_ws::WebServiceConfig;
/// use rakuten_ws::clients::HttpClient;
///
/// let config = WebServiceConfig::builder().build().unwrap();
/// let client = HttpClient::new(&config);
///
/// assert_eq!(
///     client.default_headers().get("Accept"),
///     Some(&"application/json".to_string())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &WebServiceConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Rakuten WS Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to a fully built URL.
    ///
    /// Non-2xx responses are returned as-is; callers decide whether the status
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// body cannot be read.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        Self::send(req_builder).await
    }

    /// Sends a POST request with a text body.
    ///
    /// `extra_headers` are applied after the default headers and override
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// body cannot be read.
    pub async fn post(
        &self,
        url: &str,
        body: String,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let mut headers = self.default_headers.clone();
        for (key, value) in extra_headers {
            headers.insert((*key).to_string(), (*value).to_string());
        }

        let mut req_builder = self.client.post(url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        Self::send(req_builder.body(body)).await
    }

    async fn send(req_builder: reqwest::RequestBuilder) -> Result<HttpResponse, HttpError> {
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
