//! Raw HTTP response type shared by the REST and SOAP clients.

use std::collections::HashMap;

use crate::clients::errors::HttpError;

/// A raw HTTP response.
///
/// Header names are lower-cased; a header may carry several values. The body
/// is kept as text so the REST client can decode it as JSON and the SOAP
/// client as XML.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body decodes to an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidJson`] if the body is not valid JSON. The
    /// error carries `url` without its query, which holds the application id.
    pub fn json(&self, url: &str) -> Result<serde_json::Value, HttpError> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        serde_json::from_str(&self.body).map_err(|e| HttpError::InvalidJson {
            url: without_query(url),
            message: e.to_string(),
        })
    }
}

/// Drops the query and fragment of `url`.
fn without_query(url: &str) -> String {
    reqwest::Url::parse(url).map_or_else(
        |_| String::from("<invalid url>"),
        |mut url| {
            url.set_query(None);
            url.set_fragment(None);
            url.into()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, String::new());
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
        assert_eq!(response.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_empty_body_decodes_to_empty_object() {
        let response = HttpResponse::new(200, HashMap::new(), "  ".to_string());
        assert_eq!(response.json("http://x").unwrap(), json!({}));
    }

    #[test]
    fn test_invalid_json_error_omits_query() {
        let response = HttpResponse::new(200, HashMap::new(), "<html>".to_string());
        let error = response
            .json("https://app.rakuten.co.jp/services/api/IchibaItem/Search/20140222?applicationId=secret-app&keyword=tea")
            .unwrap_err();

        let HttpError::InvalidJson { ref url, .. } = error else {
            panic!("expected an invalid JSON error");
        };
        assert_eq!(
            url,
            "https://app.rakuten.co.jp/services/api/IchibaItem/Search/20140222"
        );
        assert!(!error.to_string().contains("secret-app"));
    }

    #[test]
    fn test_invalid_body_is_reported() {
        let response = HttpResponse::new(200, HashMap::new(), "<html>".to_string());
        assert!(matches!(
            response.json("http://x"),
            Err(HttpError::InvalidJson { .. })
        ));
    }
}
