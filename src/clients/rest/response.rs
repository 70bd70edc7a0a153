//! REST responses and page-by-page iteration.
//!
//! [`ApiResponse`] implements `Deref<Target = serde_json::Value>`, so the
//! decoded body can be indexed directly:
//!
//! ```rust,ignore
//! let response = ws.ichiba().endpoint("item")?.call("search", params).await?;
//!
//! for item in response["Items"].as_array().into_iter().flatten() {
//!     println!("{}", item["itemName"]);
//! }
//! ```
//!
//! # Pagination
//!
//! Search endpoints report a `pageCount`. [`ApiResponse::pages`] returns a
//! [`Pages`] cursor that re-issues the same request with the `page`
//! parameter set to each page in turn, through the same HTTP session:
//!
//! ```rust,ignore
//! let first = endpoint.call("search", params.with("page", 1)).await?;
//! let mut pages = first.pages(2);
//! while let Some(page) = pages.next().await {
//!     let page = page?;
//!     println!("{}", page["page"]);
//! }
//! ```

use std::ops::Deref;

use serde_json::Value;

use crate::clients::rest::request::set_query_param;
use crate::clients::{HttpClient, HttpError, HttpResponse, HttpResponseError};

/// A decoded REST response.
///
/// Non-2xx responses are returned as well: the Rakuten APIs describe
/// failures in the JSON body (`error`, `error_description`), which stays
/// readable. Use [`ApiResponse::error_for_status`] to turn them into an
/// error.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    http_client: HttpClient,
    url: String,
    code: u16,
    request_id: Option<String>,
    body: Value,
}

// Verify ApiResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiResponse>();
    assert_send_sync::<Pages>();
};

impl ApiResponse {
    /// Sends a GET request to `url` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on transport failure and
    /// [`HttpError::InvalidJson`] if the body cannot be decoded.
    pub async fn fetch(http_client: &HttpClient, url: &str) -> Result<Self, HttpError> {
        let response = http_client.get(url).await?;
        Self::from_http_response(http_client.clone(), url, &response)
    }

    fn from_http_response(
        http_client: HttpClient,
        url: &str,
        response: &HttpResponse,
    ) -> Result<Self, HttpError> {
        let body = response.json(url)?;

        if !response.is_ok() {
            let error = body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default();
            tracing::warn!(
                status = response.code,
                error,
                "Rakuten API returned a non-success status"
            );
        }

        Ok(Self {
            http_client,
            url: url.to_string(),
            code: response.code,
            request_id: response.request_id().map(String::from),
            body,
        })
    }

    /// Returns the URL the response was fetched from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.code
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response and returns the decoded body.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.body
    }

    /// Returns the `pageCount` advertised by the response.
    ///
    /// Accepts the count as a JSON number or a numeric string.
    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        match self.body.get("pageCount")? {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the `error` field of the body, if present.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// Returns the `error_description` field of the body, if present.
    #[must_use]
    pub fn error_description(&self) -> Option<&str> {
        self.body.get("error_description").and_then(Value::as_str)
    }

    /// Returns the response unchanged if the status is 2xx.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for any other status. Its message is a
    /// JSON object with the `error` and `error_description` fields of the
    /// body and, when the response carried an `X-Request-Id`, an
    /// `error_reference`.
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_ok() {
            return Ok(self);
        }

        Err(HttpError::Response(HttpResponseError {
            code: self.code,
            message: self.serialize_error(),
            error_reference: self.request_id.clone(),
        }))
    }

    fn serialize_error(&self) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = self.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = self.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = self.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }

        if let Some(request_id) = &self.request_id {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }

    /// Returns a cursor over pages `start..=page_count()`.
    ///
    /// Each page is fetched lazily with the `page` query parameter of this
    /// response's URL replaced. Pages are numbered from 1, so a `start` of 0
    /// begins at the first page. Without a `pageCount` in the body the
    /// cursor is empty.
    #[must_use]
    pub fn pages(&self, start: u32) -> Pages {
        Pages {
            http_client: self.http_client.clone(),
            url: self.url.clone(),
            next_page: start.max(1),
            page_count: self.page_count().unwrap_or(0),
        }
    }
}

impl Deref for ApiResponse {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

/// Lazy cursor over the pages of a paginated response.
///
/// Created by [`ApiResponse::pages`]. Each call to [`Pages::next`] issues
/// one request; a failed page is returned as an error and the cursor moves
/// on to the following page.
#[derive(Clone, Debug)]
pub struct Pages {
    http_client: HttpClient,
    url: String,
    next_page: u32,
    page_count: u32,
}

impl Pages {
    /// Fetches the next page, or returns `None` past the last page.
    pub async fn next(&mut self) -> Option<Result<ApiResponse, HttpError>> {
        if self.next_page > self.page_count {
            return None;
        }

        let page = self.next_page;
        let page_count = self.page_count;
        match page.checked_add(1) {
            Some(next) => self.next_page = next,
            // u32::MAX was the last page
            None => self.page_count = 0,
        }

        let url = match set_query_param(&self.url, "page", &page.to_string()) {
            Ok(url) => url,
            Err(e) => return Some(Err(e)),
        };
        tracing::debug!(page, page_count, "Fetching Rakuten API page");

        Some(ApiResponse::fetch(&self.http_client, &url).await)
    }

    /// Returns the number of pages not yet fetched.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        if self.next_page > self.page_count {
            0
        } else {
            (self.page_count - self.next_page).saturating_add(1)
        }
    }

    /// Returns the page count the cursor stops at.
    #[must_use]
    pub const fn page_count(&self) -> u32 {
        self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebServiceConfig;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(code: u16, body: Value, request_id: Option<&str>) -> ApiResponse {
        let config = WebServiceConfig::builder().build().unwrap();
        ApiResponse {
            http_client: HttpClient::new(&config),
            url: "https://example.com/IchibaItem/Search/20140222?applicationId=a&page=1"
                .to_string(),
            code,
            request_id: request_id.map(String::from),
            body,
        }
    }

    #[test]
    fn test_deref_exposes_body() {
        let response = response(200, json!({"count": 2, "Items": [{"itemName": "tea"}]}), None);
        assert_eq!(response["count"], 2);
        assert_eq!(response["Items"][0]["itemName"], "tea");
    }

    #[test]
    fn test_page_count_accepts_number_or_string() {
        assert_eq!(response(200, json!({"pageCount": 3}), None).page_count(), Some(3));
        assert_eq!(response(200, json!({"pageCount": "4"}), None).page_count(), Some(4));
        assert_eq!(response(200, json!({}), None).page_count(), None);
    }

    #[test]
    fn test_error_fields_are_exposed() {
        let response = response(
            400,
            json!({"error": "wrong_parameter", "error_description": "keyword is not valid"}),
            None,
        );
        assert!(!response.is_ok());
        assert_eq!(response.error(), Some("wrong_parameter"));
        assert_eq!(response.error_description(), Some("keyword is not valid"));
    }

    #[test]
    fn test_error_for_status_passes_success_through() {
        let response = response(200, json!({"count": 0}), None);
        assert!(response.error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_serializes_error_fields() {
        let response = response(
            404,
            json!({"error": "not_found", "error_description": "not found"}),
            Some("req-42"),
        );

        let Err(HttpError::Response(error)) = response.error_for_status() else {
            panic!("expected a response error");
        };
        assert_eq!(error.code, 404);
        assert_eq!(error.error_reference.as_deref(), Some("req-42"));

        let message: Value = serde_json::from_str(&error.message).unwrap();
        assert_eq!(message["error"], "not_found");
        assert_eq!(message["error_description"], "not found");
        assert_eq!(
            message["error_reference"],
            "If you report this error, please include this id: req-42."
        );
    }

    #[test]
    fn test_pages_range_is_inclusive() {
        let pages = response(200, json!({"pageCount": 3}), None).pages(2);
        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.remaining(), 2);
    }

    #[test]
    fn test_pages_start_at_first_page_and_saturate() {
        let pages = response(200, json!({"pageCount": 3}), None).pages(0);
        assert_eq!(pages.remaining(), 3);

        let pages = response(200, json!({"pageCount": u64::from(u32::MAX)}), None).pages(0);
        assert_eq!(pages.page_count(), u32::MAX);
        assert_eq!(pages.remaining(), u32::MAX);
    }

    #[test]
    fn test_pages_without_page_count_is_empty() {
        let pages = response(200, json!({}), None).pages(1);
        assert_eq!(pages.remaining(), 0);
    }

    #[tokio::test]
    async fn test_pages_past_end_returns_none_without_request() {
        let mut pages = response(200, json!({"pageCount": 1}), None).pages(2);
        assert!(pages.next().await.is_none());
    }

    #[test]
    fn test_from_http_response_keeps_error_body() {
        let config = WebServiceConfig::builder().build().unwrap();
        let raw = HttpResponse::new(
            400,
            HashMap::new(),
            r#"{"error": "wrong_parameter", "error_description": "page must be positive"}"#
                .to_string(),
        );

        let response =
            ApiResponse::from_http_response(HttpClient::new(&config), "http://x", &raw).unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.error(), Some("wrong_parameter"));
    }

    #[test]
    fn test_from_http_response_keeps_request_id() {
        let config = WebServiceConfig::builder().build().unwrap();
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc".to_string()]);
        let raw = HttpResponse::new(200, headers, r#"{"pageCount": 1}"#.to_string());

        let response =
            ApiResponse::from_http_response(HttpClient::new(&config), "http://x", &raw).unwrap();
        assert_eq!(response.request_id(), Some("abc"));
        assert_eq!(response.url(), "http://x");
        assert_eq!(response.status(), 200);
    }
}
