//! RMS SOAP client.

use serde_json::Value;

use crate::auth::{EsaKey, UserAuthModel};
use crate::clients::soap::envelope::{build_request, parse_response};
use crate::clients::soap::{SoapError, SoapService, INVENTORY, ORDER};
use crate::clients::{HttpClient, HttpError, HttpResponseError};
use crate::config::WebServiceConfig;

/// Entry point to the RMS merchant services.
///
/// Obtained from [`RakutenWebService::rms`](crate::RakutenWebService::rms).
#[derive(Clone, Copy, Debug)]
pub struct RmsService<'a> {
    config: &'a WebServiceConfig,
    http_client: &'a HttpClient,
}

impl<'a> RmsService<'a> {
    pub(crate) const fn new(config: &'a WebServiceConfig, http_client: &'a HttpClient) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// The RMS order API.
    #[must_use]
    pub fn order(&self) -> SoapClient<'a> {
        self.service(&ORDER)
    }

    /// The RMS inventory API.
    #[must_use]
    pub fn inventory(&self) -> SoapClient<'a> {
        self.service(&INVENTORY)
    }

    /// A client for any SOAP service descriptor.
    #[must_use]
    pub const fn service(&self, service: &'static SoapService) -> SoapClient<'a> {
        SoapClient {
            config: self.config,
            http_client: self.http_client,
            service,
        }
    }
}

/// Client for one RMS SOAP service.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
///
/// let order = ws.rms().order();
/// let result = order.call("getRequestId", json!({})).await?;
/// println!("request id: {}", result["requestId"]);
///
/// let result = order
///     .call("getResult", json!({"requestId": result["requestId"]}))
///     .await?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SoapClient<'a> {
    config: &'a WebServiceConfig,
    http_client: &'a HttpClient,
    service: &'static SoapService,
}

impl SoapClient<'_> {
    /// Returns the service descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static SoapService {
        self.service
    }

    /// Returns the endpoint URL of the service.
    #[must_use]
    pub fn url(&self) -> String {
        self.service.url(self.config.rms_api_url())
    }

    /// Calls a SOAP operation.
    ///
    /// The authentication block derived from the configured license key and
    /// service secret is sent as `arg0`; `params` are sent as `arg1` unless
    /// they are `null` or an empty object.
    ///
    /// # Errors
    ///
    /// - [`SoapError::Config`] if the license key or secret is missing; no
    ///   request is sent in that case
    /// - [`SoapError::Fault`] if the service answers with a SOAP fault
    /// - [`SoapError::Xml`] if the request cannot be encoded or the response
    ///   is not a SOAP envelope
    /// - [`SoapError::Http`] on transport failure, or a non-2xx status
    ///   without a fault body, even when the body is a valid envelope
    pub async fn call(&self, operation: &str, params: Value) -> Result<Value, SoapError> {
        let key = EsaKey::from_config(self.config)?;
        let auth = UserAuthModel::new(&key);
        let envelope = build_request(self.service, operation, &auth, &params)?;

        let url = self.url();
        tracing::debug!(
            service = self.service.name,
            operation,
            "Calling RMS SOAP operation"
        );

        let response = self
            .http_client
            .post(
                &url,
                envelope,
                &[
                    ("Content-Type", "text/xml; charset=utf-8"),
                    ("Accept", "text/xml"),
                    ("SOAPAction", "\"\""),
                ],
            )
            .await?;

        match parse_response(&response.body) {
            Err(SoapError::Fault { code, message }) => {
                tracing::warn!(
                    service = self.service.name,
                    operation,
                    status = response.code,
                    fault_code = %code,
                    "RMS SOAP operation returned a fault"
                );
                Err(SoapError::Fault { code, message })
            }
            _ if !response.is_ok() => Err(HttpError::Response(HttpResponseError {
                code: response.code,
                message: serde_json::json!({
                    "error": format!("RMS SOAP service returned HTTP {}", response.code),
                })
                .to_string(),
                error_reference: response.request_id().map(String::from),
            })
            .into()),
            result => result,
        }
    }
}
