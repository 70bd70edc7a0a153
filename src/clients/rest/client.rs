//! The Rakuten Web Service client.
//!
//! [`RakutenWebService`] resolves a service, endpoint and method from the
//! [catalog](crate::registry::catalog), builds the request URL and sends it
//! through one shared [`HttpClient`].

use crate::clients::rest::{ApiRequest, ApiResponse, QueryParams, RestError};
use crate::clients::soap::RmsService;
use crate::clients::HttpClient;
use crate::config::WebServiceConfig;
use crate::registry::{catalog, Endpoint, ServiceApi};

/// Client for the Rakuten Web Services.
///
/// Holds the configuration and a single [`HttpClient`], so every call made
/// through the same client, including follow-up page requests, reuses one
/// connection pool.
///
/// # Thread Safety
///
/// `RakutenWebService` is `Send + Sync`, making it safe to share across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use rakuten_ws::{ApplicationId, QueryParams, RakutenWebService, WebServiceConfig};
///
/// let config = WebServiceConfig::builder()
///     .application_id(ApplicationId::new("my-app-id")?)
///     .build()?;
/// let ws = RakutenWebService::new(config);
///
/// let response = ws
///     .ichiba()
///     .endpoint("item")?
///     .call("search", QueryParams::new().with("keyword", "green tea"))
///     .await?;
/// println!("{}", response["count"]);
/// ```
#[derive(Clone, Debug)]
pub struct RakutenWebService {
    config: WebServiceConfig,
    http_client: HttpClient,
}

// Verify RakutenWebService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RakutenWebService>();
};

impl RakutenWebService {
    /// Creates a client for the given configuration.
    ///
    /// Credentials are not checked here; each API family checks the ones it
    /// needs when a request is prepared.
    #[must_use]
    pub fn new(config: WebServiceConfig) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            config,
            http_client,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WebServiceConfig {
        &self.config
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Looks up a built-in service by name.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnknownApi`] if the catalog has no such service.
    pub fn api(&self, name: &str) -> Result<ServiceHandle<'_>, RestError> {
        catalog::find(name)
            .map(|service| self.service(service))
            .ok_or_else(|| RestError::UnknownApi {
                name: name.to_string(),
            })
    }

    /// Returns a handle for any service descriptor, including ones declared
    /// outside the built-in catalog.
    #[must_use]
    pub const fn service(&self, service: &'static ServiceApi) -> ServiceHandle<'_> {
        ServiceHandle { ws: self, service }
    }

    /// Rakuten Ichiba.
    #[must_use]
    pub fn ichiba(&self) -> ServiceHandle<'_> {
        self.service(&catalog::ICHIBA)
    }

    /// Rakuten Books.
    #[must_use]
    pub fn books(&self) -> ServiceHandle<'_> {
        self.service(&catalog::BOOKS)
    }

    /// Rakuten Travel.
    #[must_use]
    pub fn travel(&self) -> ServiceHandle<'_> {
        self.service(&catalog::TRAVEL)
    }

    /// Rakuten Auction.
    #[must_use]
    pub fn auction(&self) -> ServiceHandle<'_> {
        self.service(&catalog::AUCTION)
    }

    /// Rakuten Kobo.
    #[must_use]
    pub fn kobo(&self) -> ServiceHandle<'_> {
        self.service(&catalog::KOBO)
    }

    /// Rakuten GORA.
    #[must_use]
    pub fn gora(&self) -> ServiceHandle<'_> {
        self.service(&catalog::GORA)
    }

    /// Rakuten Recipe.
    #[must_use]
    pub fn recipe(&self) -> ServiceHandle<'_> {
        self.service(&catalog::RECIPE)
    }

    /// Miscellaneous affiliate APIs.
    #[must_use]
    pub fn other(&self) -> ServiceHandle<'_> {
        self.service(&catalog::OTHER)
    }

    /// The RMS merchant services.
    #[must_use]
    pub const fn rms(&self) -> RmsService<'_> {
        RmsService::new(&self.config, &self.http_client)
    }
}

/// A service bound to a client.
#[derive(Clone, Copy, Debug)]
pub struct ServiceHandle<'a> {
    ws: &'a RakutenWebService,
    service: &'static ServiceApi,
}

impl<'a> ServiceHandle<'a> {
    /// Returns the service descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ServiceApi {
        self.service
    }

    /// Looks up an endpoint of this service.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnknownEndpoint`] if the service has no such
    /// endpoint.
    pub fn endpoint(&self, name: &str) -> Result<EndpointHandle<'a>, RestError> {
        let endpoint = self
            .service
            .endpoint(name)
            .ok_or_else(|| RestError::UnknownEndpoint {
                service: self.service.name.to_string(),
                name: name.to_string(),
            })?;

        Ok(EndpointHandle {
            ws: self.ws,
            service: self.service,
            endpoint,
        })
    }
}

/// An endpoint bound to a client.
#[derive(Clone, Copy, Debug)]
pub struct EndpointHandle<'a> {
    ws: &'a RakutenWebService,
    service: &'static ServiceApi,
    endpoint: &'static Endpoint,
}

impl EndpointHandle<'_> {
    /// Returns the endpoint descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'static Endpoint {
        self.endpoint
    }

    /// Builds the request for a method without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnknownMethod`] if the endpoint has no such
    /// method.
    pub fn request(
        &self,
        method: &str,
        params: impl Into<QueryParams>,
    ) -> Result<ApiRequest, RestError> {
        let api_method = self
            .endpoint
            .method(method)
            .ok_or_else(|| RestError::UnknownMethod {
                endpoint: self.endpoint.name.to_string(),
                name: method.to_string(),
            })?;

        Ok(ApiRequest::new(
            self.endpoint.path_segment(self.service),
            api_method.alias(),
            self.service.version_for(api_method),
            params.into(),
        ))
    }

    /// Calls a method and returns the decoded response.
    ///
    /// Non-2xx responses are returned as [`ApiResponse`]s; see
    /// [`ApiResponse::error_for_status`].
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnknownMethod`] for an unknown method,
    /// [`RestError::Config`] when no application id is configured (before
    /// any network activity), and [`RestError::Http`] on transport or
    /// decoding failure.
    pub async fn call(
        &self,
        method: &str,
        params: impl Into<QueryParams>,
    ) -> Result<ApiResponse, RestError> {
        let request = self.request(method, params)?;
        let url = request.build_url(&self.ws.config)?;

        tracing::debug!(
            endpoint = request.endpoint(),
            method = request.method_name(),
            version = %request.api_version(),
            "Calling Rakuten API"
        );

        Ok(ApiResponse::fetch(&self.ws.http_client, &url).await?)
    }
}
