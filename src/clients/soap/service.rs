//! Static descriptors for the RMS SOAP services.

use crate::config::BaseUrl;

/// An RMS SOAP service.
///
/// `endpoint_path` is joined to the configured RMS base URL; `namespace` is
/// the target namespace of the service's operation elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoapService {
    /// Service name used in logs.
    pub name: &'static str,
    /// Path of the service endpoint below the RMS base URL.
    pub endpoint_path: &'static str,
    /// Target namespace of the operation elements.
    pub namespace: &'static str,
}

impl SoapService {
    /// Declares a service.
    #[must_use]
    pub const fn new(
        name: &'static str,
        endpoint_path: &'static str,
        namespace: &'static str,
    ) -> Self {
        Self {
            name,
            endpoint_path,
            namespace,
        }
    }

    /// Returns the endpoint URL below `base`.
    #[must_use]
    pub fn url(&self, base: &BaseUrl) -> String {
        base.join(&[self.endpoint_path])
    }
}

/// The RMS order API.
pub static ORDER: SoapService = SoapService::new(
    "order",
    "order/ws",
    "http://orderapi.rms.rakuten.co.jp/rms/mall/order/api/ws",
);

/// The RMS inventory API.
pub static INVENTORY: SoapService = SoapService::new(
    "inventory",
    "inventory/ws",
    "http://inventoryapi.rms.rakuten.co.jp/rms/mall/inventoryapi",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_url_joins_base() {
        let base = BaseUrl::new("https://api.rms.rakuten.co.jp/es/1.0/").unwrap();
        assert_eq!(
            ORDER.url(&base),
            "https://api.rms.rakuten.co.jp/es/1.0/order/ws"
        );
        assert_eq!(
            INVENTORY.url(&base),
            "https://api.rms.rakuten.co.jp/es/1.0/inventory/ws"
        );
    }
}
