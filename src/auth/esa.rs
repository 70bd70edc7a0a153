//! ESA key derivation for the RMS services.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::config::{LicenseKey, SecretService, WebServiceConfig};
use crate::error::ConfigError;

const ESA_PREFIX: &str = "ESA ";

/// The ESA authentication token for the RMS services.
///
/// The token is `"ESA "` followed by the base64 encoding of
/// `"{secret}:{license}"`. It is sent as `authKey` in the SOAP
/// authentication block.
///
/// The `Debug` implementation masks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct EsaKey(String);

impl EsaKey {
    /// Derives the ESA key from a license key and service secret.
    #[must_use]
    pub fn new(license_key: &LicenseKey, secret_service: &SecretService) -> Self {
        let raw = format!("{}:{}", secret_service.as_ref(), license_key.as_ref());
        Self(format!("{ESA_PREFIX}{}", STANDARD.encode(raw)))
    }

    /// Derives the ESA key from the configured RMS credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingLicenseKey`] or
    /// [`ConfigError::MissingSecretService`] when either credential is absent.
    pub fn from_config(config: &WebServiceConfig) -> Result<Self, ConfigError> {
        let license_key = config
            .license_key()
            .ok_or(ConfigError::MissingLicenseKey)?;
        let secret_service = config
            .secret_service()
            .ok_or(ConfigError::MissingSecretService)?;
        Ok(Self::new(license_key, secret_service))
    }
}

impl AsRef<str> for EsaKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EsaKey(*****)")
    }
}

/// Authentication block sent as `arg0` of every RMS SOAP operation.
///
/// Serializes to `{"authKey": ..., "shopUrl": "", "userName": ""}`. The
/// `Debug` implementation masks the key.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthModel {
    /// The ESA key.
    pub auth_key: String,
    /// The shop URL; left empty, the ESA key identifies the shop.
    pub shop_url: String,
    /// The RMS user name; left empty, the ESA key identifies the user.
    pub user_name: String,
}

impl UserAuthModel {
    /// Creates an authentication block for the given ESA key.
    #[must_use]
    pub fn new(key: &EsaKey) -> Self {
        Self {
            auth_key: key.as_ref().to_string(),
            shop_url: String::new(),
            user_name: String::new(),
        }
    }

    /// Builds the authentication block from the configured RMS credentials.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`EsaKey::from_config`].
    pub fn from_config(config: &WebServiceConfig) -> Result<Self, ConfigError> {
        EsaKey::from_config(config).map(|key| Self::new(&key))
    }
}

impl fmt::Debug for UserAuthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAuthModel")
            .field("auth_key", &"*****")
            .field("shop_url", &self.shop_url)
            .field("user_name", &self.user_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rms_config(license: Option<&str>, secret: Option<&str>) -> WebServiceConfig {
        let mut builder = WebServiceConfig::builder();
        if let Some(license) = license {
            builder = builder.license_key(LicenseKey::new(license).unwrap());
        }
        if let Some(secret) = secret {
            builder = builder.secret_service(SecretService::new(secret).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_esa_key_encodes_secret_then_license() {
        let key = EsaKey::from_config(&rms_config(Some("my-license"), Some("my-secret"))).unwrap();
        assert_eq!(key.as_ref(), "ESA bXktc2VjcmV0Om15LWxpY2Vuc2U=");
    }

    #[test]
    fn test_esa_key_requires_license_key() {
        let result = EsaKey::from_config(&rms_config(None, Some("secret")));
        assert!(matches!(result, Err(ConfigError::MissingLicenseKey)));
    }

    #[test]
    fn test_esa_key_requires_secret_service() {
        let result = EsaKey::from_config(&rms_config(Some("license"), None));
        assert!(matches!(result, Err(ConfigError::MissingSecretService)));
    }

    #[test]
    fn test_esa_key_masks_value_in_debug() {
        let key = EsaKey::from_config(&rms_config(Some("license"), Some("secret"))).unwrap();
        assert_eq!(format!("{key:?}"), "EsaKey(*****)");
    }

    #[test]
    fn test_user_auth_model_serializes_with_camel_case_fields() {
        let model = UserAuthModel::from_config(&rms_config(Some("license"), Some("secret"))).unwrap();
        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(
            value,
            json!({
                "authKey": "ESA c2VjcmV0OmxpY2Vuc2U=",
                "shopUrl": "",
                "userName": ""
            })
        );
    }

    #[test]
    fn test_user_auth_model_masks_key_in_debug() {
        let model = UserAuthModel::from_config(&rms_config(Some("license"), Some("secret"))).unwrap();
        let debug_str = format!("{model:?}");
        assert!(debug_str.contains("UserAuthModel"));
        assert!(!debug_str.contains("c2VjcmV0OmxpY2Vuc2U="));
    }
}
