//! Authentication types for the RMS (merchant) services.
//!
//! The public REST APIs only need the application id, which is sent as a
//! query parameter. The RMS services instead authenticate every call with an
//! ESA key derived from the shop's license key and service secret.
//!
//! - [`EsaKey`]: the `ESA base64(secret:license)` token
//! - [`UserAuthModel`]: the authentication block attached to every SOAP call
//!
//! # Example
//!
//! ```rust
//! use rakuten_ws::auth::EsaKey;
//! use rakuten_ws::{LicenseKey, SecretService};
//!
//! let key = EsaKey::new(
//!     &LicenseKey::new("license").unwrap(),
//!     &SecretService::new("secret").unwrap(),
//! );
//! assert_eq!(key.as_ref(), "ESA c2VjcmV0OmxpY2Vuc2U=");
//! ```

mod esa;

pub use esa::{EsaKey, UserAuthModel};
