//! SOAP client for the RMS merchant services.
//!
//! The RMS order and inventory APIs are SOAP 1.1 services authenticated with
//! an [`EsaKey`](crate::auth::EsaKey). Operations are called by name with
//! their parameters as a `serde_json::Value`, and results come back as a
//! `serde_json::Value` decoded from the response envelope.
//!
//! - [`RmsService`]: entry point, from
//!   [`RakutenWebService::rms`](crate::RakutenWebService::rms)
//! - [`SoapClient`]: calls operations of one service
//! - [`SoapService`], [`ORDER`], [`INVENTORY`]: service descriptors
//! - [`SoapError`]: SOAP-specific errors

mod client;
mod envelope;
mod errors;
mod service;

pub use client::{RmsService, SoapClient};
pub use envelope::{build_request, parse_response, TEXT_KEY};
pub use errors::SoapError;
pub use service::{SoapService, INVENTORY, ORDER};
