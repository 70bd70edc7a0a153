//! Integration tests for the RMS SOAP client.

use rakuten_ws::{
    BaseUrl, ConfigError, HttpError, LicenseKey, RakutenWebService, SecretService, SoapError,
    WebServiceConfig,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORDER_NS: &str = "http://orderapi.rms.rakuten.co.jp/rms/mall/order/api/ws";

fn create_test_client(server: &MockServer) -> RakutenWebService {
    let config = WebServiceConfig::builder()
        .license_key(LicenseKey::new("license").unwrap())
        .secret_service(SecretService::new("secret").unwrap())
        .rms_api_url(BaseUrl::new(format!("{}/es/1.0", server.uri())).unwrap())
        .build()
        .unwrap();
    RakutenWebService::new(config)
}

fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"><S:Body>{body}</S:Body></S:Envelope>"#
    )
}

#[tokio::test]
async fn test_call_sends_auth_block_and_parses_return() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/es/1.0/order/ws"))
        .and(header("content-type", "text/xml; charset=utf-8"))
        .and(body_string_contains(
            "<authKey>ESA c2VjcmV0OmxpY2Vuc2U=</authKey>",
        ))
        .and(body_string_contains("<ns:getRequestId>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(&format!(
            r#"<ns2:getRequestIdResponse xmlns:ns2="{ORDER_NS}"><return><errorCode>N00-000</errorCode><message>OK</message><requestId>987</requestId></return></ns2:getRequestIdResponse>"#
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let ws = create_test_client(&server);
    let result = ws
        .rms()
        .order()
        .call("getRequestId", json!({}))
        .await
        .unwrap();

    assert_eq!(result["errorCode"], "N00-000");
    assert_eq!(result["requestId"], "987");
}

#[tokio::test]
async fn test_call_sends_params_as_arg1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/es/1.0/order/ws"))
        .and(body_string_contains("<arg0>"))
        .and(body_string_contains(
            "<arg1><requestId>987</requestId></arg1>",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope(&format!(
            r#"<ns2:getResultResponse xmlns:ns2="{ORDER_NS}"><return><errorCode>N00-000</errorCode><orderModel><orderNumber>100-1</orderNumber></orderModel><orderModel><orderNumber>100-2</orderNumber></orderModel></return></ns2:getResultResponse>"#
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let ws = create_test_client(&server);
    let result = ws
        .rms()
        .order()
        .call("getResult", json!({"requestId": 987}))
        .await
        .unwrap();

    assert_eq!(
        result["orderModel"],
        json!([{"orderNumber": "100-1"}, {"orderNumber": "100-2"}])
    );
}

#[tokio::test]
async fn test_fault_is_returned_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/es/1.0/inventory/ws"))
        .respond_with(ResponseTemplate::new(500).set_body_string(envelope(
            "<S:Fault><faultcode>S:Server</faultcode><faultstring>Invalid authKey</faultstring></S:Fault>",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let ws = create_test_client(&server);
    let result = ws
        .rms()
        .inventory()
        .call("getInventoryExternal", Value::Null)
        .await;

    match result {
        Err(SoapError::Fault { code, message }) => {
            assert_eq!(code, "S:Server");
            assert_eq!(message, "Invalid authKey");
        }
        other => panic!("expected a fault, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_without_fault_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let ws = create_test_client(&server);
    let result = ws.rms().order().call("getRequestId", Value::Null).await;

    assert!(matches!(
        result,
        Err(SoapError::Http(HttpError::Response(ref e))) if e.code == 503
    ));
}

#[tokio::test]
async fn test_http_error_status_wins_over_plain_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/es/1.0/order/ws"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("x-request-id", "rms-77")
                .set_body_string(envelope(&format!(
                    r#"<ns2:getRequestIdResponse xmlns:ns2="{ORDER_NS}"><return><errorCode>N00-000</errorCode></return></ns2:getRequestIdResponse>"#
                ))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ws = create_test_client(&server);
    let result = ws.rms().order().call("getRequestId", json!({})).await;

    match result {
        Err(SoapError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.error_reference.as_deref(), Some("rms-77"));
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_credentials_fail_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = WebServiceConfig::builder()
        .rms_api_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let ws = RakutenWebService::new(config);

    let result = ws.rms().order().call("getRequestId", json!({})).await;
    match result {
        Err(SoapError::Config(ConfigError::MissingLicenseKey)) => {}
        other => panic!("expected MissingLicenseKey, got {other:?}"),
    }
}
