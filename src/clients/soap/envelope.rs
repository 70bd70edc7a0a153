//! SOAP 1.1 envelope encoding and decoding.
//!
//! Requests are built from `serde_json::Value`s and responses are decoded
//! back into them, so RMS operations are called and read the same way as the
//! REST APIs.
//!
//! Encoding:
//!
//! - objects become child elements, one per key
//! - arrays become repeated elements with the same name
//! - `null` becomes an empty element
//! - strings, numbers and booleans become escaped text
//!
//! Decoding matches elements by local name and ignores attributes. Text-only
//! elements become strings with their whitespace kept, empty elements become
//! `null`, and elements repeated under one parent are collected into an
//! array. Whitespace between child elements is dropped; other text next to
//! child elements is kept under the [`TEXT_KEY`] field.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde_json::{Map, Value};

use crate::auth::UserAuthModel;
use crate::clients::soap::{SoapError, SoapService};

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Field holding the text of an element that also has child elements.
pub const TEXT_KEY: &str = "$text";

/// Builds the request envelope for `operation`.
///
/// The authentication block is sent as `arg0`. `params` are sent as `arg1`
/// unless they are `null` or an empty object.
///
/// # Errors
///
/// Returns [`SoapError::Xml`] if the operation name or a parameter key is
/// not a valid XML element name.
pub fn build_request(
    service: &SoapService,
    operation: &str,
    auth: &UserAuthModel,
    params: &Value,
) -> Result<String, SoapError> {
    check_element_name(operation)?;

    let auth = serde_json::to_value(auth)
        .map_err(|e| SoapError::xml(format!("cannot encode authentication block: {e}")))?;

    let mut body = String::new();
    write_element(&mut body, "arg0", &auth)?;
    if !is_empty_params(params) {
        write_element(&mut body, "arg1", params)?;
    }

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <soap:Envelope xmlns:soap=\"{SOAP_ENV_NS}\" xmlns:ns=\"{namespace}\">\
         <soap:Body><ns:{operation}>{body}</ns:{operation}></soap:Body>\
         </soap:Envelope>",
        namespace = escape(service.namespace),
    ))
}

fn is_empty_params(params: &Value) -> bool {
    match params {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn write_element(out: &mut String, name: &str, value: &Value) -> Result<(), SoapError> {
    check_element_name(name)?;

    match value {
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item)?;
            }
        }
        Value::Null => {
            out.push('<');
            out.push_str(name);
            out.push_str("/>");
        }
        Value::Object(fields) => {
            out.push_str(&format!("<{name}>"));
            for (key, field) in fields {
                write_element(out, key, field)?;
            }
            out.push_str(&format!("</{name}>"));
        }
        Value::String(s) => out.push_str(&format!("<{name}>{}</{name}>", escape(s))),
        Value::Bool(b) => out.push_str(&format!("<{name}>{b}</{name}>")),
        Value::Number(n) => out.push_str(&format!("<{name}>{n}</{name}>")),
    }

    Ok(())
}

fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

fn check_element_name(name: &str) -> Result<(), SoapError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(SoapError::xml(format!("invalid element name '{name}'")))
    }
}

/// An element being decoded.
struct Node {
    name: String,
    children: Vec<(String, Value)>,
    text: String,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> (String, Value) {
        if self.children.is_empty() {
            let value = if self.text.is_empty() {
                Value::Null
            } else {
                Value::String(self.text)
            };
            return (self.name, value);
        }

        let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
        for (key, value) in self.children {
            match grouped.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value),
                None => grouped.push((key, vec![value])),
            }
        }

        let mut fields: Map<String, Value> = grouped
            .into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 {
                    values.remove(0)
                } else {
                    Value::Array(values)
                };
                (key, value)
            })
            .collect();

        let text = self.text.trim();
        if !text.is_empty() {
            fields.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
        }

        (self.name, Value::Object(fields))
    }
}

/// Decodes an XML document into its root element name and value.
///
/// # Errors
///
/// Returns [`SoapError::Xml`] if the document is not well-formed.
pub fn xml_to_value(xml: &str) -> Result<(String, Value), SoapError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().into_inner()).to_string();
                stack.push(Node::new(name));
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().into_inner()).to_string();
                let (name, value) = Node::new(name).into_value();
                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, value)),
                    None => root = Some((name, value)),
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| SoapError::xml(format!("invalid text: {e}")))?;
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| SoapError::xml("unexpected closing tag"))?;
                let (name, value) = node.into_value();
                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, value)),
                    None => root = Some((name, value)),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SoapError::xml(format!("XML parse error: {e}"))),
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SoapError::xml("unexpected end of document"));
    }
    root.ok_or_else(|| SoapError::xml("empty document"))
}

/// Decodes a response envelope into the operation result.
///
/// The single response element inside `Body` is unwrapped, and so is its
/// `return` element when it is the only child.
///
/// # Errors
///
/// Returns [`SoapError::Fault`] for a `Fault` body and [`SoapError::Xml`]
/// if the document is not a SOAP envelope.
pub fn parse_response(xml: &str) -> Result<Value, SoapError> {
    let (root, envelope) = xml_to_value(xml)?;
    if root != "Envelope" {
        return Err(SoapError::xml(format!(
            "expected an Envelope element, found '{root}'"
        )));
    }

    let body = match envelope {
        Value::Object(mut fields) => fields
            .remove("Body")
            .ok_or_else(|| SoapError::xml("missing Body element"))?,
        _ => return Err(SoapError::xml("missing Body element")),
    };

    let mut fields = match body {
        Value::Object(fields) => fields,
        other => return Ok(other),
    };

    if let Some(fault) = fields.remove("Fault") {
        return Err(fault_error(&fault));
    }

    if fields.len() != 1 {
        return Ok(Value::Object(fields));
    }

    let response = fields
        .into_iter()
        .next()
        .map_or(Value::Null, |(_, value)| value);

    Ok(match response {
        Value::Object(mut inner) if inner.len() == 1 && inner.contains_key("return") => {
            inner.remove("return").unwrap_or(Value::Null)
        }
        other => other,
    })
}

fn fault_error(fault: &Value) -> SoapError {
    let field = |name: &str| {
        fault
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    SoapError::Fault {
        code: field("faultcode"),
        message: field("faultstring"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::EsaKey;
    use crate::clients::soap::ORDER;
    use crate::config::{LicenseKey, SecretService};
    use serde_json::json;

    fn auth() -> UserAuthModel {
        let key = EsaKey::new(
            &LicenseKey::new("license").unwrap(),
            &SecretService::new("secret").unwrap(),
        );
        UserAuthModel::new(&key)
    }

    #[test]
    fn test_request_without_params_has_only_auth_block() {
        let xml = build_request(&ORDER, "getRequestId", &auth(), &json!({})).unwrap();

        assert!(xml.contains("<ns:getRequestId><arg0>"));
        assert!(xml.contains("<authKey>ESA c2VjcmV0OmxpY2Vuc2U=</authKey>"));
        assert!(xml.contains("<shopUrl></shopUrl>"));
        assert!(xml.contains("<userName></userName>"));
        assert!(!xml.contains("<arg1>"));
        assert!(xml.contains(ORDER.namespace));
    }

    #[test]
    fn test_request_params_are_sent_as_arg1() {
        let params = json!({
            "requestId": 42,
            "orderNumber": ["100-1", "100-2"],
            "isOrderNumberOnlyFlg": false,
            "note": "<fragile> & boxed",
            "option": null,
        });
        let xml = build_request(&ORDER, "getResult", &auth(), &params).unwrap();

        assert!(xml.contains("<arg1>"));
        assert!(xml.contains("<requestId>42</requestId>"));
        assert!(xml.contains("<orderNumber>100-1</orderNumber><orderNumber>100-2</orderNumber>"));
        assert!(xml.contains("<isOrderNumberOnlyFlg>false</isOrderNumberOnlyFlg>"));
        assert!(xml.contains("<note>&lt;fragile&gt; &amp; boxed</note>"));
        assert!(xml.contains("<option/>"));
    }

    #[test]
    fn test_request_rejects_invalid_names() {
        assert!(matches!(
            build_request(&ORDER, "get Result", &auth(), &Value::Null),
            Err(SoapError::Xml { .. })
        ));
        assert!(matches!(
            build_request(&ORDER, "getResult", &auth(), &json!({"<bad>": 1})),
            Err(SoapError::Xml { .. })
        ));
    }

    #[test]
    fn test_xml_to_value_collects_repeated_elements() {
        let (root, value) = xml_to_value(
            "<a:root xmlns:a=\"urn:x\"><item>1</item><item>2</item><single>x</single><empty/></a:root>",
        )
        .unwrap();

        assert_eq!(root, "root");
        assert_eq!(
            value,
            json!({"item": ["1", "2"], "single": "x", "empty": null})
        );
    }

    #[test]
    fn test_xml_to_value_keeps_text_as_sent() {
        let (_, value) =
            xml_to_value("<r><a>  padded  </a><b>text<c>1</c></b><d> </d></r>").unwrap();

        assert_eq!(
            value,
            json!({"a": "  padded  ", "b": {"$text": "text", "c": "1"}, "d": " "})
        );
    }

    #[test]
    fn test_xml_to_value_rejects_truncated_document() {
        assert!(matches!(
            xml_to_value("<root><item>1</item>"),
            Err(SoapError::Xml { .. })
        ));
    }

    #[test]
    fn test_parse_response_unwraps_return() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">
              <S:Body>
                <ns2:getRequestIdResponse xmlns:ns2="http://orderapi.rms.rakuten.co.jp/rms/mall/order/api/ws">
                  <return>
                    <errorCode>N00-000</errorCode>
                    <message>正常終了</message>
                    <requestId>1234</requestId>
                  </return>
                </ns2:getRequestIdResponse>
              </S:Body>
            </S:Envelope>"#;

        let value = parse_response(xml).unwrap();
        assert_eq!(value["errorCode"], "N00-000");
        assert_eq!(value["message"], "正常終了");
        assert_eq!(value["requestId"], "1234");
    }

    #[test]
    fn test_parse_response_maps_fault() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
              <soap:Body>
                <soap:Fault>
                  <faultcode>soap:Server</faultcode>
                  <faultstring>Authentication failed</faultstring>
                </soap:Fault>
              </soap:Body>
            </soap:Envelope>"#;

        match parse_response(xml) {
            Err(SoapError::Fault { code, message }) => {
                assert_eq!(code, "soap:Server");
                assert_eq!(message, "Authentication failed");
            }
            other => panic!("expected a fault, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_requires_envelope() {
        assert!(matches!(
            parse_response("<html><body>502</body></html>"),
            Err(SoapError::Xml { .. })
        ));
    }
}
