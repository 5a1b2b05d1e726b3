//! Tool-call envelope decoding.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use dorametrics_core::protocol::call::decode;

#[test]
fn decode_with_args() {
    let text = r#"{"v":1,"tool":"get_mttr","args":{"service":"checkout","days":7}}"#;
    let call = decode(text).unwrap();
    assert_eq!(call.tool, "get_mttr");
    assert!(call.args_json().contains("\"checkout\""));
}

#[test]
fn missing_args_read_as_empty_object() {
    let call = decode(r#"{"v":1,"tool":"get_dora_metrics"}"#).unwrap();
    assert_eq!(call.args_json(), "{}");
}

#[test]
fn rejects_unknown_fields_and_versions() {
    let err = decode(r#"{"v":1,"tool":"x","argz":{}}"#).unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let err = decode(r#"{"v":2,"tool":"x"}"#).unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");

    assert!(decode(r#"{"v":1,"tool":""}"#).is_err());
}
