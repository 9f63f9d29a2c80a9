use super::*;
use serde_json::json;

#[test]
fn store_url_joins_base_and_contract() {
    assert_eq!(
        store_url("https://lcd.terra.dev/", "terra1abc"),
        "https://lcd.terra.dev/wasm/contracts/terra1abc/store"
    );
}

#[test]
fn parse_store_response_unwraps_result() {
    let body = r#"{"height":"123","result":{"tokens":["1","2"]}}"#;
    assert_eq!(parse_store_response(body).unwrap(), json!({"tokens": ["1", "2"]}));
}

#[test]
fn parse_store_response_rejects_missing_result() {
    let err = parse_store_response(r#"{"height":"1"}"#).unwrap_err();
    assert!(matches!(err, LcdError::Parse(_)));
}

#[test]
fn from_status_detects_not_found_body() {
    let err = LcdError::from_status(500, "cw721_base::state::TokenInfo not found".into());
    assert!(matches!(err, LcdError::NotFound(_)));
    assert!(matches!(LcdError::from_status(404, String::new()), LcdError::NotFound(_)));
}

#[test]
fn from_status_keeps_other_failures() {
    let err = LcdError::from_status(503, "upstream down".into());
    assert!(matches!(err, LcdError::Response { status: 503, .. }));
}

#[test]
fn client_trims_base_url() {
    let timeouts = LcdTimeouts { request_secs: 1, connect_secs: 1 };
    let client = LcdClient::new("https://lcd.example.test///", timeouts).unwrap();
    assert_eq!(client.base_url(), "https://lcd.example.test");
}
