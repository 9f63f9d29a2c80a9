use super::*;
use serde_json::json;

fn detail(owner: Option<&str>) -> Value {
    json!({
        "nft": { "token_id": "7", "owner": owner, "name": "Seven", "image": null, "attributes": [] },
        "physicals": []
    })
}

const BASE: &str = "http://127.0.0.1:3000";

fn collection_url(start_after: Option<&str>, limit: Option<u32>) -> String {
    api_url(BASE, &["api", "nfts"], &collection_query(start_after, limit))
        .unwrap()
        .to_string()
}

#[test]
fn collection_url_without_paging() {
    assert_eq!(collection_url(None, None), "http://127.0.0.1:3000/api/nfts");
}

#[test]
fn collection_url_with_cursor_and_limit() {
    assert_eq!(collection_url(Some("12"), Some(5)), "http://127.0.0.1:3000/api/nfts?start_after=12&limit=5");
    assert_eq!(collection_url(Some(" "), Some(5)), "http://127.0.0.1:3000/api/nfts?limit=5");
}

#[test]
fn collection_url_encodes_cursor_value() {
    assert_eq!(collection_url(Some("7&limit=1"), None), "http://127.0.0.1:3000/api/nfts?start_after=7%26limit%3D1");
}

#[test]
fn api_url_encodes_token_segment() {
    let url = api_url(BASE, &["api", "nfts", "a/b?c#d"], &[]).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/nfts/a%2Fb%3Fc%23d");
}

#[test]
fn api_url_keeps_base_path_prefix() {
    let url = api_url("http://host/gallery/", &["api", "nfts", "7"], &[]).unwrap();
    assert_eq!(url.as_str(), "http://host/gallery/api/nfts/7");
}

#[test]
fn api_url_rejects_bad_base() {
    assert!(matches!(api_url("not a url", &["api"], &[]), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn wallet_owns_matches_exact_owner() {
    assert!(wallet_owns(&detail(Some("terra1me")), "terra1me").unwrap());
    assert!(!wallet_owns(&detail(Some("terra1me")), "terra1you").unwrap());
}

#[test]
fn wallet_owns_false_for_unknown_owner() {
    assert!(!wallet_owns(&detail(None), "terra1me").unwrap());
}

#[test]
fn wallet_owns_rejects_malformed_detail() {
    assert!(wallet_owns(&json!({ "nft": 1 }), "terra1me").is_err());
}

#[test]
fn cli_parses_is_owner() {
    let cli = Cli::try_parse_from(["gallery-cli", "is-owner", "--wallet", "terra1me", "7"]).unwrap();
    match cli.command {
        Command::IsOwner { wallet, token_id } => {
            assert_eq!(wallet, "terra1me");
            assert_eq!(token_id, "7");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
