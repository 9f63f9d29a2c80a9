use super::*;

#[test]
fn collection_endpoint_without_paging() {
    assert_eq!(collection_endpoint(&Page::default()), "/api/nfts");
}

#[test]
fn collection_endpoint_with_paging() {
    let page = Page { start_after: Some("12".to_owned()), limit: Some(10) };
    assert_eq!(collection_endpoint(&page), "/api/nfts?start_after=12&limit=10");
}

#[test]
fn owned_endpoint_includes_address() {
    let page = Page { start_after: None, limit: Some(5) };
    assert_eq!(owned_endpoint("terra1abc", &page), "/api/wallets/terra1abc/nfts?limit=5");
}

#[test]
fn detail_endpoint_formats_token_path() {
    assert_eq!(detail_endpoint("7"), "/api/nfts/7");
}

#[test]
fn detail_endpoint_encodes_reserved_characters() {
    assert_eq!(detail_endpoint("a/b"), "/api/nfts/a%2Fb");
    assert_eq!(detail_endpoint("x?y#z"), "/api/nfts/x%3Fy%23z");
}

#[test]
fn collection_endpoint_encodes_cursor_value() {
    let page = Page { start_after: Some("x&limit=1".to_owned()), limit: None };
    assert_eq!(collection_endpoint(&page), "/api/nfts?start_after=x%26limit%3D1");
}

#[test]
fn owned_endpoint_encodes_address_segment() {
    assert_eq!(owned_endpoint("terra/1", &Page::default()), "/api/wallets/terra%2F1/nfts");
}
