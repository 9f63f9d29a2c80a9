use super::*;

fn page(ids: &[&str]) -> Vec<NftInfo> {
    ids.iter()
        .map(|id| NftInfo {
            token_id: (*id).to_owned(),
            owner: None,
            name: format!("Token #{id}"),
            image: None,
            attributes: Vec::new(),
        })
        .collect()
}

#[test]
fn full_page_continues_after_last_token() {
    assert_eq!(next_cursor(&page(&["1", "2", "3"]), 3).as_deref(), Some("3"));
}

#[test]
fn short_page_is_the_last() {
    assert!(next_cursor(&page(&["1", "2"]), 3).is_none());
}

#[test]
fn empty_page_has_no_next() {
    assert!(next_cursor(&[], PAGE_SIZE).is_none());
}
