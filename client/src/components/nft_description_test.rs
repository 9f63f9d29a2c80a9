use super::*;
use collectibles::NftTrait;

fn nft(owner: Option<&str>, attributes: &[(&str, &str)]) -> NftInfo {
    NftInfo {
        token_id: "7".to_owned(),
        owner: owner.map(str::to_owned),
        name: "Gallery #7".to_owned(),
        image: None,
        attributes: attributes
            .iter()
            .map(|(t, v)| NftTrait { trait_type: (*t).to_owned(), value: (*v).to_owned() })
            .collect(),
    }
}

#[test]
fn trait_entries_capitalize_type_and_keep_value() {
    let entries = trait_entries(&nft(None, &[("background", "blue"), ("eyes", "laser")]));
    assert_eq!(
        entries,
        vec![
            TraitEntry { label: "Background".to_owned(), value: "blue".to_owned() },
            TraitEntry { label: "Eyes".to_owned(), value: "laser".to_owned() },
        ]
    );
}

#[test]
fn trait_entries_empty_when_no_attributes() {
    assert!(trait_entries(&nft(None, &[])).is_empty());
}

#[test]
fn owner_href_points_at_explorer() {
    assert_eq!(
        owner_href(&nft(Some("terra1owner"), &[])).as_deref(),
        Some("https://terrasco.pe/mainnet/address/terra1owner")
    );
}

#[test]
fn owner_href_absent_for_unknown_owner() {
    assert!(owner_href(&nft(None, &[])).is_none());
}

#[test]
fn order_button_class_marks_disabled() {
    assert_eq!(order_button_class(true), "btn btn-order");
    assert!(order_button_class(false).ends_with(" disabled"));
}
