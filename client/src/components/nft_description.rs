//! Detail view for a single collectible.
//!
//! Shows the name, owner link, physical redemption counters, traits, and
//! the owner-only "Order Physical Item" button. The button is always
//! rendered so the layout does not shift; it is disabled for non-owners.

#[cfg(test)]
#[path = "nft_description_test.rs"]
mod nft_description_test;

use collectibles::{DEFAULT_EXPLORER_BASE, NftDetail, NftInfo, display_trait_type, explorer_address_url, is_owner};
use leptos::prelude::*;

/// A trait as displayed: capitalized type over its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitEntry {
    pub label: String,
    pub value: String,
}

pub fn trait_entries(nft: &NftInfo) -> Vec<TraitEntry> {
    nft.attributes
        .iter()
        .map(|attr| TraitEntry { label: display_trait_type(&attr.trait_type), value: attr.value.clone() })
        .collect()
}

/// Explorer link for the owner, when the owner is known.
pub fn owner_href(nft: &NftInfo) -> Option<String> {
    nft.owner
        .as_deref()
        .map(|owner| explorer_address_url(DEFAULT_EXPLORER_BASE, owner))
}

pub fn order_button_class(enabled: bool) -> &'static str {
    if enabled { "btn btn-order" } else { "btn btn-order disabled" }
}

#[component]
pub fn NftDescription(detail: NftDetail, #[prop(into)] connected_address: Signal<Option<String>>) -> impl IntoView {
    let NftDetail { nft, physicals } = detail;

    let owner = nft.owner.clone();
    let can_order = Memo::new(move |_| connected_address.with(|addr| is_owner(addr.as_deref(), owner.as_deref())));

    let traits = trait_entries(&nft);
    let owner_view = match owner_href(&nft) {
        Some(href) => view! {
            <a href=href target="_blank" rel="noreferrer noopener">{nft.owner_label().to_owned()}</a>
        }
            .into_any(),
        None => view! { <span class="nft-description__owner--unknown">{nft.owner_label().to_owned()}</span> }.into_any(),
    };
    let image = nft.image.clone().map(|src| {
        let alt = nft.name.clone();
        view! { <img src=src alt=alt/> }
    });

    view! {
        <div class="nft-description">
            <div class="nft-description__image">{image}</div>
            <div class="nft-description__info">
                <div class="nft-description__header">
                    <h2 class="nft-description__name">{nft.name.clone()}</h2>
                    <span class="nft-description__owner">"Owned by " {owner_view}</span>
                </div>
                <div class="nft-description__physicals">
                    <h4>"Physicals"</h4>
                    <div class="nft-description__cells">
                        {physicals
                            .into_iter()
                            .map(|tier| {
                                view! {
                                    <div class="nft-description__cell" class:sold-out=tier.is_sold_out()>
                                        <h6 class="trait-type">{tier.heading()}</h6>
                                        <h5 class="trait-value">{tier.label()}</h5>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="nft-description__traits">
                    <h4>"Traits"</h4>
                    <div class="nft-description__cells">
                        {traits
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="nft-description__cell">
                                        <h6 class="trait-type">{entry.label}</h6>
                                        <h5 class="trait-value">{entry.value}</h5>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <button
                    type="button"
                    class=move || order_button_class(can_order.get())
                    disabled=move || !can_order.get()
                    aria-disabled=move || (!can_order.get()).to_string()
                >
                    "Order Physical Item"
                </button>
            </div>
        </div>
    }
}
