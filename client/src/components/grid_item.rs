use collectibles::NftInfo;
use leptos::prelude::*;

use crate::net::api::endpoint;

#[cfg(test)]
#[path = "grid_item_test.rs"]
mod grid_item_test;

/// Path of the detail page for a token, with the id percent-encoded.
pub fn token_href(token_id: &str) -> String {
    endpoint(&["token", token_id], None)
}

/// One card in a collection grid.
#[component]
pub fn GridItem(nft: NftInfo) -> impl IntoView {
    let href = token_href(&nft.token_id);
    let image = nft.image.clone().map(|src| {
        let alt = nft.name.clone();
        view! { <img class="grid-item__image" src=src alt=alt loading="lazy"/> }
    });

    view! {
        <a class="grid-item" href=href>
            {image}
            <div class="grid-item__name">{nft.name}</div>
        </a>
    }
}
