use collectibles::NftInfo;
use leptos::prelude::*;

use crate::components::grid_item::GridItem;

/// Grid of collectible cards, or `empty_message` when there are none.
#[component]
pub fn CollectionGrid(nfts: Vec<NftInfo>, #[prop(into)] empty_message: String) -> impl IntoView {
    if nfts.is_empty() {
        return view! { <p class="collection-grid__empty">{empty_message}</p> }.into_any();
    }

    view! {
        <div class="collection-grid">
            {nfts.into_iter().map(|nft| view! { <GridItem nft=nft/> }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
