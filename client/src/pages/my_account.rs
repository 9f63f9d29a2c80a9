//! Collectibles held by the connected wallet.

use leptos::prelude::*;

use crate::components::collection_grid::CollectionGrid;
use crate::net::api::{Page, fetch_owned};

#[component]
pub fn MyAccountPage(#[prop(into)] connected_address: Signal<Option<String>>) -> impl IntoView {
    let owned = LocalResource::new(move || {
        let address = connected_address.get();
        async move {
            match address {
                Some(address) => fetch_owned(address, Page::default()).await,
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="my-account-page">
            <h1>"My Account"</h1>
            <Show
                when=move || connected_address.with(Option::is_some)
                fallback=|| view! { <p class="my-account-page__prompt">"Connect a wallet to see your collectibles."</p> }
            >
                <p class="my-account-page__address">{move || connected_address.get().unwrap_or_default()}</p>
                <Suspense fallback=move || view! { <p>"Loading your collectibles..."</p> }>
                    {move || {
                        owned
                            .get()
                            .map(|list| view! { <CollectionGrid nfts=list empty_message="This wallet holds no collectibles."/> })
                    }}
                </Suspense>
            </Show>
        </div>
    }
}
