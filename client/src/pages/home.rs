//! Landing page listing the whole collection, one page at a time.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use collectibles::NftInfo;
use leptos::prelude::*;

use crate::components::collection_grid::CollectionGrid;
use crate::net::api::{Page, fetch_collection};

/// Tokens requested per collection page.
pub const PAGE_SIZE: u32 = 30;

/// Cursor for the page after `list`. A short page is the last one.
pub fn next_cursor(list: &[NftInfo], page_size: u32) -> Option<String> {
    if list.len() < page_size as usize {
        return None;
    }
    list.last().map(|nft| nft.token_id.clone())
}

#[component]
pub fn HomePage() -> impl IntoView {
    // Token id the current page starts after; `None` is the first page.
    let cursor = RwSignal::new(None::<String>);
    let nfts = LocalResource::new(move || {
        let start_after = cursor.get();
        async move { fetch_collection(Page { start_after, limit: Some(PAGE_SIZE) }).await }
    });

    view! {
        <div class="home-page">
            <h1>"Collection"</h1>
            <Suspense fallback=move || view! { <p class="home-page__loading">"Loading collection..."</p> }>
                {move || {
                    nfts.get()
                        .map(|list| {
                            let next = next_cursor(&list, PAGE_SIZE);
                            view! {
                                <CollectionGrid nfts=list empty_message="No collectibles found."/>
                                <div class="home-page__paging">
                                    <Show when=move || cursor.with(Option::is_some)>
                                        <button class="btn" type="button" on:click=move |_| cursor.set(None)>
                                            "First page"
                                        </button>
                                    </Show>
                                    {next
                                        .map(|token_id| {
                                            view! {
                                                <button
                                                    class="btn"
                                                    type="button"
                                                    on:click=move |_| cursor.set(Some(token_id.clone()))
                                                >
                                                    "Next page"
                                                </button>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
