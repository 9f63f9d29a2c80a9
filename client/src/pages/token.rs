//! Detail page for a single collectible at `/token/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nft_description::NftDescription;
use crate::net::api::fetch_nft_detail;

#[component]
pub fn TokenPage(#[prop(into)] connected_address: Signal<Option<String>>) -> impl IntoView {
    let params = use_params_map();
    let token_id = move || params.read().get("id").unwrap_or_default();

    let detail = LocalResource::new(move || {
        let id = token_id();
        async move {
            if id.is_empty() {
                return None;
            }
            fetch_nft_detail(id).await
        }
    });

    view! {
        <div class="token-page">
            <Suspense fallback=move || view! { <p class="token-page__loading">"Loading collectible..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|found| match found {
                            Some(detail) => view! { <NftDescription detail=detail connected_address=connected_address/> }.into_any(),
                            None => view! { <p class="token-page__missing">"Collectible not found."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
