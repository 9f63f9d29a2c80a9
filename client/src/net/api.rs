//! REST API helpers for the gallery server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty results since these endpoints
//! are only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Vec` outputs instead of panics so a failing indexer
//! degrades to an empty grid or a "not found" view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use collectibles::{NftDetail, NftInfo};

/// Cursor for listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub start_after: Option<String>,
    pub limit: Option<u32>,
}

/// Placeholder origin used only to run paths through `url`'s encoder.
const ENCODING_ORIGIN: &str = "http://gallery.invalid";

/// Origin-relative URL with each path segment and query value
/// percent-encoded, so token ids like `a/b` or `x&y` stay intact.
pub fn endpoint(segments: &[&str], page: Option<&Page>) -> String {
    let Ok(mut url) = url::Url::parse(ENCODING_ORIGIN) else {
        log::error!("invalid encoding origin {ENCODING_ORIGIN}");
        return "/".to_owned();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }

    let mut pairs = Vec::new();
    if let Some(page) = page {
        if let Some(start_after) = &page.start_after {
            pairs.push(("start_after", start_after.clone()));
        }
        if let Some(limit) = page.limit {
            pairs.push(("limit", limit.to_string()));
        }
    }
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    url[url::Position::BeforePath..].to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(page: &Page) -> String {
    endpoint(&["api", "nfts"], Some(page))
}

#[cfg(any(test, feature = "hydrate"))]
fn owned_endpoint(address: &str, page: &Page) -> String {
    endpoint(&["api", "wallets", address, "nfts"], Some(page))
}

#[cfg(any(test, feature = "hydrate"))]
fn detail_endpoint(token_id: &str) -> String {
    endpoint(&["api", "nfts", token_id], None)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("GET {url} failed: {e}");
            return None;
        }
    };
    if !resp.ok() {
        log::warn!("GET {url} returned {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Fetch one page of the whole collection.
pub async fn fetch_collection(page: Page) -> Vec<NftInfo> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_endpoint(&page)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Vec::new()
    }
}

/// Fetch the collectibles owned by `address`.
pub async fn fetch_owned(address: String, page: Page) -> Vec<NftInfo> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&owned_endpoint(&address, &page)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (address, page);
        Vec::new()
    }
}

/// Fetch a collectible with its physical redemption status.
/// Returns `None` when the token does not exist or on the server.
pub async fn fetch_nft_detail(token_id: String) -> Option<NftDetail> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&detail_endpoint(&token_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token_id;
        None
    }
}
