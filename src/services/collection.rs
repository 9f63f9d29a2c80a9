//! Collection, wallet, and detail lookups.
//!
//! DESIGN
//! ======
//! Listings page token ids from the cw721 contract and resolve every id
//! through `all_nft_info` with bounded concurrency, keeping token order.
//! The detail lookup adds the physical redemption summary; failures there
//! degrade to unknown limits and missing orders instead of failing the
//! whole page.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use collectibles::{NftDetail, NftInfo, PhysicalItem, TIER_DISPLAY_ORDER, TierLimit, summarize_physicals};
use futures::future::join_all;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::config::{GalleryConfig, clamp_page_limit};
use crate::lcd::NftSource;
use crate::lcd::queries;
use crate::lcd::types::LcdError;

/// Most `all_nft_info` queries in flight at once per listing.
pub const METADATA_CONCURRENCY: usize = 8;

/// Page cursor as received from the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub start_after: Option<String>,
    pub limit: Option<u32>,
}

impl PageRequest {
    fn resolve(&self, config: &GalleryConfig) -> (Option<&str>, u32) {
        let limit = self.limit.map_or(config.page_limit, clamp_page_limit);
        let start_after = self.start_after.as_deref().map(str::trim).filter(|s| !s.is_empty());
        (start_after, limit)
    }
}

/// One page of the whole collection.
///
/// # Errors
///
/// Propagates LCD failures for the token list or any token's metadata.
pub async fn load_collection(
    source: &dyn NftSource,
    config: &GalleryConfig,
    page: &PageRequest,
) -> Result<Vec<NftInfo>, LcdError> {
    let (start_after, limit) = page.resolve(config);
    let ids = queries::all_tokens(source, &config.cw721_contract, start_after, limit).await?;
    resolve_all(source, config, &ids).await
}

/// One page of the tokens held by `owner`.
///
/// # Errors
///
/// Propagates LCD failures for the token list or any token's metadata.
pub async fn load_owned(
    source: &dyn NftSource,
    config: &GalleryConfig,
    owner: &str,
    page: &PageRequest,
) -> Result<Vec<NftInfo>, LcdError> {
    let (start_after, limit) = page.resolve(config);
    let ids = queries::owner_tokens(source, &config.cw721_contract, owner, start_after, limit).await?;
    resolve_all(source, config, &ids).await
}

/// A token with its physical redemption status.
///
/// # Errors
///
/// Returns [`LcdError::NotFound`] for unknown tokens; other metadata
/// failures propagate.
pub async fn load_detail(source: &dyn NftSource, config: &GalleryConfig, token_id: &str) -> Result<NftDetail, LcdError> {
    let nft = queries::nft_info(source, &config.cw721_contract, token_id).await?;
    let physicals = match config.physicals_contract.as_deref() {
        Some(contract) => {
            let (limits, items) = futures::join!(tier_limits(source, contract), physical_items(source, contract, token_id));
            summarize_physicals(&limits, &items)
        }
        None => Vec::new(),
    };
    Ok(NftDetail { nft, physicals })
}

async fn resolve_all(source: &dyn NftSource, config: &GalleryConfig, ids: &[String]) -> Result<Vec<NftInfo>, LcdError> {
    let lookups: Vec<_> = ids.iter().map(|id| queries::nft_info(source, &config.cw721_contract, id)).collect();
    stream::iter(lookups)
        .buffered(METADATA_CONCURRENCY)
        .try_collect()
        .await
}

async fn tier_limits(source: &dyn NftSource, contract: &str) -> Vec<TierLimit> {
    let results = join_all(TIER_DISPLAY_ORDER.iter().map(|&tier| queries::tier_limit(source, contract, tier))).await;
    results
        .into_iter()
        .filter_map(|res| {
            res.map_err(|e| tracing::warn!(error = %e, "tier_info query failed"))
                .ok()
        })
        .collect()
}

async fn physical_items(source: &dyn NftSource, contract: &str, token_id: &str) -> Vec<PhysicalItem> {
    let ids = match queries::physical_ids(source, contract, token_id).await {
        Ok(ids) => ids,
        Err(LcdError::NotFound(_)) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, %token_id, "cw721_physicals query failed");
            return Vec::new();
        }
    };
    let results = join_all(ids.iter().map(|id| queries::physical_item(source, contract, id))).await;
    results
        .into_iter()
        .filter_map(|res| {
            res.map_err(|e| tracing::warn!(error = %e, %token_id, "physical info query failed"))
                .ok()
        })
        .collect()
}
