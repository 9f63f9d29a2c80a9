//! Typed contract queries on top of [`NftSource`].

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

use collectibles::{NftInfo, PhysicalItem, TierLimit};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::NftSource;
use super::types::{
    LcdError, PhysicalInfoResponse, PhysicalsResponse, TierInfoResponse, TokensResponse, id_string, number_or_string,
};

// =============================================================================
// QUERY MESSAGES
// =============================================================================

#[must_use]
pub fn all_tokens_msg(start_after: Option<&str>, limit: u32) -> Value {
    json!({ "all_tokens": { "start_after": start_after, "limit": limit } })
}

#[must_use]
pub fn owner_tokens_msg(owner: &str, start_after: Option<&str>, limit: u32) -> Value {
    json!({ "tokens": { "owner": owner, "start_after": start_after, "limit": limit } })
}

#[must_use]
pub fn all_nft_info_msg(token_id: &str) -> Value {
    json!({ "all_nft_info": { "token_id": token_id } })
}

#[must_use]
pub fn tier_info_msg(tier: u8) -> Value {
    json!({ "tier_info": { "tier": tier } })
}

#[must_use]
pub fn cw721_physicals_msg(token_id: &str) -> Value {
    json!({ "cw721_physicals": { "token_id": token_id, "start_after": null, "limit": null } })
}

#[must_use]
pub fn physical_info_msg(physical_id: &str) -> Value {
    json!({ "get_cw721_physical_info": { "token_id": physical_id } })
}

// =============================================================================
// QUERIES
// =============================================================================

async fn query_as<T: DeserializeOwned>(source: &dyn NftSource, contract: &str, msg: &Value) -> Result<T, LcdError> {
    let result = source.smart_query(contract, msg).await?;
    serde_json::from_value(result).map_err(|e| LcdError::Parse(e.to_string()))
}

/// # Errors
///
/// Propagates query and parse failures.
pub async fn all_tokens(
    source: &dyn NftSource,
    cw721: &str,
    start_after: Option<&str>,
    limit: u32,
) -> Result<Vec<String>, LcdError> {
    let res: TokensResponse = query_as(source, cw721, &all_tokens_msg(start_after, limit)).await?;
    Ok(res.tokens)
}

/// # Errors
///
/// Propagates query and parse failures.
pub async fn owner_tokens(
    source: &dyn NftSource,
    cw721: &str,
    owner: &str,
    start_after: Option<&str>,
    limit: u32,
) -> Result<Vec<String>, LcdError> {
    let res: TokensResponse = query_as(source, cw721, &owner_tokens_msg(owner, start_after, limit)).await?;
    Ok(res.tokens)
}

/// # Errors
///
/// Returns [`LcdError::NotFound`] for unknown tokens and
/// [`LcdError::Parse`] when the metadata is not an object.
pub async fn nft_info(source: &dyn NftSource, cw721: &str, token_id: &str) -> Result<NftInfo, LcdError> {
    let raw = source.smart_query(cw721, &all_nft_info_msg(token_id)).await?;
    NftInfo::from_all_nft_info(token_id, &raw).map_err(|e| LcdError::Parse(e.to_string()))
}

/// # Errors
///
/// Propagates query and parse failures.
pub async fn tier_limit(source: &dyn NftSource, physicals: &str, tier: u8) -> Result<TierLimit, LcdError> {
    let res: TierInfoResponse = query_as(source, physicals, &tier_info_msg(tier)).await?;
    let cost = number_or_string(&res.cost).ok_or_else(|| LcdError::Parse(format!("tier {tier} cost: {}", res.cost)))?;
    Ok(TierLimit { tier, max_physical_limit: res.max_physical_limit, cost })
}

/// Ids of the physical orders placed against `token_id`.
///
/// # Errors
///
/// Propagates query and parse failures.
pub async fn physical_ids(source: &dyn NftSource, physicals: &str, token_id: &str) -> Result<Vec<String>, LcdError> {
    let res: PhysicalsResponse = query_as(source, physicals, &cw721_physicals_msg(token_id)).await?;
    Ok(res.physicals.iter().filter_map(id_string).collect())
}

/// # Errors
///
/// Propagates query failures; returns [`LcdError::Parse`] for ids or tiers
/// that are not integers.
pub async fn physical_item(source: &dyn NftSource, physicals: &str, physical_id: &str) -> Result<PhysicalItem, LcdError> {
    let res: PhysicalInfoResponse = query_as(source, physicals, &physical_info_msg(physical_id)).await?;
    let wire = res.physical;
    let id = number_or_string(&wire.id).ok_or_else(|| LcdError::Parse(format!("physical id: {}", wire.id)))?;
    let tier = number_or_string(&wire.tier)
        .and_then(|t| u8::try_from(t).ok())
        .ok_or_else(|| LcdError::Parse(format!("physical tier: {}", wire.tier)))?;
    Ok(PhysicalItem { id, token_id: wire.token_id, owner: wire.owner, tier, status: wire.status })
}
