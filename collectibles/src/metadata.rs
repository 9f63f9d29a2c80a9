//! Collectible metadata and its ingestion boundary.
//!
//! DESIGN
//! ======
//! The cw721 `all_nft_info` response nests the owner under `access` and the
//! display metadata under `info.extension`. Indexers are inconsistent about
//! which fields are present, so validation defaults instead of rejecting:
//! an unknown owner becomes `None`, a missing trait list becomes empty.

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::physicals::PhysicalTierStatus;

/// Error returned by [`NftInfo::from_all_nft_info`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The payload for a token was not a JSON object.
    #[error("metadata for token {token_id} is not an object")]
    NotAnObject { token_id: String },
}

/// One `{trait_type, value}` attribute of a collectible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTrait {
    pub trait_type: String,
    pub value: String,
}

/// Validated collectible metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftInfo {
    pub token_id: String,
    /// Owner address as recorded by the NFT contract, if the indexer returned one.
    pub owner: Option<String>,
    pub name: String,
    pub image: Option<String>,
    /// Attributes in indexer order.
    #[serde(default)]
    pub attributes: Vec<NftTrait>,
}

/// A collectible together with its physical redemption status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftDetail {
    pub nft: NftInfo,
    #[serde(default)]
    pub physicals: Vec<PhysicalTierStatus>,
}

impl NftInfo {
    /// Build an [`NftInfo`] from a raw cw721 `all_nft_info` result.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::NotAnObject`] when `raw` is not a JSON object.
    pub fn from_all_nft_info(token_id: &str, raw: &Value) -> Result<Self, MetadataError> {
        if !raw.is_object() {
            return Err(MetadataError::NotAnObject { token_id: token_id.to_owned() });
        }

        let owner = raw
            .pointer("/access/owner")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_owned);

        let extension = raw.pointer("/info/extension");
        let name = extension
            .and_then(|ext| ext.get("name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| format!("Token #{token_id}"), str::to_owned);
        let image = extension
            .and_then(|ext| ext.get("image"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        let attributes = extension
            .and_then(|ext| ext.get("attributes"))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(parse_trait).collect())
            .unwrap_or_default();

        Ok(Self { token_id: token_id.to_owned(), owner, name, image, attributes })
    }

    /// Owner address, or a placeholder label when the indexer omitted it.
    #[must_use]
    pub fn owner_label(&self) -> &str {
        self.owner.as_deref().unwrap_or("unknown owner")
    }
}

fn parse_trait(item: &Value) -> Option<NftTrait> {
    let trait_type = item.get("trait_type")?.as_str()?.trim();
    if trait_type.is_empty() {
        return None;
    }
    let value = match item.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    };
    Some(NftTrait { trait_type: trait_type.to_owned(), value })
}
