//! Shared NFT collectible model for the gallery `server`, `client`, and `cli`.
//!
//! This crate owns the validated shape of collectible metadata. Raw indexer
//! payloads are untyped JSON; everything past [`NftInfo::from_all_nft_info`]
//! works with explicit fields and never faults on a missing owner or trait list.

pub mod display;
pub mod metadata;
pub mod ownership;
pub mod physicals;

pub use display::{DEFAULT_EXPLORER_BASE, display_trait_type, explorer_address_url};
pub use metadata::{MetadataError, NftDetail, NftInfo, NftTrait};
pub use ownership::is_owner;
pub use physicals::{PhysicalItem, PhysicalTierStatus, TIER_DISPLAY_ORDER, TierLimit, summarize_physicals};
