//! Physical redemption tiers.
//!
//! Each collectible can be redeemed for a limited number of physical prints
//! per tier. The print contract reports tier limits and the orders placed
//! against a token; the gallery shows them as `ordered/limit` per tier.

#[cfg(test)]
#[path = "physicals_test.rs"]
mod physicals_test;

use serde::{Deserialize, Serialize};

/// Tiers in the order the detail view lists them.
pub const TIER_DISPLAY_ORDER: [u8; 3] = [3, 2, 1];

/// Limit and price for one print tier, as reported by `tier_info`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimit {
    pub tier: u8,
    pub max_physical_limit: u8,
    /// Price in micro-units of the payment denom.
    pub cost: u64,
}

/// A single physical print order, as reported by `get_cw721_physical_info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalItem {
    pub id: u64,
    pub token_id: String,
    pub owner: String,
    pub tier: u8,
    pub status: String,
}

/// Orders placed for one tier of one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalTierStatus {
    pub tier: u8,
    pub ordered: u32,
    pub limit: Option<u8>,
}

impl PhysicalTierStatus {
    /// Heading shown above the counter, e.g. `"Tier 3"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Tier {}", self.tier)
    }

    /// Counter text, e.g. `"1/3"`; the limit is `?` when unknown.
    #[must_use]
    pub fn label(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}/{limit}", self.ordered),
            None => format!("{}/?", self.ordered),
        }
    }

    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.limit.is_some_and(|limit| self.ordered >= u32::from(limit))
    }
}

/// Count orders per tier, in [`TIER_DISPLAY_ORDER`].
///
/// Items whose tier is not 1..=3 are ignored.
#[must_use]
pub fn summarize_physicals(limits: &[TierLimit], items: &[PhysicalItem]) -> Vec<PhysicalTierStatus> {
    TIER_DISPLAY_ORDER
        .iter()
        .map(|&tier| {
            let ordered = items.iter().filter(|item| item.tier == tier).count();
            PhysicalTierStatus {
                tier,
                ordered: u32::try_from(ordered).unwrap_or(u32::MAX),
                limit: limits
                    .iter()
                    .find(|l| l.tier == tier)
                    .map(|l| l.max_physical_limit),
            }
        })
        .collect()
}
