//! Ownership check gating owner-only actions.

#[cfg(test)]
#[path = "ownership_test.rs"]
mod ownership_test;

/// Whether the connected wallet owns a collectible.
///
/// Addresses are compared byte-for-byte. No wallet or an unknown owner is
/// never a match.
#[must_use]
pub fn is_owner(connected: Option<&str>, owner: Option<&str>) -> bool {
    match (connected, owner) {
        (Some(wallet), Some(owner)) => !wallet.trim().is_empty() && wallet == owner,
        _ => false,
    }
}
