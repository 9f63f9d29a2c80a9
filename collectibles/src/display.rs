//! Display helpers shared by the web client and the CLI.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Block explorer used for owner links.
pub const DEFAULT_EXPLORER_BASE: &str = "https://terrasco.pe/mainnet";

/// Explorer page for an address.
#[must_use]
pub fn explorer_address_url(base: &str, address: &str) -> String {
    format!("{}/address/{address}", base.trim_end_matches('/'))
}

/// Trait type with its first character upper-cased (`"background"` -> `"Background"`).
#[must_use]
pub fn display_trait_type(trait_type: &str) -> String {
    let mut chars = trait_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
