//! Wallet connection lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` is the capability surface of the external wallet SDK,
//! `connector` turns its capability lists into selector entries, and
//! `control` decides what the connect-wallet control shows and dispatches.
//! `browser` binds the provider surface to the page's injected bridge.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod connector;
pub mod control;
pub mod provider;

#[cfg(test)]
pub(crate) mod fake;
