//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render gallery chrome and collectible views. Wallet state and
//! the wallet provider are passed in as props rather than read from context.

pub mod collection_grid;
pub mod connect_wallet;
pub mod connection_options_modal;
pub mod grid_item;
pub mod nav_bar;
pub mod nft_description;
