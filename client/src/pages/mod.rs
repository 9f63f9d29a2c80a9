//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching and delegates rendering details to
//! `components`. Wallet state arrives as props from `app::App`.

pub mod home;
pub mod my_account;
pub mod token;
