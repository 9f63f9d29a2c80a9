//! Client-side reactive state.

pub mod wallet;
