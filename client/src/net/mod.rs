//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls the gallery server's JSON endpoints; the response types come
//! from the shared `collectibles` crate.

pub mod api;
