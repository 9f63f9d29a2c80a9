//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and the chain data source behind the
//! [`NftSource`] trait so tests can swap in a mock.

use std::sync::Arc;

use crate::config::GalleryConfig;
use crate::lcd::NftSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn NftSource>,
    pub config: Arc<GalleryConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn NftSource>, config: GalleryConfig) -> Self {
        Self { source, config: Arc::new(config) }
    }
}
