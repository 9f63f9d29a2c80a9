//! Collectible JSON endpoints.

#[cfg(test)]
#[path = "nfts_test.rs"]
mod nfts_test;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use collectibles::{NftDetail, NftInfo};
use serde::Deserialize;

use crate::lcd::types::LcdError;
use crate::services::collection::{self, PageRequest};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub start_after: Option<String>,
    pub limit: Option<u32>,
}

impl ListParams {
    fn into_page(self) -> Result<PageRequest, StatusCode> {
        if self.limit == Some(0) {
            return Err(StatusCode::BAD_REQUEST);
        }
        Ok(PageRequest { start_after: self.start_after, limit: self.limit })
    }
}

pub(crate) fn lcd_error_to_status(err: &LcdError) -> StatusCode {
    match err {
        LcdError::NotFound(_) => StatusCode::NOT_FOUND,
        LcdError::Request(_) | LcdError::Response { .. } | LcdError::Parse(_) => StatusCode::BAD_GATEWAY,
        LcdError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(err: &LcdError, op: &'static str) -> StatusCode {
    let status = lcd_error_to_status(err);
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(error = %err, op, "lookup miss");
    } else {
        tracing::warn!(error = %err, op, "LCD query failed");
    }
    status
}

/// `GET /api/nfts`
pub async fn list_collection(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<NftInfo>>, StatusCode> {
    let page = params.into_page()?;
    collection::load_collection(state.source.as_ref(), &state.config, &page)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "list_collection"))
}

/// `GET /api/wallets/{address}/nfts`
pub async fn list_owned(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<NftInfo>>, StatusCode> {
    let address = address.trim();
    if address.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let page = params.into_page()?;
    collection::load_owned(state.source.as_ref(), &state.config, address, &page)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "list_owned"))
}

/// `GET /api/nfts/{token_id}`
pub async fn get_nft(
    State(state): State<AppState>,
    Path(token_id): Path<String>,
) -> Result<Json<NftDetail>, StatusCode> {
    collection::load_detail(state.source.as_ref(), &state.config, &token_id)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "get_nft"))
}
