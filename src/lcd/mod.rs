//! LCD client for CosmWasm smart queries.
//!
//! DESIGN
//! ======
//! All chain reads go through the [`NftSource`] trait so services can be
//! tested against an in-memory mock. [`LcdClient`] is the HTTP
//! implementation: a thin wrapper over the LCD `store` endpoint. Typed
//! query helpers live in `queries`.

#[cfg(test)]
pub(crate) mod mock;
pub mod queries;
pub mod types;

#[cfg(test)]
#[path = "lcd_test.rs"]
mod lcd_test;

use std::time::Duration;

use serde_json::Value;
use types::{LcdError, SmartQueryResponse};

use crate::config::LcdTimeouts;

/// Source of contract query results.
#[async_trait::async_trait]
pub trait NftSource: Send + Sync {
    /// Run a smart query against `contract` and return its `result` payload.
    ///
    /// # Errors
    ///
    /// Returns an [`LcdError`] if the request fails, the item does not
    /// exist, or the response is malformed.
    async fn smart_query(&self, contract: &str, msg: &Value) -> Result<Value, LcdError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct LcdClient {
    http: reqwest::Client,
    base_url: String,
}

impl LcdClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: LcdTimeouts) -> Result<Self, LcdError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LcdError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl NftSource for LcdClient {
    async fn smart_query(&self, contract: &str, msg: &Value) -> Result<Value, LcdError> {
        let url = store_url(&self.base_url, contract);
        let query_msg = msg.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("query_msg", query_msg.as_str())])
            .send()
            .await
            .map_err(|e| LcdError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LcdError::Request(e.to_string()))?;

        if status != 200 {
            tracing::debug!(%contract, status, "LCD query rejected");
            return Err(LcdError::from_status(status, text));
        }

        parse_store_response(&text)
    }
}

/// `{base}/wasm/contracts/{contract}/store`
#[must_use]
pub fn store_url(base_url: &str, contract: &str) -> String {
    format!("{}/wasm/contracts/{contract}/store", base_url.trim_end_matches('/'))
}

/// Unwrap the `result` field of a store response body.
///
/// # Errors
///
/// Returns [`LcdError::Parse`] if the body is not a store envelope.
pub fn parse_store_response(body: &str) -> Result<Value, LcdError> {
    let envelope: SmartQueryResponse = serde_json::from_str(body).map_err(|e| LcdError::Parse(e.to_string()))?;
    Ok(envelope.result)
}
