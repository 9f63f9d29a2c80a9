//! LCD wire types and errors.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LCD queries.
#[derive(Debug, thiserror::Error)]
pub enum LcdError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the LCD failed.
    #[error("LCD request failed: {0}")]
    Request(String),

    /// The contract reported that the queried item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The LCD returned a non-success HTTP status.
    #[error("LCD response error: status {status}")]
    Response { status: u16, body: String },

    /// The LCD response body could not be interpreted.
    #[error("LCD response parse failed: {0}")]
    Parse(String),
}

impl LcdError {
    /// Classify a non-success LCD response. Contract lookups for missing
    /// items surface as an error status whose body mentions "not found".
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 404 || body.to_ascii_lowercase().contains("not found") {
            return Self::NotFound(body);
        }
        Self::Response { status, body }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Envelope of `GET /wasm/contracts/{addr}/store`.
#[derive(Debug, Deserialize)]
pub struct SmartQueryResponse {
    pub result: Value,
}

/// Result of cw721 `all_tokens` and `tokens`.
#[derive(Debug, Deserialize)]
pub struct TokensResponse {
    #[serde(default)]
    pub tokens: Vec<String>,
}

/// Result of the print contract's `tier_info`.
#[derive(Debug, Deserialize)]
pub struct TierInfoResponse {
    pub max_physical_limit: u8,
    pub cost: Value,
}

/// Result of the print contract's `cw721_physicals`.
#[derive(Debug, Deserialize)]
pub struct PhysicalsResponse {
    #[serde(default)]
    pub physicals: Vec<Value>,
}

/// Result of the print contract's `get_cw721_physical_info`.
#[derive(Debug, Deserialize)]
pub struct PhysicalInfoResponse {
    pub physical: PhysicalWire,
}

#[derive(Debug, Deserialize)]
pub struct PhysicalWire {
    pub id: Value,
    pub token_id: String,
    #[serde(default)]
    pub owner: String,
    pub tier: Value,
    #[serde(default)]
    pub status: String,
}

/// Read an integer that may be encoded as a JSON number or a decimal string.
pub fn number_or_string(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Render a JSON value as an id string, without quotes for strings.
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
