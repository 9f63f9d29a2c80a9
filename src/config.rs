//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LCD_URL: &str = "https://lcd.terra.dev";
pub const DEFAULT_LCD_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LCD_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PAGE_LIMIT: u32 = 30;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set or is blank.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub port: u16,
    pub lcd_url: String,
    pub cw721_contract: String,
    pub physicals_contract: Option<String>,
    pub timeouts: LcdTimeouts,
    pub page_limit: u32,
}

impl GalleryConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `CW721_CONTRACT`: address of the collection contract
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LCD_URL`: default `https://lcd.terra.dev`
    /// - `PHYSICALS_CONTRACT`: physical-print contract; physicals are empty without it
    /// - `LCD_REQUEST_TIMEOUT_SECS`: default 15
    /// - `LCD_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PAGE_LIMIT`: default listing size, clamped to `1..=100`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the contract is missing or `PORT` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_blank("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let lcd_url = non_blank("LCD_URL")
            .unwrap_or_else(|| DEFAULT_LCD_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let cw721_contract = non_blank("CW721_CONTRACT").ok_or(ConfigError::Missing { var: "CW721_CONTRACT" })?;
        let physicals_contract = non_blank("PHYSICALS_CONTRACT");
        let timeouts = LcdTimeouts {
            request_secs: env_parse_u64("LCD_REQUEST_TIMEOUT_SECS", DEFAULT_LCD_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LCD_CONNECT_TIMEOUT_SECS", DEFAULT_LCD_CONNECT_TIMEOUT_SECS),
        };
        let page_limit = clamp_page_limit(
            non_blank("PAGE_LIMIT")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(DEFAULT_PAGE_LIMIT),
        );

        Ok(Self { port, lcd_url, cw721_contract, physicals_contract, timeouts, page_limit })
    }
}

/// Clamp a listing size into `1..=MAX_PAGE_LIMIT`.
#[must_use]
pub fn clamp_page_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_PAGE_LIMIT)
}

fn non_blank(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
