use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_guard()` so env mutation does not race.
unsafe fn clear_gallery_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("LCD_URL");
        std::env::remove_var("CW721_CONTRACT");
        std::env::remove_var("PHYSICALS_CONTRACT");
        std::env::remove_var("LCD_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LCD_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("PAGE_LIMIT");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_guard();
    unsafe {
        clear_gallery_env();
        std::env::set_var("CW721_CONTRACT", "terra1collection");
    }

    let cfg = GalleryConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.lcd_url, DEFAULT_LCD_URL);
    assert_eq!(cfg.cw721_contract, "terra1collection");
    assert!(cfg.physicals_contract.is_none());
    assert_eq!(
        cfg.timeouts,
        LcdTimeouts { request_secs: DEFAULT_LCD_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LCD_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.page_limit, DEFAULT_PAGE_LIMIT);

    unsafe { clear_gallery_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_gallery_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("LCD_URL", "https://lcd.example.test/");
        std::env::set_var("CW721_CONTRACT", "terra1collection");
        std::env::set_var("PHYSICALS_CONTRACT", "terra1physicals");
        std::env::set_var("LCD_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("LCD_CONNECT_TIMEOUT_SECS", "2");
        std::env::set_var("PAGE_LIMIT", "500");
    }

    let cfg = GalleryConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.lcd_url, "https://lcd.example.test");
    assert_eq!(cfg.physicals_contract.as_deref(), Some("terra1physicals"));
    assert_eq!(cfg.timeouts, LcdTimeouts { request_secs: 30, connect_secs: 2 });
    assert_eq!(cfg.page_limit, MAX_PAGE_LIMIT);

    unsafe { clear_gallery_env() };
}

#[test]
fn from_env_requires_collection_contract() {
    let _guard = env_guard();
    unsafe {
        clear_gallery_env();
        std::env::set_var("CW721_CONTRACT", "  ");
    }

    let err = GalleryConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "CW721_CONTRACT" }));

    unsafe { clear_gallery_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_gallery_env();
        std::env::set_var("CW721_CONTRACT", "terra1collection");
        std::env::set_var("PORT", "http");
    }

    let err = GalleryConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("PORT"));

    unsafe { clear_gallery_env() };
}

#[test]
fn clamp_page_limit_bounds() {
    assert_eq!(clamp_page_limit(0), 1);
    assert_eq!(clamp_page_limit(30), 30);
    assert_eq!(clamp_page_limit(101), MAX_PAGE_LIMIT);
}
