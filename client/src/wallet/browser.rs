//! Bridge to the wallet provider injected into the host page.
//!
//! The page exposes `window.galleryWallet` with the provider's current
//! `status`, `availableConnectTypes`, `availableInstallTypes`, and `wallets`
//! (each carrying `terraAddress`), plus `connect(type)`, `install(type)`, and
//! `disconnect()`. After every change it dispatches `gallery-wallet-change`
//! on `window`. Properties are read on each call so no JS handle is held.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::connector::ConnectType;
use super::provider::{ProviderStatus, WalletProvider, WalletSession};

const BRIDGE_KEY: &str = "galleryWallet";

/// Window event fired by the bridge after any status or session change.
pub const CHANGE_EVENT: &str = "gallery-wallet-change";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWalletProvider;

impl WalletProvider for BrowserWalletProvider {
    fn status(&self) -> ProviderStatus {
        // A browser without the bridge behaves like a provider with nothing to offer.
        bridge()
            .and_then(|b| read_string(&b, "status"))
            .map_or(ProviderStatus::WalletNotConnected, |tag| ProviderStatus::from_tag(&tag))
    }

    fn available_connect_types(&self) -> Vec<ConnectType> {
        bridge().map_or_else(Vec::new, |b| read_tags(&b, "availableConnectTypes"))
    }

    fn available_install_types(&self) -> Vec<ConnectType> {
        bridge().map_or_else(Vec::new, |b| read_tags(&b, "availableInstallTypes"))
    }

    fn wallets(&self) -> Vec<WalletSession> {
        let Some(bridge) = bridge() else {
            return Vec::new();
        };
        let Ok(value) = Reflect::get(&bridge, &JsValue::from_str("wallets")) else {
            return Vec::new();
        };
        if !Array::is_array(&value) {
            return Vec::new();
        }
        Array::from(&value)
            .iter()
            .filter_map(|session| read_string(&session, "terraAddress"))
            .map(|terra_address| WalletSession { terra_address })
            .collect()
    }

    fn connect(&self, connect_type: &ConnectType) {
        invoke("connect", Some(connect_type.as_tag()));
    }

    fn install(&self, connect_type: &ConnectType) {
        invoke("install", Some(connect_type.as_tag()));
    }

    fn disconnect(&self) {
        invoke("disconnect", None);
    }
}

/// Run `on_change` whenever the bridge reports a change.
pub fn watch_changes(on_change: impl Fn() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn Fn()>::new(on_change);
    if window
        .add_event_listener_with_callback(CHANGE_EVENT, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to subscribe to {CHANGE_EVENT}");
    }
    // The listener lives as long as the page.
    closure.forget();
}

fn bridge() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&JsValue::from(window), &JsValue::from_str(BRIDGE_KEY)).ok()?;
    if value.is_undefined() || value.is_null() { None } else { Some(value) }
}

fn read_string(target: &JsValue, key: &str) -> Option<String> {
    Reflect::get(target, &JsValue::from_str(key)).ok()?.as_string()
}

fn read_tags(target: &JsValue, key: &str) -> Vec<ConnectType> {
    let Ok(value) = Reflect::get(target, &JsValue::from_str(key)) else {
        return Vec::new();
    };
    if !Array::is_array(&value) {
        return Vec::new();
    }
    Array::from(&value)
        .iter()
        .filter_map(|tag| tag.as_string())
        .map(|tag| ConnectType::from_tag(&tag))
        .collect()
}

fn invoke(method: &str, arg: Option<&str>) {
    let Some(bridge) = bridge() else {
        log::warn!("wallet bridge missing; {method} ignored");
        return;
    };
    let Some(func) = Reflect::get(&bridge, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        log::warn!("wallet bridge has no {method} function");
        return;
    };
    let result = match arg {
        Some(arg) => func.call1(&bridge, &JsValue::from_str(arg)),
        None => func.call0(&bridge),
    };
    if let Err(err) = result {
        log::warn!("wallet bridge {method} failed: {err:?}");
    }
}
