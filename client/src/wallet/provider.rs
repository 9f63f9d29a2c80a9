//! Wallet provider capability surface.
//!
//! The provider owns the connection lifecycle; the gallery only reads its
//! status and forwards user intents. `connect`, `install`, and `disconnect`
//! return immediately and their outcome is observed through the next
//! status snapshot, never through a return value.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::Arc;

use super::connector::ConnectType;

/// Raw connection status as reported by the wallet provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderStatus {
    #[default]
    Initializing,
    WalletNotConnected,
    WalletConnected,
    Unavailable,
}

impl ProviderStatus {
    /// Parse a provider status tag such as `"WALLET_CONNECTED"`.
    ///
    /// Unknown tags map to [`ProviderStatus::Unavailable`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "INITIALIZING" => Self::Initializing,
            "WALLET_NOT_CONNECTED" => Self::WalletNotConnected,
            "WALLET_CONNECTED" => Self::WalletConnected,
            _ => Self::Unavailable,
        }
    }
}

/// An active wallet session exposed by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    pub terra_address: String,
}

/// Capabilities consumed from the wallet-connection SDK.
pub trait WalletProvider: Send + Sync {
    fn status(&self) -> ProviderStatus;

    /// Connector tags that can connect right now.
    fn available_connect_types(&self) -> Vec<ConnectType>;

    /// Connector tags that need installing first.
    fn available_install_types(&self) -> Vec<ConnectType>;

    /// Active sessions; the first one is the connected wallet.
    fn wallets(&self) -> Vec<WalletSession>;

    fn connect(&self, connect_type: &ConnectType);

    fn install(&self, connect_type: &ConnectType);

    fn disconnect(&self);
}

/// Shared handle passed to components that dispatch wallet actions.
pub type WalletHandle = Arc<dyn WalletProvider>;

/// Provider used where no browser wallet can exist (server rendering).
///
/// Reports `Initializing` forever and ignores every action.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedProvider;

impl WalletProvider for DetachedProvider {
    fn status(&self) -> ProviderStatus {
        ProviderStatus::Initializing
    }

    fn available_connect_types(&self) -> Vec<ConnectType> {
        Vec::new()
    }

    fn available_install_types(&self) -> Vec<ConnectType> {
        Vec::new()
    }

    fn wallets(&self) -> Vec<WalletSession> {
        Vec::new()
    }

    fn connect(&self, connect_type: &ConnectType) {
        log::warn!("connect({}) ignored: no wallet provider attached", connect_type.as_tag());
    }

    fn install(&self, connect_type: &ConnectType) {
        log::warn!("install({}) ignored: no wallet provider attached", connect_type.as_tag());
    }

    fn disconnect(&self) {
        log::warn!("disconnect ignored: no wallet provider attached");
    }
}

/// Provider for the current build target: the injected browser bridge when
/// hydrating, otherwise [`DetachedProvider`].
#[must_use]
pub fn default_provider() -> WalletHandle {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(super::browser::BrowserWalletProvider)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(DetachedProvider)
    }
}
