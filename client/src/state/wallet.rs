#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use crate::wallet::connector::{ConnectorOption, connector_options};
use crate::wallet::provider::{ProviderStatus, WalletProvider, WalletSession};

/// A connected wallet. The address is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectedWallet {
    wallet_address: String,
}

impl ConnectedWallet {
    /// Returns `None` for a blank address. The address is stored verbatim.
    #[must_use]
    pub fn new(wallet_address: &str) -> Option<Self> {
        if wallet_address.trim().is_empty() {
            return None;
        }
        Some(Self { wallet_address: wallet_address.to_owned() })
    }

    #[must_use]
    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }
}

/// Connection status as the gallery sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletStatus {
    NotConnected,
    Connected(ConnectedWallet),
    /// Initializing, unavailable, or a connected status with no usable session.
    #[default]
    Other,
}

impl WalletStatus {
    /// Classify a provider status; `Connected` takes the first session's address.
    #[must_use]
    pub fn classify(status: ProviderStatus, wallets: &[WalletSession]) -> Self {
        match status {
            ProviderStatus::WalletNotConnected => Self::NotConnected,
            ProviderStatus::WalletConnected => wallets
                .first()
                .and_then(|session| ConnectedWallet::new(&session.terra_address))
                .map_or(Self::Other, Self::Connected),
            ProviderStatus::Initializing | ProviderStatus::Unavailable => Self::Other,
        }
    }
}

/// Snapshot of the wallet provider taken after every change notification.
///
/// The default is `Other` with no options, which renders nothing; this is
/// also what the server renders before the browser bridge is read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub status: WalletStatus,
    pub options: Vec<ConnectorOption>,
}

impl WalletState {
    #[must_use]
    pub fn snapshot(provider: &dyn WalletProvider) -> Self {
        let status = WalletStatus::classify(provider.status(), &provider.wallets());
        let options = connector_options(&provider.available_connect_types(), &provider.available_install_types());
        Self { status, options }
    }

    /// Address of the connected wallet, if any.
    #[must_use]
    pub fn connected_address(&self) -> Option<&str> {
        match &self.status {
            WalletStatus::Connected(wallet) => Some(wallet.wallet_address()),
            WalletStatus::NotConnected | WalletStatus::Other => None,
        }
    }
}
