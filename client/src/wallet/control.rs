//! Connect-wallet control decisions.
//!
//! The control has no state of its own beyond the modal toggle: what it
//! shows is a pure function of the latest [`WalletState`], and its actions
//! forward straight to the provider.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use super::connector::{ConnectorAction, ConnectorOption};
use super::provider::WalletProvider;
use crate::state::wallet::{WalletState, WalletStatus};

/// Route the user lands on after disconnecting.
pub const HOME_ROUTE: &str = "/";

/// Shown when the provider offers no way to connect.
pub const FALLBACK_MESSAGE: &str = "Please use a web browser that is compatible with terra station extension.";

/// What the connect-wallet control renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlView {
    /// "Connect wallet" toggle opening the option list.
    Selector(Vec<ConnectorOption>),
    /// No connector available.
    Fallback,
    /// The connected address; activating it disconnects.
    Address(String),
    Hidden,
}

impl ControlView {
    #[must_use]
    pub fn from_state(state: &WalletState) -> Self {
        match &state.status {
            WalletStatus::NotConnected if state.options.is_empty() => Self::Fallback,
            WalletStatus::NotConnected => Self::Selector(state.options.clone()),
            WalletStatus::Connected(wallet) => Self::Address(wallet.wallet_address().to_owned()),
            WalletStatus::Other => Self::Hidden,
        }
    }
}

/// Invoke the option's action with its connector tag.
pub fn select_option(provider: &dyn WalletProvider, option: &ConnectorOption) {
    log::info!("wallet {:?} via {}", option.action, option.connect_type.as_tag());
    match option.action {
        ConnectorAction::Connect => provider.connect(&option.connect_type),
        ConnectorAction::Install => provider.install(&option.connect_type),
    }
}

/// Disconnect, then navigate home regardless of the outcome.
pub fn disconnect_and_return_home(provider: &dyn WalletProvider, navigate: impl FnOnce(&str)) {
    log::info!("wallet disconnect requested");
    provider.disconnect();
    navigate(HOME_ROUTE);
}
