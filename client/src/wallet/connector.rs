//! Connector options derived from the provider's capability lists.
//!
//! The mapping table is closed: tags without an entry contribute nothing to
//! the selector. Recomputing on the same lists yields the same options.

#[cfg(test)]
#[path = "connector_test.rs"]
mod connector_test;

use serde::{Deserialize, Serialize};

/// A wallet connection mechanism as tagged by the wallet provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectType {
    ChromeExtension,
    WalletConnect,
    /// Any tag this gallery has no mapping for; kept so it can be logged.
    Unknown(String),
}

impl ConnectType {
    /// Parse a provider tag such as `"CHROME_EXTENSION"`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CHROME_EXTENSION" => Self::ChromeExtension,
            "WALLETCONNECT" => Self::WalletConnect,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Provider tag passed back to `connect`/`install`.
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::ChromeExtension => "CHROME_EXTENSION",
            Self::WalletConnect => "WALLETCONNECT",
            Self::Unknown(tag) => tag,
        }
    }
}

/// What selecting a connector option does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorAction {
    Connect,
    Install,
}

/// One entry in the connection selection modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorOption {
    pub connect_type: ConnectType,
    pub display_name: String,
    pub action: ConnectorAction,
    /// Icon key, also used to derive the logo asset path.
    pub icon: String,
}

impl ConnectorOption {
    /// Logo asset for this option, e.g. `"/assets/terra-station-logo.png"`.
    #[must_use]
    pub fn logo_src(&self) -> String {
        format!("/assets/{}-logo.png", self.icon)
    }
}

/// Build the selector entries: connect options first, then install options,
/// each in provider order.
#[must_use]
pub fn connector_options(connect_types: &[ConnectType], install_types: &[ConnectType]) -> Vec<ConnectorOption> {
    let connect = connect_types.iter().filter_map(|ty| {
        let (display_name, icon) = connect_entry(ty)?;
        Some(ConnectorOption {
            connect_type: ty.clone(),
            display_name: display_name.to_owned(),
            action: ConnectorAction::Connect,
            icon: icon.to_owned(),
        })
    });
    let install = install_types.iter().filter_map(|ty| {
        let (display_name, icon) = install_entry(ty)?;
        Some(ConnectorOption {
            connect_type: ty.clone(),
            display_name: display_name.to_owned(),
            action: ConnectorAction::Install,
            icon: icon.to_owned(),
        })
    });
    connect.chain(install).collect()
}

fn connect_entry(ty: &ConnectType) -> Option<(&'static str, &'static str)> {
    match ty {
        ConnectType::ChromeExtension => Some(("Terra Station Wallet", "terra-station")),
        ConnectType::WalletConnect => Some(("Wallet Connect", "wallet-connect")),
        ConnectType::Unknown(tag) => {
            log::debug!("dropping unmapped connect type {tag}");
            None
        }
    }
}

fn install_entry(ty: &ConnectType) -> Option<(&'static str, &'static str)> {
    match ty {
        ConnectType::ChromeExtension => Some(("Install Terra Station Extension", "terra-station")),
        ConnectType::WalletConnect | ConnectType::Unknown(_) => {
            log::debug!("dropping unmapped install type {}", ty.as_tag());
            None
        }
    }
}
