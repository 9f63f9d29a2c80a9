//! Scripted provider for unit tests.

use std::sync::Mutex;

use super::connector::ConnectType;
use super::provider::{ProviderStatus, WalletProvider, WalletSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Connect(ConnectType),
    Install(ConnectType),
    Disconnect,
}

#[derive(Default)]
pub(crate) struct FakeProvider {
    pub status: ProviderStatus,
    pub connect_types: Vec<ConnectType>,
    pub install_types: Vec<ConnectType>,
    pub wallets: Vec<WalletSession>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub fn not_connected(connect: &[&str], install: &[&str]) -> Self {
        Self {
            status: ProviderStatus::WalletNotConnected,
            connect_types: connect.iter().map(|t| ConnectType::from_tag(t)).collect(),
            install_types: install.iter().map(|t| ConnectType::from_tag(t)).collect(),
            ..Self::default()
        }
    }

    pub fn connected(address: &str) -> Self {
        Self {
            status: ProviderStatus::WalletConnected,
            wallets: vec![WalletSession { terra_address: address.to_owned() }],
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl WalletProvider for FakeProvider {
    fn status(&self) -> ProviderStatus {
        self.status
    }

    fn available_connect_types(&self) -> Vec<ConnectType> {
        self.connect_types.clone()
    }

    fn available_install_types(&self) -> Vec<ConnectType> {
        self.install_types.clone()
    }

    fn wallets(&self) -> Vec<WalletSession> {
        self.wallets.clone()
    }

    fn connect(&self, connect_type: &ConnectType) {
        self.record(Call::Connect(connect_type.clone()));
    }

    fn install(&self, connect_type: &ConnectType) {
        self.record(Call::Install(connect_type.clone()));
    }

    fn disconnect(&self) {
        self.record(Call::Disconnect);
    }
}
