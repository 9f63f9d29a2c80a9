use super::*;
use crate::wallet::connector::ConnectorAction;
use crate::wallet::fake::FakeProvider;

fn session(address: &str) -> WalletSession {
    WalletSession { terra_address: address.to_owned() }
}

// =============================================================
// ConnectedWallet
// =============================================================

#[test]
fn connected_wallet_rejects_blank_address() {
    assert!(ConnectedWallet::new("").is_none());
    assert!(ConnectedWallet::new("   ").is_none());
}

#[test]
fn connected_wallet_keeps_address() {
    let wallet = ConnectedWallet::new("terra1abc").unwrap();
    assert_eq!(wallet.wallet_address(), "terra1abc");
}

#[test]
fn connected_wallet_stores_address_verbatim() {
    let wallet = ConnectedWallet::new(" terra1abc ").unwrap();
    assert_eq!(wallet.wallet_address(), " terra1abc ");
}

#[test]
fn padded_connected_address_does_not_own_token() {
    let provider = FakeProvider::connected(" terra1abc");
    let state = WalletState::snapshot(&provider);
    assert_eq!(state.connected_address(), Some(" terra1abc"));
    assert!(!collectibles::is_owner(state.connected_address(), Some("terra1abc")));
}

// =============================================================
// WalletStatus::classify
// =============================================================

#[test]
fn classify_not_connected() {
    assert_eq!(WalletStatus::classify(ProviderStatus::WalletNotConnected, &[]), WalletStatus::NotConnected);
}

#[test]
fn classify_connected_uses_first_session() {
    let status = WalletStatus::classify(
        ProviderStatus::WalletConnected,
        &[session("terra1abc"), session("terra1xyz")],
    );
    assert_eq!(status, WalletStatus::Connected(ConnectedWallet::new("terra1abc").unwrap()));
}

#[test]
fn classify_connected_without_session_is_other() {
    assert_eq!(WalletStatus::classify(ProviderStatus::WalletConnected, &[]), WalletStatus::Other);
    assert_eq!(
        WalletStatus::classify(ProviderStatus::WalletConnected, &[session("")]),
        WalletStatus::Other
    );
}

#[test]
fn classify_initializing_and_unavailable_are_other() {
    assert_eq!(WalletStatus::classify(ProviderStatus::Initializing, &[]), WalletStatus::Other);
    assert_eq!(WalletStatus::classify(ProviderStatus::Unavailable, &[session("terra1abc")]), WalletStatus::Other);
}

// =============================================================
// WalletState
// =============================================================

#[test]
fn wallet_state_default_renders_nothing() {
    let state = WalletState::default();
    assert_eq!(state.status, WalletStatus::Other);
    assert!(state.options.is_empty());
    assert!(state.connected_address().is_none());
}

#[test]
fn snapshot_builds_options_from_provider_lists() {
    let provider = FakeProvider::not_connected(&["CHROME_EXTENSION", "READONLY"], &["CHROME_EXTENSION"]);
    let state = WalletState::snapshot(&provider);
    assert_eq!(state.status, WalletStatus::NotConnected);
    assert_eq!(state.options.len(), 2);
    assert_eq!(state.options[1].action, ConnectorAction::Install);
}

#[test]
fn snapshot_exposes_connected_address() {
    let provider = FakeProvider::connected("terra1abc");
    let state = WalletState::snapshot(&provider);
    assert_eq!(state.connected_address(), Some("terra1abc"));
}

#[test]
fn not_connected_exposes_no_address() {
    let provider = FakeProvider::not_connected(&["CHROME_EXTENSION"], &[]);
    assert!(WalletState::snapshot(&provider).connected_address().is_none());
}

#[test]
fn snapshot_is_stable_for_unchanged_provider() {
    let provider = FakeProvider::not_connected(&["CHROME_EXTENSION", "WALLETCONNECT"], &["CHROME_EXTENSION"]);
    assert_eq!(WalletState::snapshot(&provider), WalletState::snapshot(&provider));
}
