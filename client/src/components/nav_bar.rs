use leptos::prelude::*;

use crate::components::connect_wallet::ConnectWallet;
use crate::state::wallet::WalletState;
use crate::wallet::provider::WalletHandle;

#[component]
pub fn NavBar(#[prop(into)] wallet: Signal<WalletState>, provider: WalletHandle) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Gallery"</a>
            <div class="navbar__links">
                <a href="/">"Collection"</a>
                <a href="/my-account">"My Account"</a>
            </div>
            <ConnectWallet wallet=wallet provider=provider/>
        </nav>
    }
}
