//! Connect-wallet control shown in the navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::connection_options_modal::ConnectionOptionsModal;
use crate::state::wallet::WalletState;
use crate::wallet::control::{ControlView, FALLBACK_MESSAGE, disconnect_and_return_home};
use crate::wallet::provider::WalletHandle;

/// Renders one of: a "Connect wallet" toggle with its option modal, the
/// fallback notice, the connected address (click to disconnect), or nothing.
#[component]
pub fn ConnectWallet(#[prop(into)] wallet: Signal<WalletState>, provider: WalletHandle) -> impl IntoView {
    let navigate = use_navigate();
    let show_modal = RwSignal::new(false);
    let control = Memo::new(move |_| ControlView::from_state(&wallet.get()));

    let on_disconnect = {
        let provider = provider.clone();
        move |_| {
            show_modal.set(false);
            disconnect_and_return_home(provider.as_ref(), |path| navigate(path, NavigateOptions::default()));
        }
    };

    view! {
        <div class="connect-wallet">
            {move || match control.get() {
                ControlView::Selector(options) => {
                    let provider = provider.clone();
                    view! {
                        <button class="btn connect-wallet__toggle" type="button" on:click=move |_| show_modal.update(|s| *s = !*s)>
                            <span class="connect-wallet__text">"Connect wallet"</span>
                        </button>
                        <ConnectionOptionsModal show=show_modal options=options provider=provider/>
                    }
                        .into_any()
                }
                ControlView::Fallback => {
                    view! { <div class="connect-wallet__fallback">{FALLBACK_MESSAGE}</div> }.into_any()
                }
                ControlView::Address(address) => {
                    let on_disconnect = on_disconnect.clone();
                    view! {
                        <button
                            class="btn connect-wallet__address"
                            type="button"
                            title="Disconnect wallet"
                            on:click=on_disconnect
                        >
                            <span class="connect-wallet__text">{address}</span>
                        </button>
                    }
                        .into_any()
                }
                ControlView::Hidden => ().into_any(),
            }}
        </div>
    }
}
