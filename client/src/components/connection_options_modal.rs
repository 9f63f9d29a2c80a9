//! Modal listing the available wallet connectors.

use leptos::prelude::*;

use crate::wallet::connector::ConnectorOption;
use crate::wallet::control::select_option;
use crate::wallet::provider::WalletHandle;

/// Selection surface opened by the connect toggle. Choosing an option
/// dispatches its action and closes the modal.
#[component]
pub fn ConnectionOptionsModal(
    show: RwSignal<bool>,
    options: Vec<ConnectorOption>,
    provider: WalletHandle,
) -> impl IntoView {
    move || {
        show.get().then(|| {
            let rows = options
                .iter()
                .cloned()
                .map(|option| {
                    let provider = provider.clone();
                    let label = option.display_name.clone();
                    let logo = option.logo_src();
                    view! {
                        <button
                            class="connection-options__option"
                            type="button"
                            on:click=move |_| {
                                select_option(provider.as_ref(), &option);
                                show.set(false);
                            }
                        >
                            <img class="connection-options__logo" src=logo alt=""/>
                            <span class="connection-options__label">{label}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <div class="dialog-backdrop" on:click=move |_| show.set(false)>
                    <div class="dialog connection-options" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Connect wallet"</h2>
                        <div class="connection-options__list">{rows}</div>
                    </div>
                </div>
            }
        })
    }
}
