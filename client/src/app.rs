//! Root application component with routing and wallet wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{home::HomePage, my_account::MyAccountPage, token::TokenPage};
use crate::state::wallet::WalletState;
use crate::wallet::provider::default_provider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the wallet state signal and hands it, with the provider, to the
/// components that need it. The server and the first client render both
/// start from the default state, which renders no wallet control.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let provider = default_provider();
    let wallet = RwSignal::new(WalletState::default());

    #[cfg(feature = "hydrate")]
    {
        let provider = provider.clone();
        Effect::new(move || {
            wallet.set(WalletState::snapshot(provider.as_ref()));
            let provider = provider.clone();
            crate::wallet::browser::watch_changes(move || {
                let next = WalletState::snapshot(provider.as_ref());
                if wallet.get_untracked() != next {
                    wallet.set(next);
                }
            });
        });
    }

    let connected_address =
        Signal::derive(move || wallet.with(|state| state.connected_address().map(str::to_owned)));

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery.css"/>
        <Title text="Gallery"/>

        <Router>
            <NavBar wallet=wallet provider=provider/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("my-account")
                        view=move || view! { <MyAccountPage connected_address=connected_address/> }
                    />
                    <Route
                        path=(StaticSegment("token"), ParamSegment("id"))
                        view=move || view! { <TokenPage connected_address=connected_address/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
