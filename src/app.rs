use leptos::prelude::*;

use crate::components::{ClosedScreen, TerminalSession};
use crate::config::SiteConfig;
use crate::models::PortfolioState;

/// Root application component that provides global context and switches
/// between the open terminal and the closed screen.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Using default site config: {e}").into());
        SiteConfig::default()
    });
    let state = PortfolioState::new();

    // Provide context to all child components
    provide_context(config);
    provide_context(state);

    view! {
        <main class="app">
            <Show when=move || !state.is_closed() fallback=|| view! { <ClosedScreen /> }>
                <TerminalSession />
            </Show>
        </main>
    }
}
