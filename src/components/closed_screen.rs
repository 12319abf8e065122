use leptos::prelude::*;

use crate::models::PortfolioState;

/// Shown after the terminal was dismissed; offers a way back.
#[component]
pub fn ClosedScreen() -> impl IntoView {
    let state = use_context::<PortfolioState>().expect("PortfolioState context missing");

    view! {
        <div class="terminal-closed">
            <p class="closed-message">"Terminal closed"</p>
            <button type="button" class="reopen-button" on:click=move |_| state.reopen()>
                "Reopen Terminal"
            </button>
        </div>
    }
}
