use leptos::ev;
use leptos::prelude::*;
use leptos::tachys::dom::window;
use send_wrapper::SendWrapper;

use crate::components::{CopyButton, Terminal, TypedLines};
use crate::config::SiteConfig;
use crate::models::{should_close, KeyPress, PortfolioState, SessionState};

/// One open terminal: intro animation, revealed command, close-chord listener.
///
/// Mounted fresh every time the terminal is (re)opened.
#[component]
pub fn TerminalSession() -> impl IntoView {
    let state = use_context::<PortfolioState>().expect("PortfolioState context missing");
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let session = SessionState::new();

    // Window-level listener lives exactly as long as this session
    let keydown = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        let press = KeyPress {
            key: &key,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        };
        if should_close(press, &current_selection(), state.is_closed_untracked()) {
            ev.prevent_default();
            state.close();
        }
    });
    let keydown = SendWrapper::new(keydown);
    on_cleanup(move || keydown.take().remove());

    let on_complete = Callback::new(move |()| {
        session.mark_typing_complete();
    });

    let SiteConfig {
        title,
        ssh_command,
        help_url,
        password_hint,
        type_speed_ms,
        script,
    } = config;

    view! {
        <Terminal title=title>
            <div class="terminal-content">
                <TypedLines script=script type_speed_ms=type_speed_ms on_complete=on_complete />
                <Show when=move || session.is_typing_complete()>
                    <CommandReveal
                        ssh_command=ssh_command.clone()
                        help_url=help_url.clone()
                        password_hint=password_hint.clone()
                    />
                </Show>
            </div>
            <div class="terminal-footer">
                <span class="footer-hint">"Press Ctrl+C to exit"</span>
            </div>
        </Terminal>
    }
}

/// Command line, copy control and help text shown after the intro.
#[component]
fn CommandReveal(
    ssh_command: String,
    help_url: String,
    password_hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="ssh-command-section">
            <div class="command-line">
                <span class="prompt">"$"</span>
                <span class="command">{ssh_command.clone()}</span>
            </div>
            {password_hint.map(|hint| view! { <div class="password-hint">{hint}</div> })}
            <div class="button-container">
                <CopyButton text=ssh_command />
            </div>
            <div class="help-text">
                <p>
                    "Need help? Check the "
                    <a href=help_url target="_blank" rel="noopener noreferrer">"README"</a>
                </p>
            </div>
        </div>
    }
}

/// Text currently selected in the document, empty when nothing is selected.
fn current_selection() -> String {
    window()
        .get_selection()
        .ok()
        .flatten()
        .map(|selection| String::from(selection.to_string()))
        .unwrap_or_default()
}
