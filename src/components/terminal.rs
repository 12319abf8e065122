use leptos::prelude::*;

/// Decorative terminal window: traffic-light controls, a title bar and a body
/// that renders whatever it is given.
#[component]
pub fn Terminal(
    /// Text shown in the title bar
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="terminal-window">
            <div class="terminal-header">
                <div class="window-controls">
                    <span class="control close"></span>
                    <span class="control minimize"></span>
                    <span class="control maximize"></span>
                </div>
                <div class="terminal-title">{title}</div>
            </div>
            <div class="terminal-body">
                {children()}
            </div>
        </div>
    }
}
