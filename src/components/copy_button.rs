use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::clipboard::{self, ClipboardError};
use crate::models::{CopyFeedback, COPY_ACK_MS};
use crate::timer::{Scheduler, TimerSlot};

/// Copies `text` to the clipboard and briefly shows a "Copied!" acknowledgment.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: String,
) -> impl IntoView {
    debug_assert!(!text.trim().is_empty(), "CopyButton requires non-empty text");

    let copied = RwSignal::new(false);
    let reset_timer = SendWrapper::new(TimerSlot::new());

    let cleanup_timer = SendWrapper::new((*reset_timer).clone());
    on_cleanup(move || cleanup_timer.cancel());

    let on_click = move |_| {
        let text = text.clone();
        let reset_timer = (*reset_timer).clone();
        spawn_local(async move {
            copy_with_feedback(&text, copied, &reset_timer).await;
        });
    };

    let feedback = move || CopyFeedback::from_copied(copied.get());

    view! {
        <button
            type="button"
            class=move || feedback().css_class()
            on:click=on_click
            aria-label="Copy SSH command to clipboard"
        >
            <span class="button-icon">{move || feedback().icon()}</span>
            <span class="button-text">{move || feedback().label()}</span>
        </button>
    }
}

/// Write to the clipboard, then show the acknowledgment for [`COPY_ACK_MS`].
/// Failures are logged and otherwise ignored.
#[allow(clippy::future_not_send)]
async fn copy_with_feedback(text: &str, copied: RwSignal<bool>, reset_timer: &TimerSlot) {
    let result = clipboard::write_text(text).await;
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Failed to copy: {e}").into());
    }
    acknowledge_copy(&result, copied, reset_timer);
}

/// Flip `copied` on for [`COPY_ACK_MS`] after a successful write.
/// A repeated success restarts the window.
fn acknowledge_copy<S: Scheduler>(
    result: &Result<(), ClipboardError>,
    copied: RwSignal<bool>,
    reset_timer: &S,
) {
    if result.is_err() {
        return;
    }

    // The button may have been torn down while the write was pending
    if copied.try_set(true).is_some() {
        return;
    }

    reset_timer.schedule(COPY_ACK_MS, move || {
        // Disposed together with the button; nothing left to reset
        let _ = copied.try_set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::ManualScheduler;

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_ack_lasts_exactly_two_seconds() {
        with_owner(|| {
            let copied = RwSignal::new(false);
            let timer = ManualScheduler::new();

            acknowledge_copy(&Ok(()), copied, &timer);
            assert!(copied.get_untracked());

            timer.advance(u64::from(COPY_ACK_MS) - 1);
            assert!(copied.get_untracked());

            timer.advance(1);
            assert!(!copied.get_untracked());
            assert!(!timer.is_pending());
        });
    }

    #[test]
    fn test_second_copy_restarts_the_window() {
        with_owner(|| {
            let copied = RwSignal::new(false);
            let timer = ManualScheduler::new();

            acknowledge_copy(&Ok(()), copied, &timer);
            timer.advance(1500);
            acknowledge_copy(&Ok(()), copied, &timer);

            // 2500 ms after the first copy, 1000 ms after the second
            timer.advance(1000);
            assert!(copied.get_untracked());

            timer.advance(1000);
            assert!(!copied.get_untracked());
        });
    }

    #[test]
    fn test_rejected_write_leaves_ack_off() {
        with_owner(|| {
            let copied = RwSignal::new(false);
            let timer = ManualScheduler::new();

            let rejected = Err(ClipboardError::Rejected("NotAllowedError".to_string()));
            acknowledge_copy(&rejected, copied, &timer);
            assert!(!copied.get_untracked());
            assert!(!timer.is_pending());

            acknowledge_copy(&Err(ClipboardError::Unavailable), copied, &timer);
            assert!(!copied.get_untracked());
            assert!(!timer.is_pending());
        });
    }

    #[test]
    fn test_disposed_button_ignores_late_success() {
        with_owner(|| {
            let copied = RwSignal::new(false);
            let timer = ManualScheduler::new();

            copied.dispose();
            acknowledge_copy(&Ok(()), copied, &timer);
            assert!(!timer.is_pending());
        });
    }
}
