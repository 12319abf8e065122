use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::models::{Tick, Typewriter, TypingScript};
use crate::timer::{Scheduler, TimerSlot};

/// Plays the intro script once, then runs `on_complete`.
///
/// Rendering is driven by a signal; unmounting cancels the pending tick so
/// nothing fires after teardown.
#[component]
pub fn TypedLines(
    /// Script lines, may contain `^<ms>` pause markers
    script: Vec<String>,
    /// Delay between typed characters
    type_speed_ms: u32,
    on_complete: Callback<()>,
) -> impl IntoView {
    let typed = RwSignal::new(String::new());
    let full_text = start_typing(
        TimerSlot::new(),
        &script,
        type_speed_ms,
        typed,
        on_complete,
    );

    view! {
        <div class="typed-lines" aria-label=full_text>
            <span class="typed-text" aria-hidden="true">{move || typed.get()}</span>
        </div>
    }
}

/// Start the animation under the current owner and return the full text.
/// Cleaning up the owner cancels the pending tick.
fn start_typing<S: Scheduler>(
    timer: S,
    script: &[String],
    type_speed_ms: u32,
    typed: RwSignal<String>,
    on_complete: Callback<()>,
) -> String {
    let script = TypingScript::parse(script);
    let full_text = script.plain_text();
    let typewriter = Rc::new(RefCell::new(Typewriter::new(script, type_speed_ms)));

    schedule_tick(&timer, type_speed_ms, typewriter, typed, on_complete);

    let cleanup_timer = SendWrapper::new(timer);
    on_cleanup(move || cleanup_timer.cancel());

    full_text
}

fn schedule_tick<S: Scheduler>(
    timer: &S,
    delay_ms: u32,
    typewriter: Rc<RefCell<Typewriter>>,
    typed: RwSignal<String>,
    on_complete: Callback<()>,
) {
    let slot = timer.clone();
    timer.schedule(delay_ms, move || {
        let tick = typewriter.borrow_mut().advance();

        if let Tick::Typed { .. } = tick {
            typed.set(typewriter.borrow().rendered().to_string());
        }

        match tick.next_delay() {
            Some(next) => schedule_tick(&slot, next, typewriter, typed, on_complete),
            None if tick == Tick::Complete => on_complete.run(()),
            None => {}
        }
    });
}
