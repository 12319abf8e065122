use std::cell::RefCell;
use std::rc::Rc;

use leptos::tachys::dom::window;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A pending `setTimeout`. Dropping it clears the timeout.
pub struct Timeout {
    handle: i32,
    // Keeps the callback alive until the timeout fires or is cleared
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let callback: Closure<dyn FnMut()> = Closure::once(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        let handle = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )?;

        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        window().clear_timeout_with_handle(self.handle);
    }
}

/// A single cancellable timer for one concern.
///
/// Scheduling replaces (and cancels) whatever was pending.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static);
    fn cancel(&self);
}

/// Holds at most one pending [`Timeout`] for a single concern.
///
/// Scheduling replaces (and cancels) whatever was pending. Clones share the slot.
#[derive(Clone, Default)]
pub struct TimerSlot(Rc<RefCell<Option<Timeout>>>);

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TimerSlot {
    /// Arm the slot. Failures are logged and leave the slot empty.
    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let previous = self.0.borrow_mut().take();
        drop(previous);

        match Timeout::schedule(delay_ms, callback) {
            Ok(timeout) => {
                *self.0.borrow_mut() = Some(timeout);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to schedule timer: {e:?}").into());
            }
        }
    }

    fn cancel(&self) {
        let pending = self.0.borrow_mut().take();
        drop(pending);
    }
}
