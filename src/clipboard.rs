use leptos::tachys::dom::window;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text_js(text: &str) -> Result<JsValue, JsValue>;
}

/// Why a clipboard write did not happen.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// `navigator.clipboard` is missing (insecure context or old browser)
    #[error("clipboard API unavailable")]
    Unavailable,
    /// The write promise rejected (e.g. permission denied)
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

impl ClipboardError {
    fn from_rejection(err: &JsValue) -> Self {
        let reason = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        Self::Rejected(reason)
    }
}

fn clipboard_available() -> bool {
    js_sys::Reflect::get(&window().navigator(), &JsValue::from_str("clipboard"))
        .is_ok_and(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
}

/// Write `text` to the system clipboard.
#[allow(clippy::future_not_send)]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    if !clipboard_available() {
        return Err(ClipboardError::Unavailable);
    }

    write_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::from_rejection(&e))
}
