//! Clipboard writes for copy affordances.

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors surfaced by [`copy_text`].
pub enum ClipboardError {
    /// No `window` is available (non-browser host).
    #[error("no browser window is available")]
    NoWindow,
    /// The browser rejected the write (permissions, insecure context).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Writes `text` to the system clipboard.
pub async fn copy_text(text: String) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(&text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
}
