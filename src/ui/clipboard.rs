//! Clipboard writer. Copy failures are recorded in the internal log and
//! otherwise swallowed: the only visible effect is a missing "Copied".

use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use arboard::Clipboard;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// The desktop clipboard, opened on demand.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        let mut clipboard = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Copy `text` and confirm on success. Returns whether the copy happened.
pub fn copy_text(sink: &mut dyn ClipboardSink, text: &str, store: &dyn KvStore) -> bool {
    match sink.write_text(text) {
        Ok(()) => {
            store.log("copy", "clipboard", text);
            success("Copied");
            true
        }
        Err(e) => {
            store.log("copy_failed", "clipboard", &e.to_string());
            false
        }
    }
}
