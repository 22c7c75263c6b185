//! Clipboard access for copying the full caption.

use arboard::Clipboard;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors from the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    WriteFailed(String),
}

/// Write-only text sink. The system clipboard is the production sink;
/// tests substitute their own.
pub trait ClipboardSink {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Handler for the system clipboard.
pub struct ClipboardHandler {
    clipboard: Mutex<Clipboard>,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
        })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .lock()
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
