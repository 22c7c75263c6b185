//! Intents for the caption composer.

use crate::caption::{CaptionSections, ContentType};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the composer.
#[derive(Debug, Clone)]
pub enum ComposerIntent {
    /// User picked a content type.
    SelectContentType(ContentType),

    /// Replace the whole description (paste, programmatic edits).
    SetDescription(String),

    /// Append a typed character to the description.
    InsertChar(char),

    /// Append a line break to the description.
    InsertNewline,

    /// Remove the last character of the description.
    Backspace,

    /// User asked for a caption.
    GenerateRequested,

    /// A generation finished with a caption.
    GenerationSucceeded {
        request_id: u64,
        caption: CaptionSections,
    },

    /// A generation failed or timed out.
    GenerationFailed { request_id: u64, message: String },

    /// User dismissed the generation error.
    DismissError,

    /// The full caption reached the clipboard.
    CaptionCopied { ticks: u16 },

    /// Writing to the clipboard failed.
    CopyFailed { message: String, ticks: u16 },

    /// Scroll the output panel by `delta` rows, clamped to `0..=max`.
    ScrollOutput { delta: i32, max: u16 },

    /// Timer tick (spinner animation, notice expiry).
    Tick,

    FocusNext,

    FocusPrev,

    /// The view is going away.
    Teardown,
}

impl Intent for ComposerIntent {}
