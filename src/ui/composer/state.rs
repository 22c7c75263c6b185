//! State for the caption composer.

use crate::caption::{CaptionSections, ContentType};
use crate::ui::mvi::UiState;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    ContentType,
    #[default]
    Description,
    Generate,
    Copy,
}

impl Field {
    const ORDER: [Field; 4] = [
        Field::ContentType,
        Field::Description,
        Field::Generate,
        Field::Copy,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub(super) fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub(super) fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Whether a generation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    /// Waiting for the result of request `request_id`.
    Generating { request_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient, non-blocking notification (clipboard results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Ticks left before the notice disappears.
    pub remaining_ticks: u16,
}

/// Everything the composer view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerState {
    pub content_type: ContentType,
    pub description: String,
    /// Last generated caption; replaced wholesale by each generation.
    pub caption: Option<CaptionSections>,
    pub generation: GenerationStatus,
    /// Id handed to the next generation request.
    pub next_request_id: u64,
    /// Last generation failure, shown until dismissed or a new generation starts.
    pub error: Option<String>,
    pub notice: Option<Notice>,
    /// First visible row of the output panel.
    pub output_scroll: u16,
    pub focus: Field,
    pub animation_tick: u8,
    /// Set on teardown; no further generations start or land.
    pub closed: bool,
}

impl UiState for ComposerState {}

impl ComposerState {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            ..Self::default()
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.generation, GenerationStatus::Generating { .. })
    }

    /// Request id currently in flight, if any.
    pub fn in_flight(&self) -> Option<u64> {
        match self.generation {
            GenerationStatus::Generating { request_id } => Some(request_id),
            GenerationStatus::Idle => None,
        }
    }

    /// The generate control is enabled only for a non-empty description
    /// with nothing in flight.
    pub fn can_generate(&self) -> bool {
        !self.closed && !self.description.is_empty() && !self.is_generating()
    }

    /// Copying is offered only once a caption exists.
    pub fn can_copy(&self) -> bool {
        self.caption.is_some()
    }
}
