//! Caption domain types: content types, the four caption sections and the
//! request handed to a generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator placed between sections when the caption is flattened.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Kind of post the caption is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Photo,
    Video,
    Carousel,
    Reel,
}

impl ContentType {
    /// Selector order.
    pub const ALL: [ContentType; 4] = [
        ContentType::Photo,
        ContentType::Video,
        ContentType::Carousel,
        ContentType::Reel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Photo => "photo",
            ContentType::Video => "video",
            ContentType::Carousel => "carousel",
            ContentType::Reel => "reel",
        }
    }

    /// Capitalized label shown on the selector buttons.
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Photo => "Photo",
            ContentType::Video => "Video",
            ContentType::Carousel => "Carousel",
            ContentType::Reel => "Reel",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next type in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous type in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known content type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type '{0}' (expected photo, video, carousel or reel)")]
pub struct ParseContentTypeError(pub String);

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseContentTypeError(s.to_string()))
    }
}

/// A generated caption split into its four fixed sections.
///
/// `story` may contain line breaks; they are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionSections {
    pub hook: String,
    pub story: String,
    pub emojis: String,
    pub cta: String,
}

impl CaptionSections {
    /// Sections in display order.
    pub fn sections(&self) -> [&str; 4] {
        [&self.hook, &self.story, &self.emojis, &self.cta]
    }

    /// Full caption text: hook, story, emojis and call-to-action separated
    /// by blank lines.
    pub fn full_text(&self) -> String {
        self.sections().join(SECTION_SEPARATOR)
    }
}

/// Input handed to a caption generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    pub content_type: ContentType,
    pub description: String,
}

impl CaptionRequest {
    pub fn new(content_type: ContentType, description: impl Into<String>) -> Self {
        Self {
            content_type,
            description: description.into(),
        }
    }
}
