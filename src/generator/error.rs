//! Error types for caption generation.

use std::time::Duration;

use thiserror::Error;

/// Errors a generation attempt can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Generation was requested with an empty description.
    #[error("Describe your content before generating a caption")]
    InvalidInput,

    /// The generator did not answer in time.
    #[error("Caption generation timed out after {}s", after.as_secs_f32())]
    Timeout { after: Duration },

    /// The generator reported a failure.
    #[error("Caption generation failed: {0}")]
    Backend(String),
}
