//! Core trait for caption generators.

use async_trait::async_trait;

use crate::caption::{CaptionRequest, CaptionSections};

use super::error::GenerationError;

/// Produces caption sections from a content type and description.
///
/// Implementations are shared between the UI and spawned tasks, so they
/// must be `Send + Sync`. Timeouts are applied by the caller
/// (see [`run_generation`](super::run_generation)); implementations only
/// report their own failures.
#[async_trait]
pub trait CaptionGenerator: Send + Sync {
    /// Returns the name of this generator for logging.
    fn name(&self) -> &'static str;

    /// Generate a caption for `request`.
    async fn generate(&self, request: &CaptionRequest) -> Result<CaptionSections, GenerationError>;
}
