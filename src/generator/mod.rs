//! Caption generation seam.
//!
//! The composer never produces text itself. It hands a [`CaptionRequest`]
//! to a [`CaptionGenerator`] and applies whatever comes back. The shipped
//! implementation is [`MockCaptionGenerator`], which waits a fixed latency
//! and returns a constant caption; a real backend plugs in by implementing
//! the trait.

mod error;
mod mock;
mod traits;

pub use error::GenerationError;
pub use mock::{sample_caption, MockCaptionGenerator, DEFAULT_LATENCY};
pub use traits::CaptionGenerator;

use std::time::Duration;

use crate::caption::{CaptionRequest, CaptionSections};

/// Run one generation, bounded by `timeout`.
///
/// Empty descriptions are rejected before the generator is called.
pub async fn run_generation(
    generator: &dyn CaptionGenerator,
    request: &CaptionRequest,
    timeout: Duration,
) -> Result<CaptionSections, GenerationError> {
    if request.description.is_empty() {
        return Err(GenerationError::InvalidInput);
    }

    tracing::debug!(
        generator = generator.name(),
        content_type = %request.content_type,
        description_len = request.description.len(),
        "Starting caption generation"
    );

    match tokio::time::timeout(timeout, generator.generate(request)).await {
        Ok(Ok(caption)) => {
            tracing::info!(generator = generator.name(), "Caption generated");
            Ok(caption)
        }
        Ok(Err(err)) => {
            tracing::warn!(generator = generator.name(), error = %err, "Caption generation failed");
            Err(err)
        }
        Err(_) => {
            tracing::warn!(
                generator = generator.name(),
                timeout_ms = timeout.as_millis() as u64,
                "Caption generation timed out"
            );
            Err(GenerationError::Timeout { after: timeout })
        }
    }
}
