//! Fixed-latency generator returning a constant caption.

use std::time::Duration;

use async_trait::async_trait;

use crate::caption::{CaptionRequest, CaptionSections};

use super::error::GenerationError;
use super::traits::CaptionGenerator;

/// Simulated latency of the mock generator.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

const HOOK: &str = "🚀 Ready to transform your Instagram game?";
const STORY: &str = "Just discovered a game-changing way to create content that truly resonates. \
As a creator, I've always struggled with finding the right words... until now!\n\n\
Swipe through to see how this new approach is changing everything.";
const EMOJIS: &str = "✨ 💡 🎯";
const CTA: &str = "Double tap if you're ready to level up your content game! \
Share your biggest caption writing challenge below 👇";

/// The caption every mock generation returns.
pub fn sample_caption() -> CaptionSections {
    CaptionSections {
        hook: HOOK.to_string(),
        story: STORY.to_string(),
        emojis: EMOJIS.to_string(),
        cta: CTA.to_string(),
    }
}

/// Generator that sleeps for `latency` and returns [`sample_caption`].
///
/// Content type and description are accepted but ignored.
#[derive(Debug, Clone)]
pub struct MockCaptionGenerator {
    latency: Duration,
}

impl MockCaptionGenerator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockCaptionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl CaptionGenerator for MockCaptionGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, _request: &CaptionRequest) -> Result<CaptionSections, GenerationError> {
        tokio::time::sleep(self.latency).await;
        Ok(sample_caption())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::ContentType;

    #[test]
    fn default_latency_is_one_and_a_half_seconds() {
        assert_eq!(MockCaptionGenerator::default().latency(), Duration::from_millis(1500));
    }

    #[test]
    fn sample_story_keeps_paragraph_break() {
        assert!(sample_caption().story.contains("\n\n"));
    }

    #[tokio::test]
    async fn output_ignores_request() {
        let generator = MockCaptionGenerator::new(Duration::from_millis(1));
        let a = generator
            .generate(&CaptionRequest::new(ContentType::Photo, "coffee"))
            .await
            .unwrap();
        let b = generator
            .generate(&CaptionRequest::new(ContentType::Reel, "new sneakers drop"))
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, sample_caption());
    }
}
