//! One-shot generation for the `generate` subcommand.

use anyhow::Result;

use crate::caption::CaptionRequest;
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::generator::{run_generation, CaptionGenerator};

/// Generate one caption and format it for stdout: the flattened caption,
/// or the four sections as pretty JSON with `--json`.
///
/// Empty descriptions fail with `GenerationError::InvalidInput`.
pub async fn generate_once(
    config: &Config,
    generator: &dyn CaptionGenerator,
    args: GenerateArgs,
) -> Result<String> {
    let request = CaptionRequest::new(args.content_type, args.description);
    let caption = run_generation(generator, &request, config.generation.timeout()).await?;

    if args.json {
        Ok(serde_json::to_string_pretty(&caption)?)
    } else {
        Ok(caption.full_text())
    }
}
