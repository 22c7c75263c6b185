//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::caption::ContentType;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "caption-composer", version, about = "Compose four-part social media captions")]
pub struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the simulated generation latency.
    #[arg(long, global = true, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Content type selected at startup of the interactive composer.
    #[arg(long, short = 't')]
    pub content_type: Option<ContentType>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive composer (default).
    Tui(TuiArgs),
    /// Generate one caption and print it.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Content type selected at startup.
    #[arg(long, short = 't')]
    pub content_type: Option<ContentType>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Kind of post the caption is for.
    #[arg(long, short = 't', default_value = "photo")]
    pub content_type: ContentType,

    /// Print the four sections as JSON instead of the flattened caption.
    #[arg(long)]
    pub json: bool,

    /// What the post is about.
    pub description: String,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(latency_ms) = self.latency_ms {
            config.generation.latency_ms = latency_ms;
        }

        let tui_content_type = match &self.command {
            Some(Command::Tui(args)) => args.content_type,
            _ => None,
        };
        if let Some(content_type) = tui_content_type.or(self.content_type) {
            config.ui.default_content_type = content_type;
        }
        Ok(config)
    }
}
