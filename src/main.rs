use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use caption_composer::cli::{Cli, Command};
use caption_composer::generator::{CaptionGenerator, MockCaptionGenerator};
use caption_composer::{headless, logging, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Generate(_)) => logging::init_stderr_tracing(),
        _ => logging::init_tui_tracing(),
    }

    let config = cli.resolve_config().context("Failed to load configuration")?;
    let generator: Arc<dyn CaptionGenerator> =
        Arc::new(MockCaptionGenerator::new(config.generation.latency()));
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Some(Command::Generate(args)) => {
            let output =
                runtime.block_on(headless::generate_once(&config, generator.as_ref(), args))?;
            println!("{}", output);
            Ok(())
        }
        _ => {
            ui::run(&config, generator, runtime.handle().clone())?;
            Ok(())
        }
    }
}
