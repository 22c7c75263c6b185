//! Configuration loading.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing file means defaults; a malformed one is an error.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GenerationConfig, UiConfig};
