use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::caption::ContentType;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Caption generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Simulated latency of the mock generator in milliseconds (default: 1500).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Upper bound for one generation in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long clipboard notifications stay visible, in seconds (default: 3).
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
    /// Content type selected at startup (default: photo).
    #[serde(default)]
    pub default_content_type: ContentType,
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_notice_seconds() -> u64 {
    3
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_seconds: default_notice_seconds(),
            default_content_type: ContentType::default(),
        }
    }
}

impl GenerationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Number of ticks a notification stays on screen (at least one).
    pub fn notice_ticks(&self) -> u16 {
        let ticks = self.notice_seconds.saturating_mul(1000) / self.tick_rate_ms.max(1);
        ticks.clamp(1, u16::MAX as u64) as u16
    }
}
