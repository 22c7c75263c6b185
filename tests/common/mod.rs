//! Shared test utilities: fake clipboards, scripted generators and an
//! `App` wired to a real tokio runtime.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use caption_composer::caption::{CaptionRequest, CaptionSections};
use caption_composer::clipboard::{ClipboardError, ClipboardSink};
use caption_composer::config::Config;
use caption_composer::generator::{CaptionGenerator, GenerationError, MockCaptionGenerator};
use caption_composer::ui::app::App;
use caption_composer::ui::events::AppEvent;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Latency short enough for tests but long enough to observe the
/// generating window.
pub const TEST_LATENCY: Duration = Duration::from_millis(50);

/// Upper bound when waiting for a generation result.
pub const WAIT: Duration = Duration::from_secs(5);

pub fn hsec() -> CaptionSections {
    CaptionSections {
        hook: "H".into(),
        story: "S".into(),
        emojis: "E".into(),
        cta: "C".into(),
    }
}

/// Clipboard that records every write.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses writes.
pub struct DeniedClipboard;

impl ClipboardSink for DeniedClipboard {
    fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::WriteFailed("permission denied".into()))
    }
}

/// Generator returning a fixed caption after `latency`, counting calls.
pub struct FixedGenerator {
    pub latency: Duration,
    pub caption: CaptionSections,
    pub calls: AtomicUsize,
}

impl FixedGenerator {
    pub fn new(caption: CaptionSections) -> Self {
        Self {
            latency: TEST_LATENCY,
            caption,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptionGenerator for FixedGenerator {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn generate(&self, _request: &CaptionRequest) -> Result<CaptionSections, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        Ok(self.caption.clone())
    }
}

/// Generator that always fails.
pub struct FailingGenerator;

#[async_trait]
impl CaptionGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _request: &CaptionRequest) -> Result<CaptionSections, GenerationError> {
        Err(GenerationError::Backend("service unavailable".into()))
    }
}

pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    // Dropped last: the app may still hold task handles on this runtime.
    pub runtime: Runtime,
}

impl Harness {
    pub fn new(generator: Arc<dyn CaptionGenerator>) -> Self {
        Self::with_config(&Config::default(), generator)
    }

    pub fn with_config(config: &Config, generator: Arc<dyn CaptionGenerator>) -> Self {
        let runtime = Runtime::new().expect("runtime");
        let (tx, rx) = mpsc::channel();
        let app = App::new(config, generator, runtime.handle().clone(), tx);
        Self {
            app,
            events: rx,
            runtime,
        }
    }

    pub fn mock() -> Self {
        Self::new(Arc::new(MockCaptionGenerator::new(TEST_LATENCY)))
    }

    /// Wait for the next generation result and feed it to the app.
    pub fn pump_generation(&mut self) {
        match self.events.recv_timeout(WAIT) {
            Ok(AppEvent::GenerationFinished { request_id, result }) => {
                self.app.on_generation_finished(request_id, result)
            }
            Ok(_) => panic!("unexpected event"),
            Err(err) => panic!("no generation result: {err}"),
        }
    }
}
