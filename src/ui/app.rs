use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::caption::{CaptionRequest, CaptionSections, ContentType};
use crate::clipboard::{ClipboardHandler, ClipboardSink};
use crate::config::Config;
use crate::generator::{run_generation, CaptionGenerator, GenerationError};
use crate::ui::composer::{output_max_scroll, ComposerIntent, ComposerReducer, ComposerState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::render::composer_area;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Drives the composer: owns its state, runs generations on the tokio
/// runtime and performs clipboard writes.
pub struct App {
    should_quit: bool,
    /// Terminal size (cols, rows), once known.
    size: Option<(u16, u16)>,
    /// Composer state (MVI pattern).
    state: ComposerState,
    generator: Arc<dyn CaptionGenerator>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    /// Created on first copy unless injected.
    clipboard: Option<Box<dyn ClipboardSink>>,
    timeout: Duration,
    notice_ticks: u16,
    /// Task of the generation in flight (resource, managed outside MVI).
    task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        config: &Config,
        generator: Arc<dyn CaptionGenerator>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            size: None,
            state: ComposerState::new(config.ui.default_content_type),
            generator,
            runtime,
            events,
            clipboard: None,
            timeout: config.generation.timeout(),
            notice_ticks: config.ui.notice_ticks(),
            task: None,
        }
    }

    /// Use `sink` instead of the system clipboard.
    pub fn set_clipboard(&mut self, sink: Box<dyn ClipboardSink>) {
        self.clipboard = Some(sink);
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn dispatch(&mut self, intent: ComposerIntent) {
        dispatch_mvi!(self, state, ComposerReducer, intent);
    }

    pub fn select_content_type(&mut self, content_type: ContentType) {
        self.dispatch(ComposerIntent::SelectContentType(content_type));
    }

    pub fn cycle_content_type(&mut self, forward: bool) {
        let current = self.state.content_type;
        let next = if forward { current.next() } else { current.prev() };
        self.select_content_type(next);
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.dispatch(ComposerIntent::SetDescription(text.into()));
    }

    pub fn type_char(&mut self, ch: char) {
        self.dispatch(ComposerIntent::InsertChar(ch));
    }

    pub fn newline(&mut self) {
        self.dispatch(ComposerIntent::InsertNewline);
    }

    pub fn backspace(&mut self) {
        self.dispatch(ComposerIntent::Backspace);
    }

    /// Append pasted text to the description.
    pub fn on_paste(&mut self, text: &str) {
        let mut description = self.state.description.clone();
        description.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        self.set_description(description);
    }

    pub fn focus_next(&mut self) {
        self.dispatch(ComposerIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch(ComposerIntent::FocusPrev);
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(ComposerIntent::DismissError);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Scroll the output panel by `delta` rows (negative scrolls up).
    pub fn scroll_output(&mut self, delta: i32) {
        let max = match self.size {
            Some((cols, rows)) => {
                output_max_scroll(composer_area(Rect::new(0, 0, cols, rows)), &self.state)
            }
            None => u16::MAX,
        };
        self.dispatch(ComposerIntent::ScrollOutput { delta, max });
    }

    pub fn on_tick(&mut self) {
        self.dispatch(ComposerIntent::Tick);
    }

    /// Start a generation for the current description and content type.
    ///
    /// No-op when the description is empty or a generation is in flight.
    pub fn generate(&mut self) {
        if !self.state.can_generate() {
            tracing::debug!(
                generating = self.state.is_generating(),
                empty = self.state.description.is_empty(),
                "Ignoring generate request"
            );
            return;
        }

        self.dispatch(ComposerIntent::GenerateRequested);
        let Some(request_id) = self.state.in_flight() else {
            return;
        };

        let request = CaptionRequest::new(self.state.content_type, self.state.description.clone());
        tracing::info!(
            request_id,
            content_type = %request.content_type,
            generator = self.generator.name(),
            "Generation requested"
        );

        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        let timeout = self.timeout;
        self.task = Some(self.runtime.spawn(async move {
            let result = run_generation(generator.as_ref(), &request, timeout).await;
            let _ = events.send(AppEvent::GenerationFinished { request_id, result });
        }));
    }

    /// Apply the outcome of generation `request_id`.
    pub fn on_generation_finished(
        &mut self,
        request_id: u64,
        result: Result<CaptionSections, GenerationError>,
    ) {
        if self.state.in_flight() != Some(request_id) {
            tracing::debug!(request_id, "Dropping stale generation result");
            return;
        }
        self.task = None;
        match result {
            Ok(caption) => {
                self.dispatch(ComposerIntent::GenerationSucceeded {
                    request_id,
                    caption,
                });
            }
            Err(err) => {
                self.dispatch(ComposerIntent::GenerationFailed {
                    request_id,
                    message: err.to_string(),
                });
            }
        }
    }

    /// Copy hook, story, emojis and call-to-action to the clipboard.
    ///
    /// Failures become a transient notice; the caption is untouched.
    pub fn copy_full_caption(&mut self) {
        let Some(caption) = &self.state.caption else {
            return;
        };
        let text = caption.full_text();

        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(Box::new(handler)),
                Err(err) => {
                    tracing::warn!(error = %err, "Clipboard unavailable");
                    self.dispatch(ComposerIntent::CopyFailed {
                        message: err.to_string(),
                        ticks: self.notice_ticks,
                    });
                    return;
                }
            }
        }

        let result = match &self.clipboard {
            Some(clipboard) => clipboard.set_text(&text),
            None => return,
        };

        match result {
            Ok(()) => {
                tracing::info!(len = text.len(), "Caption copied to clipboard");
                self.dispatch(ComposerIntent::CaptionCopied {
                    ticks: self.notice_ticks,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                self.dispatch(ComposerIntent::CopyFailed {
                    message: err.to_string(),
                    ticks: self.notice_ticks,
                });
            }
        }
    }

    /// Tear the composer down. Pending generations are aborted and any
    /// result that still arrives is ignored.
    pub fn shutdown(&mut self) {
        if self.state.closed {
            return;
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.dispatch(ComposerIntent::Teardown);
        tracing::debug!("Composer torn down");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
