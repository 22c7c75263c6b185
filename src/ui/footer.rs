use crate::ui::composer::{ComposerState, Field};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Key hints for the focused control.
pub fn hints(state: &ComposerState) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "next"), ("Ctrl+G", "generate")];
    match state.focus {
        Field::ContentType => hints.push(("←/→", "content type")),
        Field::Description => hints.push(("Enter", "new line")),
        Field::Generate => hints.push(("Enter", "press")),
        Field::Copy => {
            hints.push(("Enter", "press"));
            hints.push(("↑/↓", "scroll"));
        }
    }
    if state.can_copy() {
        hints.push(("Ctrl+Y", "copy"));
        hints.push(("PgUp/PgDn", "scroll"));
    }
    if state.error.is_some() {
        hints.push(("Ctrl+D", "dismiss"));
    }
    hints.push(("Esc", "quit"));
    hints
}

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ComposerState) -> Paragraph<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints(state) {
            spans.push(Span::styled(key, Style::default().fg(HEADER_TEXT)));
            spans.push(Span::styled(format!(" {}   ", action), Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
