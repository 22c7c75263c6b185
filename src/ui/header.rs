use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Caption Creator GPT";
pub const SUBTITLE: &str = "Transform your ideas into engaging Instagram captions";

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title = Line::from(vec![
            Span::styled("✨ ", Style::default().fg(ACCENT)),
            Span::styled(
                TITLE,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);
        let subtitle = Line::from(Span::styled(SUBTITLE, Style::default().fg(MUTED_TEXT)));

        Paragraph::new(vec![title, subtitle])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
