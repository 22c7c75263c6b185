//! Rendering for the composer: input panel, output panel and status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::caption::{CaptionSections, ContentType};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use crate::ui::wrap::wrap_text;

use super::state::{ComposerState, Field, NoticeKind};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const GENERATE_LABEL: &str = "Generate Caption";
pub const GENERATING_LABEL: &str = "Generating…";
pub const COPY_LABEL: &str = "Copy Full Caption";
pub const DESCRIPTION_PLACEHOLDER: &str =
    "What's your post about? Include key details and the message you want to convey...";

/// Section headings in display order.
pub const SECTION_TITLES: [&str; 4] = ["Hook", "Story", "Suggested Emojis", "Call-to-Action"];

const SELECTOR_HEIGHT: u16 = 3;
const DESCRIPTION_HEIGHT: u16 = 7;
/// Description box height once a caption is shown, leaving room for output.
const DESCRIPTION_HEIGHT_COMPACT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;
const COPY_ROW_HEIGHT: u16 = 1;

/// Label of the submit control for the current state.
pub fn submit_label(state: &ComposerState) -> &'static str {
    if state.is_generating() {
        GENERATING_LABEL
    } else {
        GENERATE_LABEL
    }
}

/// Areas of the composer controls.
struct ComposerLayout {
    selector: Rect,
    description: Rect,
    submit: Rect,
    status: Rect,
    output: Rect,
}

fn composer_layout(area: Rect, state: &ComposerState) -> ComposerLayout {
    let description_height = if state.caption.is_some() {
        DESCRIPTION_HEIGHT_COMPACT
    } else {
        DESCRIPTION_HEIGHT
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SELECTOR_HEIGHT),
            Constraint::Length(description_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(status_lines(state).len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    ComposerLayout {
        selector: chunks[0],
        description: chunks[1],
        submit: chunks[2],
        status: chunks[3],
        output: chunks[4],
    }
}

/// Rows available for caption text inside the output panel.
fn output_viewport(output: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(output);
    Rect {
        height: inner.height.saturating_sub(COPY_ROW_HEIGHT),
        ..inner
    }
}

/// Largest useful scroll offset of the output panel when the composer
/// is drawn into `area`.
pub fn output_max_scroll(area: Rect, state: &ComposerState) -> u16 {
    let Some(caption) = &state.caption else {
        return 0;
    };
    let viewport = output_viewport(composer_layout(area, state).output);
    let rows = output_rows(caption, viewport.width).len();
    rows.saturating_sub(viewport.height as usize)
        .min(u16::MAX as usize) as u16
}

/// Render the whole composer into `area`.
pub fn render_composer(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let layout = composer_layout(area, state);

    render_selector(frame, layout.selector, state);
    render_description(frame, layout.description, state);
    render_submit(frame, layout.submit, state);
    frame.render_widget(Paragraph::new(status_lines(state)), layout.status);

    if let Some(caption) = &state.caption {
        let scroll = state.output_scroll.min(output_max_scroll(area, state));
        render_output(frame, layout.output, caption, state.focus == Field::Copy, scroll);
    }
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_selector(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let mut spans = vec![Span::raw(" ")];
    for content_type in ContentType::ALL {
        spans.push(selector_button(content_type, state.content_type));
        spans.push(Span::raw("  "));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(panel("Content Type", state.focus == Field::ContentType));
    frame.render_widget(paragraph, area);
}

fn selector_button(content_type: ContentType, selected: ContentType) -> Span<'static> {
    let style = if content_type == selected {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    };
    Span::styled(format!(" {} ", content_type.label()), style)
}

/// The description scrolls to keep its last row, and the cursor, visible.
fn render_description(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let focused = state.focus == Field::Description;
    let block = panel("Describe your content", focused);
    let inner = block.inner(area);

    let (text, style) = if state.description.is_empty() {
        (DESCRIPTION_PLACEHOLDER.to_string(), Style::default().fg(MUTED_TEXT))
    } else {
        let mut text = state.description.clone();
        if focused {
            text.push('▏');
        }
        (text, Style::default().fg(HEADER_TEXT))
    };

    let rows = wrap_text(&text, inner.width);
    let scroll = rows.len().saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16;
    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();

    frame.render_widget(
        Paragraph::new(lines).style(style).block(block).scroll((scroll, 0)),
        area,
    );
}

fn render_submit(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let focused = state.focus == Field::Generate;
    let line = if state.is_generating() {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(GENERATING_LABEL, Style::default().fg(MUTED_TEXT)),
        ])
    } else if state.can_generate() {
        Line::from(Span::styled(
            format!("➤ {}", GENERATE_LABEL),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("➤ {}", GENERATE_LABEL),
            Style::default().fg(DISABLED),
        ))
    };

    let border = if state.can_generate() { ACCENT } else { DISABLED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { FOCUS_BORDER } else { border }));

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

/// Generation error and clipboard notice, each on its own row.
fn status_lines(state: &ComposerState) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    if let Some(error) = &state.error {
        lines.push(Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(STATUS_ERROR)),
            Span::styled(error.as_str(), Style::default().fg(HEADER_TEXT)),
            Span::styled("  (Ctrl+D to dismiss)", Style::default().fg(MUTED_TEXT)),
        ]));
    }
    if let Some(notice) = &state.notice {
        let (icon, color) = match notice.kind {
            NoticeKind::Success => (" ✓ ", STATUS_OK),
            NoticeKind::Error => (" ✗ ", STATUS_ERROR),
        };
        lines.push(Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::styled(notice.message.as_str(), Style::default().fg(HEADER_TEXT)),
        ]));
    }
    lines
}

/// Caption rows as rendered: heading, wrapped section text, blank row.
fn output_rows(caption: &CaptionSections, width: u16) -> Vec<Line<'static>> {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(HEADER_TEXT);

    let mut lines = Vec::new();
    for (title, text) in SECTION_TITLES.iter().zip(caption.sections()) {
        lines.push(Line::from(Span::styled(*title, heading)));
        for row in wrap_text(text, width) {
            lines.push(Line::from(Span::styled(row, body)));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn render_output(
    frame: &mut Frame,
    area: Rect,
    caption: &CaptionSections,
    copy_focused: bool,
    scroll: u16,
) {
    if area.height == 0 {
        return;
    }

    let viewport = output_viewport(area);
    let rows = output_rows(caption, viewport.width);
    let title = if rows.len() > viewport.height as usize {
        " Generated Caption (PgUp/PgDn to scroll) "
    } else {
        " Generated Caption "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(rows).scroll((scroll, 0)), viewport);

    let copy_row = Rect {
        y: inner.y + inner.height.saturating_sub(COPY_ROW_HEIGHT),
        height: inner.height.min(COPY_ROW_HEIGHT),
        ..inner
    };
    let copy_style = if copy_focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", COPY_LABEL), copy_style))
            .alignment(Alignment::Center),
        copy_row,
    );
}
