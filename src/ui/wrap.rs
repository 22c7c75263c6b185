//! Word wrapping with exact row counts, so scrolled views know how many
//! rows their content takes.

use ratatui::text::Span;

fn str_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Wrap `text` to `width` columns.
///
/// Explicit line breaks are kept, including empty lines. Words wider than
/// a row are split at character boundaries.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split_inclusive(' ') {
            let visible = str_width(word.trim_end_matches(' '));
            if row_width + visible > width && !row.is_empty() {
                rows.push(row.trim_end().to_string());
                row.clear();
                row_width = 0;
            }

            if visible > width {
                for ch in word.chars() {
                    let mut buf = [0u8; 4];
                    let ch_width = str_width(ch.encode_utf8(&mut buf));
                    if row_width + ch_width > width && !row.is_empty() {
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                    }
                    row.push(ch);
                    row_width += ch_width;
                }
                continue;
            }

            row.push_str(word);
            row_width += str_width(word);
        }

        rows.push(row.trim_end().to_string());
    }

    rows
}
