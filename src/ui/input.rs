use crate::caption::ContentType;
use crate::ui::app::App;
use crate::ui::composer::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PgUp/PgDn in the output panel.
const OUTPUT_PAGE: i32 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Esc {
        // First Esc clears a visible error, the next one quits
        if app.state().error.is_some() {
            app.dismiss_error();
        } else {
            app.request_quit();
        }
        return;
    }

    if is_ctrl_char(key, 'g') {
        app.generate();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_full_caption();
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.dismiss_error();
        return;
    }

    match key.code {
        KeyCode::PageDown => {
            app.scroll_output(OUTPUT_PAGE);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_output(-OUTPUT_PAGE);
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.state().focus {
        Field::ContentType => handle_selector_key(app, key),
        Field::Description => handle_description_key(app, key),
        Field::Generate => {
            if is_press(key) {
                app.generate();
            }
        }
        Field::Copy => match key.code {
            KeyCode::Up => app.scroll_output(-1),
            KeyCode::Down => app.scroll_output(1),
            _ if is_press(key) => app.copy_full_caption(),
            _ => {}
        },
    }
}

fn handle_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up => app.cycle_content_type(false),
        KeyCode::Right | KeyCode::Down => app.cycle_content_type(true),
        KeyCode::Char(ch) => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(content_type) = index.checked_sub(1).and_then(|i| ContentType::ALL.get(i)) {
                app.select_content_type(*content_type);
            }
        }
        _ => {}
    }
}

fn handle_description_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.newline(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        _ => {}
    }
}

fn is_press(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
