use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::QUIT_KEY;
use crate::ui::app::{App, Control};

/// Letter bindings match regardless of case, as config validation assumes.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return;
    }

    let keys = app.keys();
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&QUIT_KEY) => app.request_quit(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&keys.increment) => {
            app.click(Control::Increment)
        }
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&keys.reset) => app.click(Control::Reset),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate_focused(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Left => app.set_focus(Control::Increment),
        KeyCode::Right => app.set_focus(Control::Reset),
        _ => {}
    }
}

/// A left-button press on a button clicks it; everything else is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(control) = app.control_at(mouse.column, mouse.row) {
        app.click(control);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
