use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press: global shortcuts first, then the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Plain characters must reach text fields untouched, so shifted letters
    // arrive as-is and only Control/Alt chords are dropped here. The grades
    // screen is the only one that binds Control chords of its own.
    if matches!(key.code, KeyCode::Char(_))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && !(is_screen_chord(key) && app.accepts_screen_chords())
    {
        return;
    }

    app.on_key(key);
}

/// Control chords a screen handles itself (grade edit/delete/new).
fn is_screen_chord(key: KeyEvent) -> bool {
    ['e', 'd', 'n'].iter().any(|&ch| is_ctrl_char(key, ch))
}

pub(crate) fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
