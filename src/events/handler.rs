use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Apply one key press to the app.
///
/// While an alert is up only dismissal and quit are honoured.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('q') {
        app.quit();
        return;
    }

    if app.current_alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Enter => {
            app.copy_email();
        }
        _ => {}
    }
}
