pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    screens::dispatch_input(app, key.code);
}

/// Left-button drags act as swipes. A drag that starts while a popup is
/// open is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help || app.calendar.expanded {
        app.swipe.cancel();
        return;
    }

    let x = i32::from(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.swipe.begin(x),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(action) = app.swipe.end(x) {
                tracing::debug!(?action, "swipe");
                app.navigate(action);
            }
        }
        _ => {}
    }
}
