use crate::app::state::App;
use apple_a_day::navigation::NavAction;
use crossterm::event::KeyCode;

pub fn handle_page_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.navigate(NavAction::Previous),
        KeyCode::Right | KeyCode::Char('l') => app.navigate(NavAction::Next),
        KeyCode::Char('c') => app.toggle_calendar(),
        KeyCode::Char(' ') => app.replay_animation(),
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        _ => {}
    }
}
