use crate::app::state::App;
use crossterm::event::KeyCode;

const WEEK: i32 = 7;

pub fn handle_calendar_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.move_calendar_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_calendar_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_calendar_cursor(-WEEK),
        KeyCode::Down | KeyCode::Char('j') => app.move_calendar_cursor(WEEK),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_calendar_cursor(),
        KeyCode::Esc | KeyCode::Char('c') => app.close_calendar(),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}
