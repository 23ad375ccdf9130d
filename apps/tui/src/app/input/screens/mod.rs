use crate::app::state::App;
use crossterm::event::KeyCode;

mod calendar;
mod help;
mod page;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.calendar.expanded {
        calendar::handle_calendar_input(app, key);
    } else {
        page::handle_page_input(app, key);
    }
}
