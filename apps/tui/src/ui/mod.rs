// Draws the page, then whichever popup is open on top of it.

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::page::render_page(app, f);

    if app.calendar.expanded {
        screens::calendar::render_calendar(app, f);
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
