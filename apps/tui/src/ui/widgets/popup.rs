use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A rect of `percent_x` by `percent_y` of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    centered(
        Constraint::Percentage(percent_x),
        Constraint::Percentage(percent_y),
        area,
    )
}

/// A fixed-size rect centered in `area`, shrunk to fit when `area` is smaller.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    centered(
        Constraint::Length(width.min(area.width)),
        Constraint::Length(height.min(area.height)),
        area,
    )
}

fn centered(horizontal: Constraint, vertical: Constraint, area: Rect) -> Rect {
    let [row] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    let [cell] = Layout::horizontal([horizontal]).flex(Flex::Center).areas(row);
    cell
}
