use apple_a_day::calendar::{CalendarCell, DayCell, WEEK_DAYS};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::popup::centered_fixed;
use crate::ui::widgets::radar::accent;

/// Columns taken by one day, e.g. " 15• ".
const CELL_WIDTH: u16 = 5;
const POPUP_WIDTH: u16 = CELL_WIDTH * 7 + 2;
/// Weekday row, six weeks, a spacer, two footer lines and the borders.
const POPUP_HEIGHT: u16 = 1 + 6 + 1 + 2 + 2;

fn day_span(cell: &DayCell<'_>, cursor_day: u32) -> Span<'static> {
    let mark = if cell.is_enabled() { '•' } else { ' ' };
    let text = format!(" {:>2}{mark} ", cell.day);

    let mut style = match cell.item {
        Some(apple) => Style::default()
            .fg(accent(apple.accent()))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    if cell.selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if cell.day == cursor_day {
        style = style.bg(Color::Rgb(51, 65, 85)).add_modifier(Modifier::UNDERLINED);
    }

    Span::styled(text, style)
}

fn blank_span() -> Span<'static> {
    Span::raw(" ".repeat(usize::from(CELL_WIDTH)))
}

pub fn render_calendar(app: &App, f: &mut Frame<'_>) {
    let index = app.page.calendar(app.calendar_month);
    let area = centered_fixed(POPUP_WIDTH, POPUP_HEIGHT, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![TextLine::from(
        WEEK_DAYS
            .iter()
            .map(|name| {
                Span::styled(
                    format!(" {name:>3} "),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )];

    let cells = index.cells();
    for week in cells.chunks(7) {
        let spans = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => blank_span(),
                CalendarCell::Day(day) => day_span(day, app.calendar.cursor_day),
            })
            .collect::<Vec<_>>();
        lines.push(TextLine::from(spans));
    }

    lines.push(TextLine::from(""));
    let footer = index.item_for_day(app.calendar.cursor_day).map_or_else(
        || "No apple this day".to_string(),
        |apple| apple.name.clone(),
    );
    lines.push(TextLine::from(Span::styled(
        footer,
        Style::default().fg(Color::White),
    )));
    if index.outside_month() > 0 {
        lines.push(TextLine::from(Span::styled(
            format!("{} more outside this month", index.outside_month()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", index.month().title()))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let grid = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(grid, area);

    let hint = Paragraph::new(Span::styled(
        "Enter: Pick | Esc: Close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };
    f.render_widget(hint, hint_area);
}
