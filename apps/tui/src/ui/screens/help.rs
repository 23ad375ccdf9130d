use apple_a_day::navigation::MIN_SWIPE_DISTANCE;
use apple_a_day::page::PAGE_TITLE;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::popup::centered_rect;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title(" Help & Keyboard Shortcuts ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };
    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<8}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ])
}

fn heading(text: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    vec![
        TextLine::from(Span::styled(
            PAGE_TITLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("One apple a day, ranked from E to S on six stats."),
        TextLine::from(""),
        heading("Page:"),
        shortcut("← / h", "Previous apple"),
        shortcut("→ / l", "Next apple"),
        shortcut("c", "Open the calendar"),
        shortcut("Space", "Replay the chart animation"),
        shortcut("? / F1", "Toggle this help"),
        shortcut("q / Esc", "Quit"),
        TextLine::from(""),
        heading("Calendar:"),
        shortcut("Arrows", "Move by day or week"),
        shortcut("Enter", "Show the apple for that day"),
        shortcut("Esc / c", "Close"),
        TextLine::from(""),
        heading("Mouse:"),
        TextLine::from(format!(
            "  Drag left or right more than {MIN_SWIPE_DISTANCE} columns to change apple."
        )),
    ]
}
