use apple_a_day::page::{display_date, PagePhase, COMING_SOON_NOTICE, LOADING_NOTICE, PAGE_TITLE};
use apple_a_day::AppleDay;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

use crate::app::App;
use crate::ui::widgets::radar::{accent, render_radar};

pub fn render_page(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Apple
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title_section(app, f, layout[0]);
    render_content_section(app, f, layout[1]);
    render_status_section(app, f, layout[2]);
    render_shortcuts(f, layout[3]);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let color = app
        .current_apple()
        .map_or(Color::Red, |apple| accent(apple.accent()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_top(
            TextLine::from(Span::styled(
                " [c] Calendar ",
                Style::default().fg(Color::Yellow),
            ))
            .right_aligned(),
        );

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            PAGE_TITLE,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", display_date(app.page.today())),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(block);

    f.render_widget(title, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    match (app.page.phase(), app.current_apple()) {
        (PagePhase::Loading, _) => render_loading(app, f, area),
        (PagePhase::Empty(_), _) => render_coming_soon(f, area),
        (PagePhase::Ready, None) => render_notice(f, area, app.page.notice().unwrap_or_default()),
        (PagePhase::Ready, Some(apple)) => render_apple(app, apple, f, area),
    }
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let width = u16::try_from(LOADING_NOTICE.len() + 2).unwrap_or(u16::MAX);
    let line = centered_line(area);
    let spot = Rect {
        x: line.x + line.width.saturating_sub(width) / 2,
        width: width.min(line.width),
        ..line
    };

    let throbber = Throbber::default()
        .label(LOADING_NOTICE)
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, spot, &mut state);
}

fn render_coming_soon(f: &mut Frame<'_>, area: Rect) {
    let text = Paragraph::new(Span::styled(
        COMING_SOON_NOTICE,
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(text, centered_line(area));
}

fn render_notice(f: &mut Frame<'_>, area: Rect, notice: &str) {
    let text = Paragraph::new(Span::styled(notice, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Center);
    f.render_widget(text, centered_line(area));
}

fn render_apple(app: &App, apple: &AppleDay, f: &mut Frame<'_>, area: Rect) {
    let color = accent(apple.accent());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(area);

    let header = Paragraph::new(Span::styled(
        app.page.header().unwrap_or_default(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    render_radar(
        f,
        columns[0],
        &apple.stats,
        app.animation.progress(),
        color,
    );
    render_details(app, apple, f, columns[1], color);
}

fn render_details(app: &App, apple: &AppleDay, f: &mut Frame<'_>, area: Rect, color: Color) {
    let block = Block::default()
        .title(" Stats ")
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<TextLine<'_>> = apple
        .stats
        .iter()
        .map(|(axis, rank)| {
            TextLine::from(vec![
                Span::styled(format!("{:<12}", axis.label()), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!(" {rank} "),
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", "■".repeat(usize::from(rank.magnitude()))),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    if let Some(description) = &apple.description {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::raw(description.clone())));
    }

    if let Some(url) = &apple.image_url {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let items = app.page.items();
    if let Some(position) = items.iter().position(|item| item.date == apple.date) {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("Apple {} of {}", position + 1, items.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let details = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(details, area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            format!("Source: {}", app.source_label),
            Style::default().fg(Color::Gray),
        ))
    } else {
        Text::from(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Green),
        ))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn key_hint(key: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(action, Style::default().fg(Color::Gray)),
    ]
}

fn shortcuts_line() -> TextLine<'static> {
    let hints = [
        key_hint("←/→", ": Previous/Next | "),
        key_hint("c", ": Calendar | "),
        key_hint("Space", ": Replay | "),
        key_hint("?", ": Help | "),
        key_hint("q", ": Quit"),
    ];
    TextLine::from(hints.into_iter().flatten().collect::<Vec<_>>())
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let shortcuts_paragraph = Paragraph::new(shortcuts_line()).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}
