use apple_a_day::chart::{AxisLabel, RadarChart, CENTER, VIEWBOX};
use apple_a_day::domain::AccentColor;
use apple_a_day::geometry::Point;
use apple_a_day::StatSet;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::Frame;

const GRID: Color = Color::Rgb(203, 213, 225);
const FRAME: Color = Color::Rgb(148, 163, 184);
const LABEL: Color = Color::Rgb(71, 85, 105);
/// Room around the viewbox for the frame circle and the labels.
const MARGIN: f64 = 40.0;
/// Inner copies of the data polygon, drawn to read as a fill.
const FILL_STEPS: [f64; 3] = [0.25, 0.5, 0.75];

pub const fn accent(color: AccentColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Largest rect inside `area` that shows the chart with a round aspect.
/// Terminal cells are about twice as tall as they are wide.
pub fn chart_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Chart coordinates grow downwards, canvas coordinates upwards.
fn flip(point: Point) -> (f64, f64) {
    (point.x, VIEWBOX - point.y)
}

fn draw_polygon(ctx: &mut Context<'_>, points: &[Point], color: Color) {
    for (index, start) in points.iter().enumerate() {
        let end = points[(index + 1) % points.len()];
        let (x1, y1) = flip(*start);
        let (x2, y2) = flip(end);
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

fn scaled(points: &[Point], factor: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - CENTER.x).mul_add(factor, CENTER.x),
                (p.y - CENTER.y).mul_add(factor, CENTER.y),
            )
        })
        .collect()
}

fn print_centered(ctx: &mut Context<'_>, x: f64, y: f64, units_per_col: f64, spans: Vec<Span<'static>>) {
    let width: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    let x = (width as f64 / 2.0).mul_add(-units_per_col, x);
    ctx.print(x, y, TextLine::from(spans));
}

fn print_label(ctx: &mut Context<'_>, label: &AxisLabel, color: Color, units: (f64, f64)) {
    let (units_per_col, units_per_row) = units;
    let (x, y) = flip(label.anchor);

    let name = vec![Span::styled(
        label.axis.label().to_string(),
        Style::default().fg(LABEL).add_modifier(Modifier::BOLD),
    )];
    let badge = vec![Span::styled(
        format!(" {} ", label.rank),
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )];

    // Upper labels read name over badge; flipped ones badge over name.
    let (top, bottom) = if label.flipped { (badge, name) } else { (name, badge) };
    print_centered(ctx, x, y + units_per_row / 2.0, units_per_col, top);
    print_centered(ctx, x, y - units_per_row / 2.0, units_per_col, bottom);
}

/// Draws the stat chart for `stats`, grown to `progress` (0 to 1).
pub fn render_radar(f: &mut Frame<'_>, area: Rect, stats: &StatSet, progress: f64, color: Color) {
    let square = chart_area(area);
    if square.width < 8 || square.height < 4 {
        return;
    }

    let chart = RadarChart::new(stats, progress);
    let span = 2.0f64.mul_add(MARGIN, VIEWBOX);
    let units = (
        span / f64::from(square.width),
        span / f64::from(square.height),
    );

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for ring in &chart.rings {
                    draw_polygon(ctx, ring, GRID);
                }
                for (start, end) in &chart.axes {
                    let (x1, y1) = flip(*start);
                    let (x2, y2) = flip(*end);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, GRID));
                }
                draw_polygon(ctx, &chart.outline, FRAME);
                let (cx, cy) = flip(CENTER);
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: chart.frame_radius,
                    color: FRAME,
                });

                ctx.layer();
                for factor in FILL_STEPS {
                    draw_polygon(ctx, &scaled(&chart.data, factor), color);
                }
                draw_polygon(ctx, &chart.data, color);

                for label in &chart.labels {
                    print_label(ctx, label, color, units);
                }
            })
            .x_bounds([-MARGIN, VIEWBOX + MARGIN])
            .y_bounds([-MARGIN, VIEWBOX + MARGIN]),
        square,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_area_is_twice_as_wide_as_tall() {
        let area = chart_area(Rect::new(0, 0, 100, 20));
        assert_eq!((area.width, area.height), (40, 20));
        assert_eq!(area.x, 30);

        let area = chart_area(Rect::new(5, 5, 30, 40));
        assert_eq!((area.width, area.height), (30, 15));
        assert_eq!(area.y, 5 + 12);
    }

    #[test]
    fn accent_maps_to_rgb() {
        assert_eq!(accent(AccentColor::new(236, 29, 37)), Color::Rgb(236, 29, 37));
    }
}
