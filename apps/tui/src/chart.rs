use crate::domain::{StatAxis, StatRank, StatSet};
use crate::geometry::{axis_angle, axis_point, hexagon_points, Point, MAX_MAGNITUDE};

/// Side of the square the chart is laid out in.
pub const VIEWBOX: f64 = 300.0;
pub const CENTER: Point = Point::new(VIEWBOX / 2.0, VIEWBOX / 2.0);
pub const MAX_RADIUS: f64 = 120.0;
pub const LABEL_RADIUS: f64 = 140.0;
pub const FRAME_RADIUS: f64 = 180.0;
pub const GRID_LEVELS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub axis: StatAxis,
    pub rank: StatRank,
    pub anchor: Point,
    /// Rotation in degrees that keeps the text upright along the axis.
    /// Terminal cells cannot rotate text, so the canvas widget only uses
    /// `flipped`; the angle is kept for renderers that can.
    pub rotation: f64,
    /// Lower-half labels are turned the other way and sit below their badge.
    pub flipped: bool,
}

impl AxisLabel {
    fn new(axis: StatAxis, rank: StatRank, index: usize, count: usize) -> Self {
        let angle = axis_angle(index, count);
        let flipped = angle.sin() > 0.0;
        let degrees = angle.to_degrees();
        let rotation = if flipped { degrees - 90.0 } else { degrees + 90.0 };

        Self {
            axis,
            rank,
            anchor: axis_point(CENTER, LABEL_RADIUS, index, count),
            rotation,
            flipped,
        }
    }
}

/// Everything needed to draw one apple's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub rings: Vec<Vec<Point>>,
    pub axes: Vec<(Point, Point)>,
    pub outline: Vec<Point>,
    pub frame_radius: f64,
    pub data: Vec<Point>,
    pub labels: Vec<AxisLabel>,
}

impl RadarChart {
    pub fn new(stats: &StatSet, progress: f64) -> Self {
        let count = StatAxis::ALL.len();
        let progress = progress.clamp(0.0, 1.0);

        let rings = (1..=GRID_LEVELS)
            .map(|level| hexagon_points(CENTER, MAX_RADIUS, &vec![level as f64; count]))
            .collect();

        let outline = hexagon_points(CENTER, MAX_RADIUS, &vec![MAX_MAGNITUDE; count]);
        let axes = outline.iter().map(|end| (CENTER, *end)).collect();

        let magnitudes = stats.magnitudes().map(|magnitude| magnitude * progress);
        let data = hexagon_points(CENTER, MAX_RADIUS, &magnitudes);

        let labels = stats
            .iter()
            .enumerate()
            .map(|(index, (axis, rank))| AxisLabel::new(axis, rank, index, count))
            .collect();

        Self {
            rings,
            axes,
            outline,
            frame_radius: FRAME_RADIUS,
            data,
            labels,
        }
    }
}
