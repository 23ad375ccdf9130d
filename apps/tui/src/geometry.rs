//! Polar layout for the stat chart.
//!
//! Coordinates are screen-style: x grows right, y grows down. Axis 0 points
//! straight up and the remaining axes follow clockwise.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Magnitude that reaches the outer ring.
pub const MAX_MAGNITUDE: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Angle in radians of axis `index` out of `count`.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    (TAU / count as f64).mul_add(index as f64, -FRAC_PI_2)
}

pub fn axis_point(center: Point, radius: f64, index: usize, count: usize) -> Point {
    let angle = axis_angle(index, count);
    Point::new(
        angle.cos().mul_add(radius, center.x),
        angle.sin().mul_add(radius, center.y),
    )
}

/// One vertex per magnitude, scaled so `MAX_MAGNITUDE` lands on `max_radius`.
pub fn hexagon_points(center: Point, max_radius: f64, magnitudes: &[f64]) -> Vec<Point> {
    let count = magnitudes.len();
    magnitudes
        .iter()
        .enumerate()
        .map(|(index, magnitude)| {
            axis_point(center, max_radius * (magnitude / MAX_MAGNITUDE), index, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(150.0, 150.0);

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn one_point_per_magnitude() {
        assert_eq!(hexagon_points(CENTER, 120.0, &[1.0; 6]).len(), 6);
        assert_eq!(hexagon_points(CENTER, 120.0, &[3.0; 4]).len(), 4);
        assert!(hexagon_points(CENTER, 120.0, &[]).is_empty());
    }

    #[test]
    fn radius_scales_with_magnitude() {
        let magnitudes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let points = hexagon_points(CENTER, 120.0, &magnitudes);
        for (point, magnitude) in points.iter().zip(magnitudes) {
            assert_close(point.distance(CENTER), 120.0 * magnitude / 6.0);
        }
    }

    #[test]
    fn equal_magnitudes_make_a_regular_hexagon_from_the_top() {
        let points = hexagon_points(CENTER, 120.0, &[6.0; 6]);

        assert_close(points[0].x, 150.0);
        assert_close(points[0].y, 30.0);

        // Clockwise on screen: the second vertex is to the right of the first.
        assert!(points[1].x > points[0].x);

        for (index, point) in points.iter().enumerate() {
            let angle = (point.y - CENTER.y).atan2(point.x - CENTER.x);
            let expected = axis_angle(index, 6);
            assert_close(angle.sin(), expected.sin());
            assert_close(angle.cos(), expected.cos());
        }

        let side = points[0].distance(points[1]);
        for pair in points.windows(2) {
            assert_close(pair[0].distance(pair[1]), side);
        }
        // Regular hexagon side equals its circumradius.
        assert_close(side, 120.0);
    }

    #[test]
    fn same_input_same_output() {
        let magnitudes = [2.5, 6.0, 0.0, 1.0, 3.3, 4.0];
        assert_eq!(
            hexagon_points(CENTER, 80.0, &magnitudes),
            hexagon_points(CENTER, 80.0, &magnitudes)
        );
    }

    #[test]
    fn zero_magnitude_collapses_to_center() {
        let points = hexagon_points(CENTER, 120.0, &[0.0; 6]);
        for point in points {
            assert_close(point.distance(CENTER), 0.0);
        }
    }
}
