//! Stroke geometry: path points and padded bounding boxes.

use serde::{Deserialize, Serialize};

/// A path vertex.
///
/// Inside a [`BrushElement`](super::BrushElement) points are stored relative
/// to the element's top-left anchor; elsewhere they are plain logical
/// canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned box in logical canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left X coordinate
    pub x: f64,
    /// Top-left Y coordinate
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-length stroke box: `line_width` square with its corner at `origin`.
    pub fn square(origin: Point, line_width: f64) -> Self {
        Self::new(origin.x, origin.y, line_width, line_width)
    }
}

/// Width and height of a padded stroke extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub w: f64,
    pub h: f64,
}

/// Computes the extent covering every point in `points`, padded by
/// `line_width` so thick strokes are not clipped.
///
/// The result is never smaller than `line_width` in either dimension, so a
/// single-point (or empty) path still yields a `line_width` square.
pub fn brush_bounds(points: &[Point], line_width: f64) -> Extent {
    let Some(first) = points.first() else {
        return Extent {
            w: line_width,
            h: line_width,
        };
    };

    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;

    for point in &points[1..] {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    Extent {
        w: max_x - min_x + line_width,
        h: max_y - min_y + line_width,
    }
}
