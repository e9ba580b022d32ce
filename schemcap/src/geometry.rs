//! Plane geometry for terminal placement and wire hit-testing.
//!
//! All coordinates live in one global drawing frame. Scene positions are
//! grid-quantized and terminal transforms are exact rigid motions, so two
//! points that are meant to coincide carry bit-identical coordinates and can
//! be keyed by their printed form. If placement is ever allowed off-grid,
//! point identity has to move to tolerance-based clustering (union-find over
//! spatial buckets) instead of key equality.

use serde::{Deserialize, Serialize};

/// Spacing of the drawing grid, in drawing units.
pub const GRID_SIZE: f64 = 20.0;

/// A point in the global drawing frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// String identity used to key the connection graph.
    ///
    /// Mirroring negates x, so a local 0.0 can come out as -0.0; both zeros
    /// must map to the same key.
    pub fn key(&self) -> String {
        format!("{},{}", canon(self.x), canon(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

fn canon(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Component orientation, restricted to the four grid rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// The next quarter turn counter-clockwise.
    pub fn turned(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Rotate a local offset about the origin. Quadrant angles only, so the
    /// result is exact; no trigonometry is involved.
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Rotation::R0 => (x, y),
            Rotation::R90 => (-y, x),
            Rotation::R180 => (-x, -y),
            Rotation::R270 => (y, -x),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            other => Err(format!(
                "rotation must be one of 0, 90, 180, 270; got {}",
                other
            )),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}

/// Snap a coordinate to the nearest grid line.
pub fn snap(v: f64) -> f64 {
    (v / GRID_SIZE).round() * GRID_SIZE
}

/// Euclidean distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Map a terminal offset from component-local coordinates into the drawing
/// frame: mirror across the local y axis, rotate, then translate.
///
/// The order is load-bearing. Mirroring after the rotation puts the
/// terminals of a rotated transistor in the wrong quadrant.
pub fn transform_point(local: Point, position: Point, rotation: Rotation, mirror: bool) -> Point {
    let x = if mirror { -local.x } else { local.x };
    let (rx, ry) = rotation.apply(x, local.y);
    Point::new(rx + position.x, ry + position.y)
}

/// Test whether `point` lies on the segment `a`-`b` within `tolerance`.
///
/// The point must fall inside the segment's bounding box expanded by the
/// tolerance on each side, and its perpendicular distance to the infinite
/// line through the segment must stay under the tolerance. A zero-length
/// segment degenerates to a plain distance check.
pub fn point_near_segment(point: Point, a: Point, b: Point, tolerance: f64) -> bool {
    let min_x = a.x.min(b.x) - tolerance;
    let max_x = a.x.max(b.x) + tolerance;
    let min_y = a.y.min(b.y) - tolerance;
    let max_y = a.y.max(b.y) + tolerance;
    if point.x < min_x || point.x > max_x || point.y < min_y || point.y > max_y {
        return false;
    }

    let len = distance(a, b);
    if len == 0.0 {
        return distance(point, a) < tolerance;
    }

    // Perpendicular distance as |cross product| / base length.
    let cross = ((b.x - a.x) * (a.y - point.y) - (a.x - point.x) * (b.y - a.y)).abs();
    cross / len < tolerance
}
