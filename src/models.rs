use euclid::default::{Point2D, Vector2D};
use serde::Serialize;

/// A point in the circle's own plane, origin at the view center, y pointing down.
pub type Point = Point2D<f32>;

/// A translation between two points.
pub type Delta = Vector2D<f32>;

/// Number of points describing the circle: four anchors, two controls each.
pub const POINT_COUNT: usize = 12;

/// Number of cubic arcs.
pub const ARC_COUNT: usize = 4;

/// Role of a point in the control-point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// On-curve point where two arcs meet (indices 0, 3, 6, 9).
    Anchor,
    /// Off-curve point shaping one arc.
    Control,
}

impl PointKind {
    pub fn of_index(index: usize) -> Self {
        if index % 3 == 0 {
            PointKind::Anchor
        } else {
            PointKind::Control
        }
    }
}

/// One drawing instruction of the closed outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// A single cubic arc: (start anchor, control 1, control 2, end anchor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicSegment {
    pub fn as_tuples(&self) -> crate::math_utils::CubicBezierSegment<f32> {
        (
            (self.start.x, self.start.y),
            (self.ctrl1.x, self.ctrl1.y),
            (self.ctrl2.x, self.ctrl2.y),
            (self.end.x, self.end.y),
        )
    }
}

/// Output canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub width: u32,
    pub height: u32,
}

impl ViewBox {
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}
