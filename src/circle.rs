//! Twelve-point model of a circle drawn as four cubic Bezier arcs.
//!
//! Points are ordered arc by arc starting at the top anchor and running
//! clockwise (in y-down screen space): anchor, control, control, next anchor...
//! The fourth arc closes back onto the first anchor.

use crate::error::{ModelError, Result};
use crate::models::{CubicSegment, Delta, PathCommand, Point, ARC_COUNT, POINT_COUNT};
use euclid::default::Box2D;
use log::debug;
use rand::Rng;

/// Upper bound of the random offset added to each coordinate by
/// [`BezierCircle::randomize`], signed by the direction it pushes the point.
const JITTER: [(f32, f32); POINT_COUNT] = [
    (30.0, -30.0),
    (100.0, 0.0),
    (50.0, 0.0),
    (30.0, 0.0),
    (60.0, 0.0),
    (0.0, 70.0),
    (30.0, 30.0),
    (-100.0, 0.0),
    (0.0, 100.0),
    (-40.0, 40.0),
    (-110.0, 0.0),
    (0.0, -150.0),
];

/// Square tolerance area used to pick a point.
///
/// For a point `p` the accepted area is the half-open box
/// `[p.x - half_width + left_inset, p.x + half_width) x [p.y - half_width, p.y + half_width)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub half_width: f32,
    pub left_inset: f32,
}

impl HitRegion {
    /// Half-width in model units used when no display density is known.
    pub const DEFAULT_HALF_WIDTH: f32 = 20.0;
    pub const DEFAULT_LEFT_INSET: f32 = 2.0;

    pub fn new(half_width: f32) -> Self {
        Self {
            half_width,
            left_inset: Self::DEFAULT_LEFT_INSET,
        }
    }

    pub fn symmetric(half_width: f32) -> Self {
        Self {
            half_width,
            left_inset: 0.0,
        }
    }

    fn around(&self, p: Point) -> Box2D<f32> {
        let w = self.half_width;
        Box2D::new(
            Point::new(p.x - w + self.left_inset, p.y - w),
            Point::new(p.x + w, p.y + w),
        )
    }

    pub fn contains(&self, center: Point, query: Point) -> bool {
        self.around(center).contains(query)
    }
}

impl Default for HitRegion {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_WIDTH)
    }
}

#[derive(Debug, Clone)]
pub struct BezierCircle {
    radius: f32,
    ratio: f32,
    points: [Point; POINT_COUNT],
    selected: Option<usize>,
    hit_region: HitRegion,
}

impl BezierCircle {
    /// Build a circle of `radius` with controls at `ratio * radius` from their anchors.
    pub fn new(radius: f32, ratio: f32) -> Result<Self> {
        validate(radius, ratio)?;
        Ok(Self {
            radius,
            ratio,
            points: canonical_points(radius, ratio),
            selected: None,
            hit_region: HitRegion::default(),
        })
    }

    /// Replace radius and ratio and lay the points out again.
    pub fn initialize(&mut self, radius: f32, ratio: f32) -> Result<()> {
        validate(radius, ratio)?;
        self.radius = radius;
        self.ratio = ratio;
        self.reset();
        Ok(())
    }

    /// Restore the canonical layout, dropping any drag in progress.
    pub fn reset(&mut self) {
        self.points = canonical_points(self.radius, self.ratio);
        self.selected = None;
        debug!("circle reset: radius={} ratio={}", self.radius, self.ratio);
    }

    /// Replace every point with a fresh jittered sample of the canonical layout.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Same as [`randomize`](Self::randomize), drawing from `rng`.
    ///
    /// Each call starts from the canonical layout, so the result depends only on
    /// the numbers drawn and never on the previous frame.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        let mut points = canonical_points(self.radius, self.ratio);
        for (p, (ax, ay)) in points.iter_mut().zip(JITTER) {
            p.x += ax * rng.random::<f32>();
            p.y += ay * rng.random::<f32>();
        }
        self.points = points;
        self.selected = None;
    }

    /// Index of the first point whose tolerance box contains `at`.
    ///
    /// Lowest index wins when boxes overlap, even if a later point is closer.
    pub fn hit_test(&self, at: Point) -> Option<usize> {
        self.points
            .iter()
            .position(|p| self.hit_region.contains(*p, at))
    }

    pub fn select_for_drag(&mut self, index: usize) -> Result<()> {
        if index >= POINT_COUNT {
            return Err(ModelError::InvalidState(format!(
                "point index {index} out of range 0..{POINT_COUNT}"
            )));
        }
        self.selected = Some(index);
        debug!("selected point {index} at {:?}", self.points[index]);
        Ok(())
    }

    /// Move the selected point by (dx, dy). Does nothing without a selection.
    pub fn translate_selected(&mut self, dx: f32, dy: f32) {
        if let Some(index) = self.selected {
            self.points[index] += Delta::new(dx, dy);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn control_points(&self) -> &[Point; POINT_COUNT] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn hit_region(&self) -> HitRegion {
        self.hit_region
    }

    pub fn set_hit_region(&mut self, region: HitRegion) -> Result<()> {
        if !(region.half_width.is_finite() && region.half_width > 0.0) {
            return Err(ModelError::InvalidArgument(format!(
                "hit region half width must be positive, got {}",
                region.half_width
            )));
        }
        self.hit_region = region;
        Ok(())
    }

    /// The four arcs in drawing order, the last one ending on the first anchor.
    pub fn segments(&self) -> [CubicSegment; ARC_COUNT] {
        std::array::from_fn(|arc| {
            let i = arc * 3;
            CubicSegment {
                start: self.points[i],
                ctrl1: self.points[i + 1],
                ctrl2: self.points[i + 2],
                end: self.points[(i + 3) % POINT_COUNT],
            }
        })
    }

    /// Closed outline: move to the first anchor, one cubic per arc, close.
    pub fn build_path(&self) -> Vec<PathCommand> {
        let mut path = Vec::with_capacity(ARC_COUNT + 2);
        path.push(PathCommand::MoveTo(self.points[0]));
        path.extend(
            self.segments()
                .iter()
                .map(|seg| PathCommand::CubicTo(seg.ctrl1, seg.ctrl2, seg.end)),
        );
        path.push(PathCommand::Close);
        path
    }
}

fn validate(radius: f32, ratio: f32) -> Result<()> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ModelError::InvalidArgument(format!(
            "radius must be positive, got {radius}"
        )));
    }
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(ModelError::InvalidArgument(format!(
            "ratio must be positive, got {ratio}"
        )));
    }
    Ok(())
}

fn canonical_points(r: f32, ratio: f32) -> [Point; POINT_COUNT] {
    let cw = ratio * r;
    [
        // top, heading right
        Point::new(0.0, -r),
        Point::new(cw, -r),
        Point::new(r, -cw),
        // right, heading down
        Point::new(r, 0.0),
        Point::new(r, cw),
        Point::new(cw, r),
        // bottom, heading left
        Point::new(0.0, r),
        Point::new(-cw, r),
        Point::new(-r, cw),
        // left, heading up
        Point::new(-r, 0.0),
        Point::new(-r, -cw),
        Point::new(-cw, -r),
    ]
}
