use crate::circle::BezierCircle;
use crate::math_utils::max_radial_error;
use crate::models::PointKind;
use log::info;
use serde::Serialize;

const RADIAL_SAMPLES: usize = 64;

/// Device pixels to density-independent pixels, rounded half up.
pub fn px_to_dip(px: f32, density: f32) -> i32 {
    (px / density + 0.5) as i32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointReport {
    pub index: usize,
    pub kind: PointKind,
    pub x_dp: i32,
    pub y_dp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleReport {
    pub radius_px: f32,
    pub ratio: f32,
    /// Worst distance, in px, between the drawn outline and the ideal circle.
    pub max_radial_error_px: f32,
    pub points: Vec<PointReport>,
}

pub fn control_point_report(circle: &BezierCircle, density: f32) -> CircleReport {
    let points = circle
        .control_points()
        .iter()
        .enumerate()
        .map(|(index, p)| PointReport {
            index,
            kind: PointKind::of_index(index),
            x_dp: px_to_dip(p.x, density),
            y_dp: px_to_dip(p.y, density),
        })
        .collect();

    let segments: Vec<_> = circle.segments().iter().map(|s| s.as_tuples()).collect();

    CircleReport {
        radius_px: circle.radius(),
        ratio: circle.ratio(),
        max_radial_error_px: max_radial_error(&segments, circle.radius(), RADIAL_SAMPLES),
        points,
    }
}

/// One line per point: "point 0 (anchor): [0, -90] dp"
pub fn format_report(report: &CircleReport) -> String {
    report
        .points
        .iter()
        .map(|p| {
            let kind = match p.kind {
                PointKind::Anchor => "anchor",
                PointKind::Control => "control",
            };
            format!("point {} ({kind}): [{}, {}] dp", p.index, p.x_dp, p.y_dp)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn log_control_points(circle: &BezierCircle, density: f32) {
    let report = control_point_report(circle, density);
    info!("control points:\n{}", format_report(&report));
}
