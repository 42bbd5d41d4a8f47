use crate::circle::BezierCircle;
use crate::color_utils::{opacity, to_hex_rgb};
use crate::models::{PathCommand, ViewBox};
use crate::scene::{Scene, StyledCircle};
use palette::Srgba;

pub const POINT_MARKER_RADIUS: f32 = 4.0;
pub const SELECTED_MARKER_RADIUS: f32 = 6.0;
pub const HELP_LINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub view: ViewBox,
    /// Draw the control polygon and a dot on every point.
    pub help_lines: bool,
    pub background: Option<Srgba<u8>>,
}

impl RenderOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            view: ViewBox { width, height },
            help_lines: false,
            background: None,
        }
    }
}

/// SVG path data for the circle outline, in the circle's centered plane.
pub fn path_data(circle: &BezierCircle) -> String {
    circle
        .build_path()
        .iter()
        .map(|cmd| match cmd {
            PathCommand::MoveTo(p) => format!("M {} {}", p.x, p.y),
            PathCommand::CubicTo(c1, c2, p) => {
                format!("C {} {}, {} {}, {} {}", c1.x, c1.y, c2.x, c2.y, p.x, p.y)
            }
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Straight lines from each anchor to its neighbouring controls.
pub(crate) fn help_line_pairs(circle: &BezierCircle) -> Vec<((f32, f32), (f32, f32))> {
    circle
        .segments()
        .iter()
        .flat_map(|seg| {
            [
                ((seg.start.x, seg.start.y), (seg.ctrl1.x, seg.ctrl1.y)),
                ((seg.ctrl2.x, seg.ctrl2.y), (seg.end.x, seg.end.y)),
            ]
        })
        .collect()
}

pub(crate) fn marker_radius(circle: &BezierCircle, index: usize) -> f32 {
    if circle.selected() == Some(index) {
        SELECTED_MARKER_RADIUS
    } else {
        POINT_MARKER_RADIUS
    }
}

fn render_circle(c: &StyledCircle, help_lines: bool) -> String {
    let color = to_hex_rgb(c.stroke.color);
    let alpha = opacity(c.stroke.color);
    let mut out = format!(
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
        path_data(&c.model),
        color,
        c.stroke.width,
        alpha
    );

    if help_lines {
        for ((x1, y1), (x2, y2)) in help_line_pairs(&c.model) {
            out.push_str(&format!(
                "\n    <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{color}\" stroke-width=\"{HELP_LINE_WIDTH}\" stroke-opacity=\"{alpha}\"/>"
            ));
        }
        for (i, p) in c.model.control_points().iter().enumerate() {
            out.push_str(&format!(
                "\n    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{color}\" fill-opacity=\"{alpha}\"/>",
                p.x,
                p.y,
                marker_radius(&c.model, i)
            ));
        }
    }

    out
}

/// Whole scene as an SVG document, circles centered in the view.
pub fn generate_svg(scene: &Scene, options: &RenderOptions) -> String {
    let (cx, cy) = options.view.center();

    let background = options
        .background
        .map(|bg| {
            format!(
                "\n  <rect width=\"100%\" height=\"100%\" fill=\"{}\" fill-opacity=\"{}\"/>",
                to_hex_rgb(bg),
                opacity(bg)
            )
        })
        .unwrap_or_default();

    let circles_svg = scene
        .iter()
        .map(|c| render_circle(c, options.help_lines))
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        "<svg viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" xmlns=\"http://www.w3.org/2000/svg\">{background}\n  <g transform=\"translate({cx} {cy})\">\n    {circles_svg}\n  </g>\n</svg>",
        w = options.view.width,
        h = options.view.height,
    )
}
