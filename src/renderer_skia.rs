use crate::circle::BezierCircle;
use crate::models::PathCommand;
use crate::renderer::{help_line_pairs, marker_radius, RenderOptions, HELP_LINE_WIDTH};
use crate::scene::{Scene, StyledCircle};
use crate::utils::save_png;
use anyhow::{Context, Result};
use palette::Srgba;
use std::path::Path as FsPath;
use tiny_skia::*;

fn paint_for(color: Srgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
    paint.anti_alias = true;
    paint
}

/// Convert the circle outline to a tiny-skia path
pub fn outline_path(circle: &BezierCircle) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for cmd in circle.build_path() {
        match cmd {
            PathCommand::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCommand::CubicTo(c1, c2, p) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathCommand::Close => pb.close(),
        }
    }
    pb.finish()
}

fn draw_help_lines(pixmap: &mut Pixmap, c: &StyledCircle, transform: Transform) {
    let paint = paint_for(c.stroke.color);

    let mut pb = PathBuilder::new();
    for ((x1, y1), (x2, y2)) in help_line_pairs(&c.model) {
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
    }
    if let Some(lines) = pb.finish() {
        let stroke = Stroke {
            width: HELP_LINE_WIDTH,
            ..Stroke::default()
        };
        pixmap.stroke_path(&lines, &paint, &stroke, transform, None);
    }

    for (i, p) in c.model.control_points().iter().enumerate() {
        if let Some(dot) = PathBuilder::from_circle(p.x, p.y, marker_radius(&c.model, i)) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, transform, None);
        }
    }
}

/// Rasterize the scene, circles centered in the view
pub fn render_to_pixmap(scene: &Scene, options: &RenderOptions) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(options.view.width, options.view.height)
        .ok_or_else(|| anyhow::anyhow!("Failed to create pixmap {:?}", options.view))?;

    if let Some(bg) = options.background {
        pixmap.fill(Color::from_rgba8(bg.red, bg.green, bg.blue, bg.alpha));
    }

    let (cx, cy) = options.view.center();
    let transform = Transform::from_translate(cx, cy);

    for c in scene.iter() {
        let Some(path) = outline_path(&c.model) else {
            log::warn!("skipping degenerate outline");
            continue;
        };
        let stroke = Stroke {
            width: c.stroke.width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint_for(c.stroke.color), &stroke, transform, None);

        if options.help_lines {
            draw_help_lines(&mut pixmap, c, transform);
        }
    }

    Ok(pixmap)
}

pub fn render_to_png(scene: &Scene, options: &RenderOptions, output_path: &FsPath) -> Result<()> {
    let pixmap = render_to_pixmap(scene, options)?;
    save_png(&pixmap, output_path)
        .with_context(|| format!("Failed to save PNG: {output_path:?}"))?;
    Ok(())
}
