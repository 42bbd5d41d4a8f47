pub mod animation;
pub mod circle;
pub mod color_utils;
pub mod config;
pub mod error;
pub mod export;
pub mod math_utils;
pub mod models;
pub mod renderer;
pub mod renderer_skia;
pub mod scene;
pub mod touch;
pub mod utils;

pub use circle::{BezierCircle, HitRegion};
pub use config::Config;
pub use error::ModelError;
pub use models::{CubicSegment, PathCommand, Point, PointKind};
pub use renderer::{generate_svg, RenderOptions};
pub use renderer_skia::render_to_png;
pub use scene::{Scene, StrokeStyle, StyledCircle};
pub use touch::{DragController, TouchEvent};
