use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH_PX: u32 = 1080;
pub const DEFAULT_HEIGHT_PX: u32 = 1920;
pub const DEFAULT_DENSITY: f32 = 3.0;
/// Close to the ideal 4-arc constant (~0.5523).
pub const DEFAULT_RATIO: f32 = 0.55;
pub const DEFAULT_TOUCH_REGION_DP: f32 = 20.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;
pub const DEFAULT_STROKE_ALPHA: u8 = 200;
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 80;
pub const DEFAULT_STROKE_COLOR: &str = "#1296db";

/// Display metrics and tuning values for a set of circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width_px: u32,
    pub height_px: u32,
    pub density: f32,
    pub ratio: f32,
    pub touch_region_dp: f32,
    pub stroke_width: f32,
    pub stroke_alpha: u8,
    pub play_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
            density: DEFAULT_DENSITY,
            ratio: DEFAULT_RATIO,
            touch_region_dp: DEFAULT_TOUCH_REGION_DP,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_alpha: DEFAULT_STROKE_ALPHA,
            play_interval_ms: DEFAULT_PLAY_INTERVAL_MS,
        }
    }
}

impl Config {
    /// A quarter of the display width, using integer division on the pixel width.
    pub fn radius_px(&self) -> f32 {
        (self.width_px / 4) as f32
    }

    /// Half-width of the square around each point that accepts a touch.
    pub fn touch_region_px(&self) -> f32 {
        dp_to_px(self.touch_region_dp, self.density) as f32
    }

    pub fn play_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.play_interval_ms)
    }
}

/// Density-independent pixels to device pixels, rounded half up.
pub fn dp_to_px(dp: f32, density: f32) -> i32 {
    (dp * density + 0.5) as i32
}
