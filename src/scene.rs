use crate::circle::{BezierCircle, HitRegion};
use crate::config::Config;
use crate::error::{ModelError, Result};
use palette::Srgba;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Srgba<u8>,
    pub width: f32,
}

impl StrokeStyle {
    /// `alpha` scales the color's own alpha channel.
    pub fn new(color: Srgba<u8>, width: f32, alpha: u8) -> Self {
        let scaled = (color.alpha as u16 * alpha as u16 + 127) / 255;
        Self {
            color: Srgba::new(color.red, color.green, color.blue, scaled as u8),
            width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StyledCircle {
    pub model: BezierCircle,
    pub stroke: StrokeStyle,
}

/// Independent circles drawn around one shared center.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    circles: Vec<StyledCircle>,
}

impl Scene {
    /// One circle per color, all laid out from the same display metrics.
    pub fn from_config(config: &Config, colors: &[Srgba<u8>]) -> Result<Self> {
        if colors.is_empty() {
            return Err(ModelError::InvalidArgument(
                "a scene needs at least one stroke color".to_string(),
            ));
        }
        let region = HitRegion::new(config.touch_region_px());
        let circles = colors
            .iter()
            .map(|&color| {
                let mut model = BezierCircle::new(config.radius_px(), config.ratio)?;
                model.set_hit_region(region)?;
                Ok(StyledCircle {
                    model,
                    stroke: StrokeStyle::new(color, config.stroke_width, config.stroke_alpha),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { circles })
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StyledCircle> {
        self.circles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StyledCircle> {
        self.circles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyledCircle> {
        self.circles.iter()
    }

    pub fn reset_all(&mut self) {
        for c in &mut self.circles {
            c.model.reset();
        }
    }

    pub fn randomize_all<R: Rng>(&mut self, rng: &mut R) {
        for c in &mut self.circles {
            c.model.randomize_with(rng);
        }
    }
}
