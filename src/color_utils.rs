/// Stroke color parsing and formatting utilities
use crate::error::{ModelError, Result};
use palette::Srgba;

/// Parse a hex color string into RGBA
/// Accepts:
/// - #RRGGBB or RRGGBB => alpha 255
/// - #RRGGBBAA or RRGGBBAA
pub fn parse_color(color_str: &str) -> Result<Srgba<u8>> {
    let trimmed = color_str.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || ModelError::InvalidColor(color_str.to_string());

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let component = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    match hex.len() {
        6 => Ok(Srgba::new(component(0)?, component(2)?, component(4)?, 255)),
        8 => Ok(Srgba::new(
            component(0)?,
            component(2)?,
            component(4)?,
            component(6)?,
        )),
        _ => Err(invalid()),
    }
}

/// Parse a comma separated list such as "#1296db,#ff8800"
pub fn parse_color_list(list: &str) -> Result<Vec<Srgba<u8>>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse_color)
        .collect()
}

/// Format the RGB part as "#rrggbb", as used in SVG attributes
pub fn to_hex_rgb(color: Srgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Alpha as an SVG opacity in [0, 1]
pub fn opacity(color: Srgba<u8>) -> f32 {
    color.alpha as f32 / 255.0
}
