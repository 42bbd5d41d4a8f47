use anyhow::Result;
use std::fs;
use std::path::Path;
use tiny_skia::Pixmap;

/// Encode a pixmap as PNG and write it, creating parent directories as needed.
pub fn save_png(pixmap: &Pixmap, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let data = pixmap
        .encode_png()
        .map_err(|e| anyhow::anyhow!("Failed to encode PNG: {e}"))?;
    fs::write(output_path, data)
        .map_err(|e| anyhow::anyhow!("Failed to write PNG file: {e}"))?;
    Ok(())
}

/// Write a text file (SVG, JSON), creating parent directories as needed.
pub fn save_text(contents: &str, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    fs::write(output_path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output_path.display()))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", parent.display()))?;
    }
    Ok(())
}
