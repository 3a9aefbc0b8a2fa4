//! PNG output.

use std::path::Path;

use anyhow::{Context, Result};
use lux_renderer::PixelBuffer;

/// Write a rendered frame as an 8-bit RGB PNG.
pub fn save_png(image: &PixelBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        image.as_bytes(),
        image.width(),
        image.height(),
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}
