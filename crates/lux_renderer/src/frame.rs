//! Frame synthesis: pixel grid to 8-bit grayscale-as-RGB buffer.

use std::ops::Range;
use std::time::Instant;

use log::info;
use lux_math::Vec2;
use rand::RngCore;

use crate::error::{RenderError, RenderResult};
use crate::sampler::sample;
use crate::{IntensityOverflow, RenderConfig};

/// Bytes per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Convert averaged radiance to an 8-bit intensity.
///
/// Radiance is scaled by 255 and truncated. Averaged radiance can reach
/// twice that range, so `overflow` decides between saturating and keeping
/// the low 8 bits. Negative and NaN radiance map to 0.
pub fn quantize(radiance: f32, overflow: IntensityOverflow) -> u8 {
    let scaled = radiance * 255.0;
    if scaled.is_nan() || scaled <= 0.0 {
        return 0;
    }
    match overflow {
        IntensityOverflow::Clamp => scaled.min(255.0) as u8,
        IntensityOverflow::Wrap => (scaled as u32 & 0xFF) as u8,
    }
}

/// Row-major RGB pixel buffer with R = G = B for every pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a black buffer.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let bytes = buffer_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| RenderError::Allocation { bytes })?;
        data.resize(bytes, 0);
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Get the intensity at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset(x, y)]
    }

    /// Set the intensity at (x, y) on all three channels.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let offset = self.offset(x, y);
        self.data[offset..offset + CHANNELS].fill(value);
    }

    /// Raw RGB bytes, ready for an encoder.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGB bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

/// Byte length of a `width` x `height` RGB buffer.
pub(crate) fn buffer_len(width: u32, height: u32) -> RenderResult<usize> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(RenderError::InvalidDimensions { width, height })
}

/// Render `rows` of a `width` x `height` image into `pixels`.
///
/// `pixels` must hold exactly those rows, starting at `rows.start`. Each
/// pixel is sampled at its normalized scene coordinate `(x / width, y / height)`.
pub fn render_rows(
    width: u32,
    height: u32,
    rows: Range<u32>,
    config: &RenderConfig,
    pixels: &mut [u8],
    rng: &mut dyn RngCore,
) -> RenderResult<()> {
    if width == 0 || height == 0 || rows.end > height {
        return Err(RenderError::InvalidDimensions { width, height });
    }
    let row_bytes = width as usize * CHANNELS;
    let expected = rows.len() * row_bytes;
    if pixels.len() != expected {
        return Err(RenderError::BandSize {
            rows,
            expected,
            actual: pixels.len(),
        });
    }

    for (row, y) in pixels.chunks_exact_mut(row_bytes).zip(rows) {
        for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let point = Vec2::new(x as f32 / width as f32, y as f32 / height as f32);
            let value = quantize(sample(point, config, rng), config.overflow);
            pixel.fill(value);
        }
    }

    Ok(())
}

/// Render the whole frame on the calling thread.
///
/// Pixels are visited row by row, left to right, so a given `rng` state
/// always produces the same buffer.
pub fn synthesize(
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<PixelBuffer> {
    config.validate()?;
    let mut image = PixelBuffer::new(width, height)?;

    let start = Instant::now();
    render_rows(width, height, 0..height, config, image.as_bytes_mut(), rng)?;
    info!(
        "Rendered {}x{} @ {} spp in {:?}",
        width,
        height,
        config.samples_per_pixel,
        start.elapsed()
    );

    Ok(image)
}
