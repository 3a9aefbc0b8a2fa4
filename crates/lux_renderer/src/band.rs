//! Row-band partitioning for parallel rendering.
//!
//! Divides the image into horizontal bands of whole rows, one per worker.
//! Bands are contiguous and disjoint, so each worker can own a plain
//! `&mut [u8]` view of its rows in the shared output buffer.

use std::ops::Range;

use crate::frame::CHANNELS;

/// A horizontal band of rows `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// Index of the worker that owns this band
    pub index: usize,
    /// First row of the band
    pub start: u32,
    /// One past the last row of the band
    pub end: u32,
}

impl RowBand {
    /// Create a new band.
    pub fn new(index: usize, start: u32, end: u32) -> Self {
        Self { index, start, end }
    }

    /// The rows covered by this band.
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }

    /// Number of rows in this band. A band with `start > end` is empty.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of this band inside a full-frame buffer `width` pixels wide.
    pub fn byte_range(&self, width: u32) -> Range<usize> {
        let row_bytes = width as usize * CHANNELS;
        let start = self.start as usize * row_bytes;
        start..start + self.len() as usize * row_bytes
    }
}

/// Split `height` rows into `workers` bands.
///
/// Every worker gets `height / workers` rows and the last worker also takes
/// the remainder, so the bands always cover `[0, height)` exactly. With more
/// workers than rows the leading bands are empty.
pub fn partition_rows(height: u32, workers: usize) -> Vec<RowBand> {
    if workers == 0 {
        return Vec::new();
    }

    let per_worker = height / workers as u32;
    (0..workers)
        .map(|index| {
            let start = per_worker * index as u32;
            let end = if index + 1 == workers {
                height
            } else {
                start + per_worker
            };
            RowBand::new(index, start, end)
        })
        .collect()
}

/// Hand each band its own disjoint slice of a full-frame buffer.
///
/// `bands` must be contiguous and start at row 0, as produced by
/// [`partition_rows`].
pub fn split_bands<'a>(mut pixels: &'a mut [u8], width: u32, bands: &[RowBand]) -> Vec<&'a mut [u8]> {
    let mut slices = Vec::with_capacity(bands.len());

    for band in bands {
        let len = band.byte_range(width).len().min(pixels.len());
        let (head, tail) = std::mem::take(&mut pixels).split_at_mut(len);
        slices.push(head);
        pixels = tail;
    }

    slices
}
