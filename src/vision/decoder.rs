//! Turn a rendered feedback row back into per-letter feedback
//!
//! One pixel is sampled inside each block and compared exactly against the
//! configured colors. Blocks are assumed to be a single flat color.

use super::display_spec::{DisplaySpec, hex_code};
use super::raster::PixelSource;
use crate::core::{Feedback, Word};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("block {index} has color {color}, which matches no configured feedback color")]
    UnmappedColor { index: usize, color: String },

    #[error("block {index} samples ({x}, {y}), outside the image")]
    OutOfBounds { index: usize, x: u32, y: u32 },
}

/// Decode every block independently
///
/// Yields exactly one entry per letter of `guess`, so a bad block never
/// shifts the ones after it.
pub fn decode_each<P: PixelSource + ?Sized>(
    guess: &Word,
    image: &P,
    spec: &DisplaySpec,
) -> Vec<Result<Feedback, DecodeError>> {
    (0..guess.len())
        .map(|index| decode_block(index, image, spec))
        .collect()
}

/// Decode a whole row, failing on the first block that cannot be read
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered, left to right.
pub fn decode<P: PixelSource + ?Sized>(
    guess: &Word,
    image: &P,
    spec: &DisplaySpec,
) -> Result<Vec<Feedback>, DecodeError> {
    decode_each(guess, image, spec).into_iter().collect()
}

fn decode_block<P: PixelSource + ?Sized>(
    index: usize,
    image: &P,
    spec: &DisplaySpec,
) -> Result<Feedback, DecodeError> {
    let (x, y) = spec.sample_point(index as u32);
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(DecodeError::OutOfBounds { index, x, y });
    }
    let channels = image
        .pixel(x, y)
        .ok_or(DecodeError::OutOfBounds { index, x, y })?;
    let color = hex_code(channels);

    spec.feedback_for(&color)
        .ok_or(DecodeError::UnmappedColor { index, color })
}
