//! Image-based feedback
//!
//! Some games report a guess result only as a rendered row of colored
//! blocks. This module holds the display geometry, a minimal pixel buffer,
//! and the decoder that maps sampled colors back to [`Feedback`](crate::core::Feedback).

mod decoder;
mod display_spec;
mod raster;

pub use decoder::{DecodeError, decode, decode_each};
pub use display_spec::{DisplaySpec, MAX_BLOCK_SIZE, hex_code, parse_hex_color};
pub use raster::{PixelBuffer, PixelSource, render_pattern};
