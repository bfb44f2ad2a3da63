//! Pixel access for rendered feedback rows

use super::display_spec::{DisplaySpec, parse_hex_color};
use crate::core::Pattern;

/// Anything that can be queried for a pixel's channel bytes
pub trait PixelSource {
    /// Width and height in pixels; samples outside are never read
    fn dimensions(&self) -> (u32, u32);

    /// Channel bytes at `(x, y)`, or `None` outside the image
    fn pixel(&self, x: u32, y: u32) -> Option<&[u8]>;
}

/// Row-major in-memory image with 1 to 4 channels per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// An image filled with `fill`, whose length sets the channel count
    ///
    /// # Panics
    /// Panics if `fill` is empty or longer than four channels.
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: &[u8]) -> Self {
        assert!(
            (1..=4).contains(&fill.len()),
            "pixel must have 1 to 4 channels"
        );
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            channels: fill.len(),
            data: fill.repeat(pixels),
        }
    }

    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Paint a rectangle, clipped to the image bounds
    ///
    /// `color` must have as many channels as the image.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: &[u8]) {
        debug_assert_eq!(color.len(), self.channels);
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let start = self.offset(col, row);
                self.data[start..start + self.channels].copy_from_slice(color);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels
    }
}

impl PixelSource for PixelBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        self.data.get(start..start + self.channels)
    }
}

/// Draw a feedback row as the game shows it
///
/// Blocks are laid out left to right with `space_between_letters` of word
/// color between them. Unparseable color codes draw black.
#[must_use]
pub fn render_pattern(pattern: &Pattern, spec: &DisplaySpec) -> PixelBuffer {
    let count = pattern.len() as u32;
    let stride = spec.block_width.saturating_add(spec.space_between_letters);
    let width = stride
        .saturating_mul(count)
        .saturating_sub(spec.space_between_letters)
        .max(1);
    let background = rgba(spec.word_color());

    let mut image = PixelBuffer::filled(width, spec.block_height.max(1), &background);
    for (i, &feedback) in pattern.entries().iter().enumerate() {
        let x = stride.saturating_mul(i as u32);
        image.fill_rect(x, 0, spec.block_width, spec.block_height, &rgba(spec.color_for(feedback)));
    }
    image
}

fn rgba(code: &str) -> [u8; 4] {
    let [r, g, b] = parse_hex_color(code).unwrap_or([0, 0, 0]);
    [r, g, b, 0xFF]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_buffer_reports_pixels() {
        let image = PixelBuffer::filled(3, 2, &[1, 2, 3]);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.channels(), 3);
        assert_eq!(image.pixel(2, 1), Some(&[1, 2, 3][..]));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut image = PixelBuffer::filled(4, 4, &[0]);
        image.fill_rect(2, 2, 10, 10, &[9]);
        assert_eq!(image.pixel(1, 1), Some(&[0][..]));
        assert_eq!(image.pixel(2, 2), Some(&[9][..]));
        assert_eq!(image.pixel(3, 3), Some(&[9][..]));
    }

    #[test]
    fn rendered_row_has_blocks_and_gaps() {
        let spec = DisplaySpec::default();
        let pattern = Pattern::from_str("G-Y").unwrap();
        let image = render_pattern(&pattern, &spec);

        assert_eq!(image.dimensions(), (80 * 3 + 5 * 2, 80));
        assert_eq!(image.pixel(10, 10), Some(&[0x00, 0x27, 0x4C, 0xFF][..]));
        assert_eq!(image.pixel(82, 10), Some(&[0xFF, 0xFF, 0xFF, 0xFF][..]));
        assert_eq!(image.pixel(90, 10), Some(&[0xD3, 0xD3, 0xD3, 0xFF][..]));
        assert_eq!(image.pixel(200, 70), Some(&[0xFF, 0xCB, 0x05, 0xFF][..]));
    }
}
