//! Geometry and colors of a rendered feedback row

use crate::core::Feedback;

/// Largest block edge, in pixels, a rendered row may use
pub const MAX_BLOCK_SIZE: u32 = 4096;

/// How the game draws a guess result
///
/// Only the block size and the three feedback colors drive decoding. The
/// spacing and word color are used when drawing a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySpec {
    pub block_width: u32,
    pub block_height: u32,
    correct_location_color: String,
    incorrect_location_color: String,
    incorrect_color: String,
    pub space_between_letters: u32,
    word_color: String,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self {
            block_width: 80,
            block_height: 80,
            correct_location_color: "#00274C".to_string(),
            incorrect_location_color: "#FFCB05".to_string(),
            incorrect_color: "#D3D3D3".to_string(),
            space_between_letters: 5,
            word_color: "#FFFFFF".to_string(),
        }
    }
}

impl DisplaySpec {
    #[must_use]
    pub fn with_block_size(mut self, width: u32, height: u32) -> Self {
        self.block_width = width;
        self.block_height = height;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.space_between_letters = spacing;
        self
    }

    /// Set the colors for green, yellow and gray blocks
    ///
    /// Codes are stored uppercase so `#ffcb05` and `#FFCB05` configure the same
    /// color.
    #[must_use]
    pub fn with_colors(mut self, correct: &str, misplaced: &str, absent: &str) -> Self {
        self.correct_location_color = normalize(correct);
        self.incorrect_location_color = normalize(misplaced);
        self.incorrect_color = normalize(absent);
        self
    }

    #[must_use]
    pub fn with_word_color(mut self, color: &str) -> Self {
        self.word_color = normalize(color);
        self
    }

    #[must_use]
    pub fn correct_location_color(&self) -> &str {
        &self.correct_location_color
    }

    #[must_use]
    pub fn incorrect_location_color(&self) -> &str {
        &self.incorrect_location_color
    }

    #[must_use]
    pub fn incorrect_color(&self) -> &str {
        &self.incorrect_color
    }

    #[must_use]
    pub fn word_color(&self) -> &str {
        &self.word_color
    }

    /// Color code used to draw `feedback`
    #[must_use]
    pub fn color_for(&self, feedback: Feedback) -> &str {
        match feedback {
            Feedback::CorrectPlace => &self.correct_location_color,
            Feedback::PresentWrongPlace => &self.incorrect_location_color,
            Feedback::Absent => &self.incorrect_color,
        }
    }

    /// Feedback drawn with exactly this color code, if any
    #[must_use]
    pub fn feedback_for(&self, color: &str) -> Option<Feedback> {
        [
            Feedback::CorrectPlace,
            Feedback::PresentWrongPlace,
            Feedback::Absent,
        ]
        .into_iter()
        .find(|&feedback| self.color_for(feedback) == color)
    }

    /// Point sampled for the block at `index`: half a block in, a quarter down
    #[must_use]
    pub const fn sample_point(&self, index: u32) -> (u32, u32) {
        (
            self.block_width
                .saturating_mul(index)
                .saturating_add(self.block_width / 2),
            self.block_height / 4,
        )
    }

    /// Whether a row of `letters` blocks drawn with this spacing can be read
    /// back
    ///
    /// Sampling ignores spacing, so the sample for block `i` drifts left of
    /// the block by `spacing * i`. It stays inside while that drift is at most
    /// half a block.
    #[must_use]
    pub const fn samples_inside_blocks(&self, letters: u32) -> bool {
        if self.block_width == 0 || self.block_height == 0 {
            return false;
        }
        letters == 0 || self.space_between_letters.saturating_mul(letters - 1) <= self.block_width / 2
    }
}

fn normalize(color: &str) -> String {
    color.trim().to_uppercase()
}

/// `#RRGGBB` to channel bytes
#[must_use]
pub fn parse_hex_color(code: &str) -> Option<[u8; 3]> {
    let hex = code.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Channel bytes to an uppercase `#`-prefixed hex code, alpha dropped
///
/// The fourth channel of an RGBA pixel is skipped; every other channel is
/// encoded in order.
#[must_use]
pub fn hex_code(channels: &[u8]) -> String {
    let mut code = String::with_capacity(1 + channels.len() * 2);
    code.push('#');
    for (i, byte) in channels.iter().enumerate() {
        if i != 3 {
            code.push_str(&format!("{byte:02X}"));
        }
    }
    code
}
