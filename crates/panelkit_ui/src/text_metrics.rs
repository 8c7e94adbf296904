//! Text measurement utilities.
//!
//! Bitmap fonts report ascent above the baseline and descent below it (the
//! descent is zero or negative). Widgets only need those two numbers to
//! center a line vertically; the advance width is an approximation used by
//! the recording renderer to move its cursor.

use serde::{Deserialize, Serialize};

/// Metrics for one bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Pixels above the baseline
    pub ascent: i32,
    /// Pixels below the baseline, zero or negative
    pub descent: i32,
    /// Average glyph advance in pixels
    pub char_width: i32,
}

impl FontMetrics {
    /// Metrics of the small built-in font (roughly a 7x13 face).
    pub const SMALL: FontMetrics = FontMetrics {
        ascent: 10,
        descent: -3,
        char_width: 7,
    };

    pub fn new(ascent: i32, descent: i32) -> Self {
        Self {
            ascent,
            descent,
            char_width: Self::SMALL.char_width,
        }
    }

    pub fn with_char_width(mut self, char_width: i32) -> Self {
        self.char_width = char_width;
        self
    }

    /// Full glyph height, ascent to descent.
    pub fn text_height(&self) -> i32 {
        self.ascent - self.descent
    }

    /// Baseline y that centers one line of text inside a band starting at
    /// `top` with the given height.
    pub fn centered_baseline(&self, top: i32, height: i32) -> i32 {
        top + (height + self.text_height()) / 2
    }

    /// Estimated advance of a single line.
    pub fn advance(&self, text: &str) -> i32 {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        chars.saturating_mul(self.char_width)
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::SMALL
    }
}
