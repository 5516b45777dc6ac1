// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text styling and measurement for Prism labels.
//!
//! Chart code never shapes glyphs. It only needs to say *how* a label should look
//! (size, weight) and, for host layout such as centering a screen title, to
//! estimate how much room a single line of text takes.
//!
//! The crate is `no_std` and has no dependencies; renderers map [`TextStyle`] onto
//! whatever font system they own.

#![no_std]

/// Styling inputs carried by every text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface units (pixels).
    pub font_size: f64,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Creates a bold style with the given `font_size`.
    #[must_use]
    pub fn bold(font_size: f64) -> Self {
        Self::new(font_size).with_weight(FontWeight::BOLD)
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Semi-bold weight (`600`).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);

    /// Returns `true` for weights at or above [`FontWeight::SEMI_BOLD`].
    #[must_use]
    pub fn is_emphasized(self) -> bool {
        self >= Self::SEMI_BOLD
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Single-line text measurement.
///
/// `text` is always treated as one line.
pub trait TextMeasurer {
    /// Measure `text` as drawn with `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// A heuristic measurer: ~0.6em per glyph, baseline at 0.8em.
///
/// Emphasized weights get a 5% wider advance, which is close enough for
/// centering titles without a font database.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = if style.font_weight.is_emphasized() {
            0.63
        } else {
            0.6
        };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_style_is_emphasized() {
        let style = TextStyle::bold(14.0);
        assert_eq!(style.font_weight, FontWeight::BOLD);
        assert!(style.font_weight.is_emphasized());
        assert!(!TextStyle::new(14.0).font_weight.is_emphasized());
        assert!(FontWeight::SEMI_BOLD.is_emphasized());
    }

    #[test]
    fn heuristic_width_counts_chars_not_bytes() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let ascii = m.measure("C++", &style);
        let wide = m.measure("Ëöü", &style);
        assert_eq!(ascii.advance_width, wide.advance_width);
        assert!((ascii.advance_width - 18.0).abs() < 1e-9);
        assert!((ascii.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_text_has_no_advance() {
        let m = HeuristicTextMeasurer.measure("", &TextStyle::bold(30.0));
        assert_eq!(m.advance_width, 0.0);
    }
}
