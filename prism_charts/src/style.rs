// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar styling and geometry constants.

use peniko::Color;
use peniko::color::palette::css;
use prism_text::TextStyle;

/// Styling and proportions shared by bar layout and rendering.
///
/// Sizes marked *dp* are density-independent and get multiplied by
/// [`BarStyle::scaled`]; the offsets marked *px* are raw surface units and stay put
/// regardless of density.
#[derive(Clone, Debug, PartialEq)]
pub struct BarStyle {
    /// Width of one bar slot (dp).
    pub bar_width: f64,
    /// Height budget handed to each bar before the percentage multiplier (dp).
    pub max_bar_height: f64,
    /// Front face width as a fraction of the slot width.
    pub front_width_ratio: f64,
    /// Front face height as a fraction of the bar height; the rest is the top cap.
    pub front_height_ratio: f64,
    /// Extrusion depth per unit of `(slot width - front width) * bar height`.
    pub depth_factor: f64,
    /// Percentage label x as a fraction of the front face width.
    pub label_inset_ratio: f64,
    /// Distance from the bar bottom down to the percentage label baseline (px).
    pub label_offset: f64,
    /// Distance the description pivot sits left of the extrusion depth (px).
    pub description_offset: f64,
    /// Description rotation in degrees.
    pub description_angle: f64,
    /// The neutral end of every face gradient.
    pub neutral: Color,
    /// Color of both label kinds.
    pub label_color: Color,
    /// Percentage label font (dp size).
    pub label_style: TextStyle,
    /// Description label font (dp size).
    pub description_style: TextStyle,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_width: 40.0,
            max_bar_height: 120.0,
            front_width_ratio: 3.0 / 5.0,
            front_height_ratio: 7.0 / 8.0,
            depth_factor: 0.002,
            label_inset_ratio: 1.0 / 5.0,
            label_offset: 55.0,
            description_offset: 20.0,
            description_angle: -50.0,
            neutral: css::GRAY,
            label_color: css::WHITE,
            label_style: TextStyle::bold(11.0),
            description_style: TextStyle::bold(14.0),
        }
    }
}

impl BarStyle {
    /// Converts the dp-sized fields to pixels for a display `density`.
    #[must_use]
    pub fn scaled(mut self, density: f64) -> Self {
        self.bar_width *= density;
        self.max_bar_height *= density;
        self.label_style.font_size *= density;
        self.description_style.font_size *= density;
        self
    }

    /// Sets the neutral gradient color.
    #[must_use]
    pub fn with_neutral(mut self, neutral: Color) -> Self {
        self.neutral = neutral;
        self
    }

    /// Sets the label color.
    #[must_use]
    pub fn with_label_color(mut self, label_color: Color) -> Self {
        self.label_color = label_color;
        self
    }
}
