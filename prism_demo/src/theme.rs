// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen palette.

use peniko::Color;

pub(crate) const ORANGE: Color = Color::from_rgba8(0xFF, 0x98, 0x00, 0xFF);
pub(crate) const BRIGHT_BLUE: Color = Color::from_rgba8(0x00, 0x91, 0xFF, 0xFF);
pub(crate) const GREEN: Color = Color::from_rgba8(0x4C, 0xAF, 0x50, 0xFF);
pub(crate) const PURPLE: Color = Color::from_rgba8(0x9C, 0x27, 0xB0, 0xFF);
pub(crate) const BLUE_GRAY: Color = Color::from_rgba8(0x60, 0x7D, 0x8B, 0xFF);
pub(crate) const RED_ORANGE: Color = Color::from_rgba8(0xFF, 0x57, 0x22, 0xFF);
pub(crate) const DARK_GRAY: Color = Color::from_rgba8(0x42, 0x42, 0x42, 0xFF);
pub(crate) const GRAY: Color = Color::from_rgba8(0x9E, 0x9E, 0x9E, 0xFF);
pub(crate) const WHITE: Color = Color::from_rgba8(0xFF, 0xFF, 0xFF, 0xFF);

/// Colors used by the host chrome and passed down to the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    /// Window background behind everything.
    pub(crate) background: Color,
    /// Status and navigation bar color.
    pub(crate) chrome: Color,
    /// Title and label text.
    pub(crate) text: Color,
    /// Neutral end of bar gradients.
    pub(crate) neutral: Color,
    /// Switch thumb when on.
    pub(crate) checked_thumb: Color,
    /// Switch thumb when off.
    pub(crate) unchecked_thumb: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::BLACK.with_alpha(0.7),
            chrome: ORANGE,
            text: WHITE,
            neutral: GRAY,
            checked_thumb: ORANGE,
            unchecked_thumb: WHITE,
        }
    }
}

/// Looks up a palette color by its config name, e.g. `"bright-blue"`.
pub(crate) fn named(name: &str) -> Option<Color> {
    Some(match name {
        "orange" => ORANGE,
        "bright-blue" => BRIGHT_BLUE,
        "green" => GREEN,
        "purple" => PURPLE,
        "blue-gray" => BLUE_GRAY,
        "red-orange" => RED_ORANGE,
        "dark-gray" => DARK_GRAY,
        "gray" => GRAY,
        "white" => WHITE,
        _ => return None,
    })
}
