// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw command payloads.

extern crate alloc;

use alloc::string::String;

use kurbo::{Affine, BezPath, Point, Vec2};
use peniko::{Brush, Color};
use prism_text::TextStyle;

use crate::paint::translate_brush;

/// A closed path filled with a brush.
#[derive(Clone, Debug, PartialEq)]
pub struct FillPath {
    /// Path geometry in surface coordinates.
    pub path: BezPath,
    /// Fill brush; gradient positions are in surface coordinates.
    pub brush: Brush,
}

impl FillPath {
    /// Creates a fill command.
    pub fn new(path: BezPath, brush: impl Into<Brush>) -> Self {
        Self {
            path,
            brush: brush.into(),
        }
    }

    /// Builds a closed polygon through `points`.
    ///
    /// Fewer than two points produce an empty path.
    pub fn polygon(points: &[Point], brush: impl Into<Brush>) -> Self {
        let mut path = BezPath::new();
        if let [first, rest @ ..] = points
            && !rest.is_empty()
        {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
        }
        Self::new(path, brush)
    }

    /// Returns the command moved by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.path.apply_affine(Affine::translate(offset));
        self.brush = translate_brush(self.brush, offset);
        self
    }
}

/// Horizontal text anchor relative to [`TextRun::pos`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// `pos` is the start of the line.
    #[default]
    Start,
    /// `pos` is the horizontal center of the line.
    Middle,
}

/// A rotation of a text run about a pivot point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Angle in degrees; negative values rotate counter-clockwise on a y-down surface.
    pub degrees: f64,
    /// The point the run is rotated about.
    pub pivot: Point,
}

impl Rotation {
    /// Creates a rotation of `degrees` about `pivot`.
    pub fn new(degrees: f64, pivot: Point) -> Self {
        Self { degrees, pivot }
    }

    /// Returns the rotation as an affine transform.
    pub fn affine(&self) -> Affine {
        Affine::rotate_about(self.degrees.to_radians(), self.pivot)
    }
}

/// A single line of unshaped text.
///
/// `pos` is the baseline origin; the run is drawn at `pos` and then, if `rotation` is
/// set, rotated about the rotation pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// Text content. Empty text draws nothing.
    pub text: String,
    /// Baseline origin in surface coordinates.
    pub pos: Point,
    /// Font styling.
    pub style: TextStyle,
    /// Text color.
    pub color: Color,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Optional rotation about a pivot.
    pub rotation: Option<Rotation>,
}

impl TextRun {
    /// Creates a start-anchored, unrotated run.
    pub fn new(text: impl Into<String>, pos: Point, style: TextStyle, color: Color) -> Self {
        Self {
            text: text.into(),
            pos,
            style,
            color,
            anchor: TextAnchor::Start,
            rotation: None,
        }
    }

    /// Sets the text anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Rotates the run by `degrees` about `pivot`.
    #[must_use]
    pub fn rotated(mut self, degrees: f64, pivot: Point) -> Self {
        self.rotation = Some(Rotation::new(degrees, pivot));
        self
    }

    /// Returns the run moved by `offset`, pivot included.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.pos += offset;
        if let Some(rotation) = &mut self.rotation {
            rotation.pivot += offset;
        }
        self
    }
}

/// One entry in a recorded draw stream.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a closed path.
    Fill(FillPath),
    /// Draw a line of text.
    Text(TextRun),
}

impl DrawCommand {
    /// Returns the text payload, if this is a text command.
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Self::Text(run) => Some(run),
            Self::Fill(_) => None,
        }
    }

    /// Returns the fill payload, if this is a fill command.
    pub fn as_fill(&self) -> Option<&FillPath> {
        match self {
            Self::Fill(fill) => Some(fill),
            Self::Text(_) => None,
        }
    }
}
