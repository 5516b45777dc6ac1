// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush helpers.
//!
//! Fills are plain [`peniko::Brush`] values. Gradient positions live in surface
//! coordinates, so moving a fill means moving its gradient too.

use kurbo::{Point, Vec2};
use peniko::{Brush, Color, Gradient, GradientKind};

/// A two-stop linear gradient brush running from `from` at `start` to `to` at `end`.
pub fn linear_brush(start: Point, end: Point, from: Color, to: Color) -> Brush {
    Gradient::new_linear(start, end).with_stops([from, to]).into()
}

/// Moves the position-dependent part of `brush` by `offset`.
///
/// Solid and image brushes are returned unchanged.
#[must_use]
pub fn translate_brush(brush: Brush, offset: Vec2) -> Brush {
    match brush {
        Brush::Gradient(mut gradient) => {
            match &mut gradient.kind {
                GradientKind::Linear(pos) => {
                    pos.start += offset;
                    pos.end += offset;
                }
                GradientKind::Radial(pos) => {
                    pos.start_center += offset;
                    pos.end_center += offset;
                }
                GradientKind::Sweep(pos) => pos.center += offset,
            }
            Brush::Gradient(gradient)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use peniko::Gradient;
    use peniko::color::Srgb;
    use peniko::color::palette::css;

    use super::*;

    fn stops(gradient: &Gradient) -> [Color; 2] {
        [
            gradient.stops[0].color.to_alpha_color::<Srgb>(),
            gradient.stops[1].color.to_alpha_color::<Srgb>(),
        ]
    }

    #[test]
    fn linear_brush_has_two_stops_along_the_line() {
        let brush = linear_brush(Point::ZERO, Point::new(40.0, 100.0), css::GRAY, css::ORANGE);
        let Brush::Gradient(g) = &brush else {
            panic!("expected a gradient brush");
        };
        let GradientKind::Linear(pos) = g.kind else {
            panic!("expected a linear gradient");
        };
        assert_eq!((pos.start, pos.end), (Point::ZERO, Point::new(40.0, 100.0)));
        assert_eq!(g.stops[0].offset, 0.0);
        assert_eq!(g.stops[1].offset, 1.0);
        let [from, to] = stops(g);
        assert_eq!(from.to_rgba8(), css::GRAY.to_rgba8());
        assert_eq!(to.to_rgba8(), css::ORANGE.to_rgba8());
    }

    #[test]
    fn translation_moves_the_gradient_line_only() {
        let brush = linear_brush(Point::ZERO, Point::new(40.0, 100.0), css::GRAY, css::ORANGE);
        let moved = translate_brush(brush.clone(), Vec2::new(10.0, 5.0));
        let (Brush::Gradient(before), Brush::Gradient(after)) = (&brush, &moved) else {
            panic!("expected gradient brushes");
        };
        let GradientKind::Linear(pos) = after.kind else {
            panic!("expected a linear gradient");
        };
        assert_eq!(pos.start, Point::new(10.0, 5.0));
        assert_eq!(pos.end, Point::new(50.0, 105.0));
        assert_eq!(before.stops, after.stops);
    }

    #[test]
    fn solid_brushes_ignore_translation() {
        let solid = Brush::from(css::WHITE);
        assert_eq!(translate_brush(solid.clone(), Vec2::new(3.0, 4.0)), solid);
    }
}
