// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surface for `prism_demo`.

use std::fmt::Write as _;

use kurbo::Rect;
use peniko::color::Srgb;
use peniko::{Brush, Color, Gradient, GradientKind};
use prism_core::{FillPath, Surface, TextAnchor, TextRun};

/// Serializes draw commands into an SVG document, in paint order.
#[derive(Debug)]
pub(crate) struct SvgScene {
    view_box: Rect,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgScene {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            defs: String::new(),
            body: String::new(),
            gradients: 0,
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height()
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Writes `gradient` into `<defs>` and returns its id, or `None` for gradient
    /// kinds this scene does not serialize.
    fn push_gradient(&mut self, gradient: &Gradient) -> Option<String> {
        let GradientKind::Linear(line) = gradient.kind else {
            return None;
        };
        let id = format!("g{}", self.gradients);
        self.gradients += 1;
        let _ = writeln!(
            self.defs,
            r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            line.start.x, line.start.y, line.end.x, line.end.y
        );
        for stop in gradient.stops.iter() {
            let (value, opacity) = svg_color(stop.color.to_alpha_color::<Srgb>());
            let _ = write!(
                self.defs,
                r#"<stop offset="{}" stop-color="{value}""#,
                stop.offset
            );
            if let Some(o) = opacity {
                let _ = write!(self.defs, r#" stop-opacity="{o}""#);
            }
            self.defs.push_str("/>\n");
        }
        self.defs.push_str("</linearGradient>\n");
        Some(id)
    }

    fn write_fill_attr(&mut self, brush: &Brush) {
        match brush {
            Brush::Solid(color) => {
                let (value, opacity) = svg_color(*color);
                let _ = write!(self.body, r#" fill="{value}""#);
                if let Some(o) = opacity {
                    let _ = write!(self.body, r#" fill-opacity="{o}""#);
                }
            }
            Brush::Gradient(gradient) => match self.push_gradient(gradient) {
                Some(id) => {
                    let _ = write!(self.body, r#" fill="url(#{id})""#);
                }
                None => self.body.push_str(r#" fill="none""#),
            },
            Brush::Image(_) => self.body.push_str(r#" fill="none""#),
        }
    }
}

impl Surface for SvgScene {
    fn fill(&mut self, fill: FillPath) {
        if fill.path.elements().is_empty() {
            return;
        }
        let d = fill.path.to_svg();
        let _ = write!(self.body, r#"<path d="{d}""#);
        self.write_fill_attr(&fill.brush);
        self.body.push_str("/>\n");
    }

    fn text(&mut self, run: TextRun) {
        if run.text.is_empty() {
            return;
        }
        let style = &run.style;
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" font-weight="{}""#,
            run.pos.x,
            run.pos.y,
            style.font_size,
            style.font_weight.0
        );
        if let Some(rotation) = run.rotation {
            let _ = write!(
                self.body,
                r#" transform="rotate({} {} {})""#,
                rotation.degrees, rotation.pivot.x, rotation.pivot.y
            );
        }
        self.body.push_str(match run.anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
        });
        self.write_fill_attr(&Brush::Solid(run.color));
        self.body.push('>');
        self.body.push_str(&escape_xml(&run.text));
        self.body.push_str("</text>\n");
    }
}

fn svg_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::RadialGradientPosition;
    use prism_core::linear_brush;
    use prism_text::TextStyle;

    use super::*;
    use crate::theme;

    fn scene() -> SvgScene {
        SvgScene::new(Rect::new(0.0, 0.0, 100.0, 50.0))
    }

    #[test]
    fn gradient_fills_reference_defs() {
        let mut svg = scene();
        svg.fill(FillPath::polygon(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            linear_brush(Point::ZERO, Point::new(10.0, 10.0), theme::GRAY, theme::ORANGE),
        ));
        let out = svg.to_svg_string();
        assert!(out.contains(r#"<linearGradient id="g0" gradientUnits="userSpaceOnUse""#));
        assert!(out.contains(r##"stop-color="#9e9e9e""##));
        assert!(out.contains(r##"stop-color="#ff9800""##));
        assert!(out.contains(r#"fill="url(#g0)""#));
        assert!(out.contains(r#"<stop offset="1""#));
        assert!(out.contains(r#"viewBox="0 0 100 50""#));
    }

    #[test]
    fn rotated_bold_text_is_escaped() {
        let mut svg = scene();
        svg.text(
            TextRun::new("C++ & <C>", Point::ZERO, TextStyle::bold(14.0), theme::WHITE)
                .rotated(-50.0, Point::new(-19.0, 0.0)),
        );
        let out = svg.to_svg_string();
        assert!(out.contains(r#"font-weight="700""#));
        assert!(out.contains(r#"transform="rotate(-50 -19 0)""#));
        assert!(out.contains("C++ &amp; &lt;C&gt;"));
        assert!(!out.contains("<defs>"));
    }

    #[test]
    fn empty_text_and_paths_draw_nothing() {
        let mut svg = scene();
        svg.text(TextRun::new("", Point::ZERO, TextStyle::default(), theme::WHITE));
        svg.fill(FillPath::polygon(&[], theme::WHITE));
        let out = svg.to_svg_string();
        assert!(!out.contains("<text"));
        assert!(!out.contains("<path"));
    }

    #[test]
    fn translucent_solid_fill_sets_opacity() {
        let mut svg = scene();
        svg.fill(FillPath::polygon(
            &[Point::ZERO, Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            Color::from_rgba8(0, 0, 0, 51),
        ));
        let out = svg.to_svg_string();
        assert!(out.contains(r##"fill="#000000" fill-opacity="0.2""##));
    }

    #[test]
    fn unsupported_gradients_fill_nothing() {
        let mut svg = scene();
        let radial = Gradient {
            kind: RadialGradientPosition::new(Point::ZERO, 5.0).into(),
            ..Gradient::default()
        }
        .with_stops([theme::GRAY, theme::ORANGE]);
        svg.fill(FillPath::polygon(
            &[Point::ZERO, Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            radial,
        ));
        let out = svg.to_svg_string();
        assert!(out.contains(r#"fill="none""#));
        assert!(!out.contains("<defs>"));
    }
}
