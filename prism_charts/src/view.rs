// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry to draw commands.

use kurbo::Point;
use prism_core::{FillPath, Surface, TextRun, Translated, linear_brush};

use crate::model::{BarGeometry, ChartError, ChartLayout, ChartModel};
use crate::style::BarStyle;

/// Draws laid-out bars onto a [`Surface`].
///
/// The view owns no data. Every call redraws everything it is given; the host passes
/// the current toggle state each time.
#[derive(Clone, Debug, Default)]
pub struct ChartView {
    /// Paints and fonts for faces and labels.
    pub style: BarStyle,
}

impl ChartView {
    /// Creates a view with `style`.
    pub fn new(style: BarStyle) -> Self {
        Self { style }
    }

    /// Draws `geometries` in order, each translated to its slot origin.
    ///
    /// Per bar: front face, right face, top face, percentage label, and then the
    /// rotated description when `show_description` is set.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        geometries: &[BarGeometry],
        show_description: bool,
    ) {
        for geometry in geometries {
            let mut slot = Translated::new(&mut *surface, geometry.origin.to_vec2());
            self.render_bar(&mut slot, geometry, show_description);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(bars = geometries.len(), show_description, "rendered bars");
    }

    /// Lays out `model` across `row_width` and draws it.
    ///
    /// Invalid datasets are rejected before anything is drawn.
    pub fn render_model(
        &self,
        surface: &mut dyn Surface,
        model: &ChartModel,
        row_width: f64,
        show_description: bool,
    ) -> Result<ChartLayout, ChartError> {
        let layout = model.layout(row_width, model.style.max_bar_height)?;
        self.render(surface, &layout.bars, show_description);
        Ok(layout)
    }

    fn render_bar(&self, surface: &mut dyn Surface, bar: &BarGeometry, show_description: bool) {
        let style = &self.style;
        let (start, end) = bar.gradient_line();
        let neutral_to_color = linear_brush(start, end, style.neutral, bar.color);
        let color_to_neutral = linear_brush(start, end, bar.color, style.neutral);

        surface.fill(FillPath::polygon(&bar.front, neutral_to_color.clone()));
        surface.fill(FillPath::polygon(&bar.side, color_to_neutral));
        surface.fill(FillPath::polygon(&bar.cap, neutral_to_color));

        surface.text(TextRun::new(
            bar.label.as_str(),
            bar.label_anchor,
            style.label_style.clone(),
            style.label_color,
        ));

        if show_description {
            surface.text(
                TextRun::new(
                    bar.description.as_str(),
                    Point::ZERO,
                    style.description_style.clone(),
                    style.label_color,
                )
                .rotated(bar.description_angle, bar.description_pivot),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use kurbo::Shape;
    use peniko::color::Srgb;
    use peniko::color::palette::css;
    use peniko::{Brush, Color};
    use prism_core::{CommandList, DrawCommand};

    use super::*;
    use crate::model::{BarEntry, ChartDataset};

    fn model() -> ChartModel {
        ChartModel::new(ChartDataset::new([
            BarEntry::new(28.0, "Kotlin", css::ORANGE),
            BarEntry::new(15.0, "Swift", css::DODGER_BLUE),
            BarEntry::new(7.0, "Cobol", css::PURPLE),
        ]))
    }

    fn record(show_description: bool) -> CommandList {
        let mut list = CommandList::new();
        ChartView::default()
            .render_model(&mut list, &model(), 300.0, show_description)
            .unwrap();
        list
    }

    #[test]
    fn each_bar_emits_three_faces_then_its_label() {
        let list = record(false);
        assert_eq!(list.len(), 3 * 4);
        for bar in list.commands().chunks(4) {
            assert!(bar[..3].iter().all(|c| c.as_fill().is_some()));
            let label = bar[3].as_text().expect("percentage label");
            assert!(label.text.ends_with('%'));
            assert!(label.rotation.is_none());
            assert!(label.style.font_weight.is_emphasized());
        }
        let labels: Vec<_> = list
            .commands()
            .iter()
            .filter_map(DrawCommand::as_text)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(labels, ["56%", "30%", "14%"]);
    }

    #[test]
    fn showing_descriptions_adds_one_rotated_label_per_bar() {
        let off = record(false).commands().to_vec();
        let on = record(true).commands().to_vec();
        assert_eq!(on.len(), off.len() + 3);

        // The description follows each bar's percentage label; everything else is unchanged.
        let mut without: Vec<DrawCommand> = Vec::new();
        let mut descriptions = Vec::new();
        for bar in on.chunks(5) {
            without.extend_from_slice(&bar[..4]);
            descriptions.push(bar[4].as_text().expect("description").clone());
        }
        assert_eq!(without, off);

        let names: Vec<_> = descriptions.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(names, ["Kotlin", "Swift", "Cobol"]);
        for d in &descriptions {
            let rotation = d.rotation.expect("description is rotated");
            assert_eq!(rotation.degrees, -50.0);
        }
    }

    #[test]
    fn faces_use_neutral_and_bar_color_gradients() {
        let list = record(false);
        let stops: Vec<_> = list.commands()[..3]
            .iter()
            .map(|c| {
                let Brush::Gradient(g) = &c.as_fill().expect("face").brush else {
                    panic!("expected a gradient face");
                };
                g.stops
                    .iter()
                    .map(|s| s.color.to_alpha_color::<Srgb>().to_rgba8())
                    .collect::<Vec<_>>()
            })
            .collect();
        let pair = |from: Color, to: Color| [from.to_rgba8(), to.to_rgba8()];
        assert_eq!(stops[0], pair(css::GRAY, css::ORANGE));
        assert_eq!(stops[1], pair(css::ORANGE, css::GRAY));
        assert_eq!(stops[2], pair(css::GRAY, css::ORANGE));
    }

    #[test]
    fn bars_are_drawn_in_their_slots() {
        let layout = model().layout(300.0, 120.0).unwrap();
        let mut list = CommandList::new();
        ChartView::default().render(&mut list, &layout.bars, false);

        for (bar, cmds) in layout.bars.iter().zip(list.commands().chunks(4)) {
            let front = cmds[0].as_fill().expect("front face");
            let bounds = front.path.bounding_box();
            assert!((bounds.x0 - bar.origin.x).abs() < 1e-9);
            assert!((bounds.y1 - layout.size.height).abs() < 1e-9);

            let label = cmds[3].as_text().expect("label");
            assert_eq!(label.pos, bar.origin + bar.label_anchor.to_vec2());
        }
    }

    #[test]
    fn descriptions_rotate_about_the_translated_pivot() {
        let layout = model().layout(300.0, 120.0).unwrap();
        let mut list = CommandList::new();
        ChartView::default().render(&mut list, &layout.bars[1..2], true);
        let run = list.commands()[4].as_text().expect("description");
        let bar = &layout.bars[1];
        assert_eq!(run.pos, bar.origin);
        let rotation = run.rotation.expect("rotation");
        assert_eq!(rotation.pivot, bar.origin + bar.description_pivot.to_vec2());
    }

    #[test]
    fn empty_input_draws_nothing() {
        let mut list = CommandList::new();
        ChartView::default().render(&mut list, &[], true);
        assert!(list.is_empty());

        let layout = ChartView::default()
            .render_model(&mut list, &ChartModel::default(), 300.0, true)
            .unwrap();
        assert!(layout.bars.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn invalid_dataset_draws_nothing() {
        let zeros = ChartModel::new(ChartDataset::new([BarEntry::new(0.0, "a", css::RED)]));
        let mut list = CommandList::new();
        let err = ChartView::default().render_model(&mut list, &zeros, 300.0, false);
        assert_eq!(err, Err(ChartError::InvalidDataset { total: 0.0 }));
        assert!(list.is_empty());
    }

    #[test]
    fn empty_label_is_still_issued() {
        let blank = ChartModel::new(ChartDataset::new([BarEntry::new(1.0, "", css::RED)]));
        let mut list = CommandList::new();
        ChartView::default()
            .render_model(&mut list, &blank, 40.0, true)
            .unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list.commands()[4].as_text().map(|t| t.text.is_empty()), Some(true));
    }
}
