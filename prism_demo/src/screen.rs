// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host shell: one screen holding the dataset and the description toggle.
//!
//! The screen is a vertical column inside padded content: a centered title, the
//! bar chart row, and a toggle row ("Show description" plus a switch). Status and
//! navigation bars frame the content in the chrome color.

use kurbo::{Circle, Point, Rect, RoundedRect, Shape};
use prism_charts::{BarStyle, ChartError, ChartLayout, ChartModel, ChartView};
use prism_core::{FillPath, Surface, TextAnchor, TextRun, Translated};
use prism_text::{FontWeight, TextMeasurer, TextStyle};

use crate::config::{ConfigError, DemoConfig, ScreenConfig};
use crate::theme::Theme;

const STATUS_BAR_DP: f64 = 24.0;
const NAV_BAR_DP: f64 = 48.0;
const PADDING_DP: f64 = 30.0;
const SPACING_DP: f64 = 20.0;
const TITLE_SP: f64 = 30.0;
const TOGGLE_LABEL_SP: f64 = 16.0;
const TOGGLE_ROW_DP: f64 = 48.0;
const TRACK_WIDTH_DP: f64 = 34.0;
const TRACK_HEIGHT_DP: f64 = 14.0;
const THUMB_DP: f64 = 20.0;
const SWITCH_GAP_DP: f64 = 8.0;

/// Where everything landed on the last layout pass.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScreenLayout {
    pub(crate) frame: Rect,
    pub(crate) status_bar: Rect,
    pub(crate) nav_bar: Rect,
    /// Baseline origin (horizontal center) of each title line.
    pub(crate) title_lines: Vec<(String, Point)>,
    pub(crate) chart: Rect,
    pub(crate) toggle_row: Rect,
    /// The switch touch target.
    pub(crate) switch: Rect,
}

#[derive(Debug)]
pub(crate) struct Screen {
    title: String,
    model: ChartModel,
    view: ChartView,
    theme: Theme,
    metrics: ScreenConfig,
    show_description: bool,
}

impl Screen {
    pub(crate) fn from_config(config: &DemoConfig) -> Result<Self, ConfigError> {
        let theme = Theme::default();
        let style = BarStyle::default()
            .scaled(config.screen.density)
            .with_neutral(theme.neutral)
            .with_label_color(theme.text);
        Ok(Self {
            title: config.title.clone(),
            model: ChartModel::new(config.dataset()?).with_style(style.clone()),
            view: ChartView::new(style),
            theme,
            metrics: config.screen,
            show_description: config.show_description,
        })
    }

    pub(crate) fn show_description(&self) -> bool {
        self.show_description
    }

    pub(crate) fn set_show_description(&mut self, show: bool) {
        if self.show_description != show {
            tracing::info!(show_description = show, "description toggle changed");
        }
        self.show_description = show;
    }

    pub(crate) fn toggle(&mut self) {
        self.set_show_description(!self.show_description);
    }

    /// Flips the toggle if `at` hits the switch. Returns whether it did.
    pub(crate) fn tap(
        &mut self,
        at: Point,
        measurer: &dyn TextMeasurer,
    ) -> Result<bool, ChartError> {
        let hit = self.layout(measurer)?.switch.contains(at);
        if hit {
            self.toggle();
        }
        Ok(hit)
    }

    /// Full frame: status bar, content, navigation bar.
    pub(crate) fn frame(&self) -> Rect {
        let m = &self.metrics;
        Rect::new(
            0.0,
            0.0,
            m.width,
            m.dp(STATUS_BAR_DP) + m.height + m.dp(NAV_BAR_DP),
        )
    }

    pub(crate) fn layout(&self, measurer: &dyn TextMeasurer) -> Result<ScreenLayout, ChartError> {
        Ok(self.arrange(measurer, &self.chart_layout()?))
    }

    /// Draws the whole screen for the current toggle state.
    pub(crate) fn render(
        &self,
        surface: &mut dyn Surface,
        measurer: &dyn TextMeasurer,
    ) -> Result<ScreenLayout, ChartError> {
        let chart = self.chart_layout()?;
        let layout = self.arrange(measurer, &chart);
        let theme = &self.theme;

        surface.fill(FillPath::new(layout.frame.to_path(0.1), theme.background));
        surface.fill(FillPath::new(layout.status_bar.to_path(0.1), theme.chrome));
        surface.fill(FillPath::new(layout.nav_bar.to_path(0.1), theme.chrome));

        let title_style = self.title_style();
        for (line, pos) in &layout.title_lines {
            surface.text(
                TextRun::new(line.as_str(), *pos, title_style.clone(), theme.text)
                    .with_anchor(TextAnchor::Middle),
            );
        }

        {
            let mut slot = Translated::new(&mut *surface, layout.chart.origin().to_vec2());
            self.view
                .render(&mut slot, &chart.bars, self.show_description);
        }

        self.render_toggle(surface, measurer, &layout);

        tracing::debug!(
            show_description = self.show_description,
            bars = chart.bars.len(),
            "rendered screen"
        );
        Ok(layout)
    }

    fn chart_layout(&self) -> Result<ChartLayout, ChartError> {
        let content_width = self.metrics.width - 2.0 * self.metrics.dp(PADDING_DP);
        self.model
            .layout(content_width, self.model.style.max_bar_height)
    }

    fn title_style(&self) -> TextStyle {
        TextStyle::bold(self.metrics.dp(TITLE_SP))
    }

    fn toggle_label_style(&self) -> TextStyle {
        TextStyle::new(self.metrics.dp(TOGGLE_LABEL_SP)).with_weight(FontWeight::SEMI_BOLD)
    }

    fn arrange(&self, measurer: &dyn TextMeasurer, chart: &ChartLayout) -> ScreenLayout {
        let m = &self.metrics;
        let frame = self.frame();
        let status_bar = Rect::new(0.0, 0.0, m.width, m.dp(STATUS_BAR_DP));
        let content = Rect::new(0.0, status_bar.y1, m.width, status_bar.y1 + m.height);
        let nav_bar = Rect::new(0.0, content.y1, m.width, frame.y1);

        let pad = m.dp(PADDING_DP);
        let spacing = m.dp(SPACING_DP);
        let inner = content.inset(-pad);

        let title_style = self.title_style();
        let metrics = measurer.measure("", &title_style);
        let mut y = inner.y0;
        let title_lines = wrap_words(&self.title, inner.width(), measurer, &title_style)
            .into_iter()
            .map(|line| {
                let pos = Point::new(inner.center().x, y + metrics.ascent);
                y += metrics.line_height();
                (line, pos)
            })
            .collect();

        let chart_top = y + spacing;
        let chart_rect = Rect::new(
            inner.x0,
            chart_top,
            inner.x0 + chart.size.width,
            chart_top + chart.size.height,
        );

        let row_top = chart_rect.y1 + spacing;
        let toggle_row = Rect::new(inner.x0, row_top, inner.x1, row_top + m.dp(TOGGLE_ROW_DP));
        let label_width = measurer
            .measure("Show description", &self.toggle_label_style())
            .advance_width;
        let switch_x = inner.x0 + label_width + m.dp(SWITCH_GAP_DP);
        let switch = Rect::new(
            switch_x,
            toggle_row.y0,
            switch_x + m.dp(TOGGLE_ROW_DP),
            toggle_row.y1,
        );

        ScreenLayout {
            frame,
            status_bar,
            nav_bar,
            title_lines,
            chart: chart_rect,
            toggle_row,
            switch,
        }
    }

    fn render_toggle(
        &self,
        surface: &mut dyn Surface,
        measurer: &dyn TextMeasurer,
        layout: &ScreenLayout,
    ) {
        let m = &self.metrics;
        let theme = &self.theme;
        let row = layout.toggle_row;
        let label_style = self.toggle_label_style();
        let label_metrics = measurer.measure("Show description", &label_style);
        let baseline = row.center().y + (label_metrics.ascent - label_metrics.descent) / 2.0;
        surface.text(TextRun::new(
            "Show description",
            Point::new(row.x0, baseline),
            label_style,
            theme.text,
        ));

        let center = layout.switch.center();
        let track = Rect::from_center_size(
            center,
            (m.dp(TRACK_WIDTH_DP), m.dp(TRACK_HEIGHT_DP)),
        );
        let thumb_color = if self.show_description {
            theme.checked_thumb
        } else {
            theme.unchecked_thumb
        };
        let track_alpha = if self.show_description { 0.54 } else { 0.38 };
        surface.fill(FillPath::new(
            RoundedRect::from_rect(track, track.height() / 2.0).to_path(0.1),
            thumb_color.with_alpha(track_alpha),
        ));

        let thumb_x = if self.show_description {
            track.x1 - track.height() / 2.0
        } else {
            track.x0 + track.height() / 2.0
        };
        let thumb = Circle::new(Point::new(thumb_x, center.y), m.dp(THUMB_DP) / 2.0);
        surface.fill(FillPath::new(thumb.to_path(0.1), thumb_color));
    }
}

/// Greedy word wrap. A single word wider than `max_width` gets its own line.
fn wrap_words(
    text: &str,
    max_width: f64,
    measurer: &dyn TextMeasurer,
    style: &TextStyle,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measurer.measure(&candidate, style).advance_width <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
