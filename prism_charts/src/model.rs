// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset and bar geometry.
//!
//! Layout is a pure function of the dataset, the style, and the available size.
//! Nothing here is cached: callers recompute on every pass.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

#[cfg(not(feature = "std"))]
#[allow(
    unused_imports,
    reason = "`f64::round` is inherent in `core` on newer toolchains but not at the MSRV"
)]
use crate::float::FloatExt;
use crate::row_layout::{self, Size};
use crate::style::BarStyle;

/// Errors returned by chart layout.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// An entry is negative or the values do not sum to a positive, finite total.
    #[error("dataset values must be non-negative with a positive, finite total, got {total}")]
    InvalidDataset {
        /// The offending sum.
        total: f64,
    },
}

/// One labeled, colored value. Contributes one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarEntry {
    /// The value; must not be negative. Zero draws a flat bar.
    pub value: f64,
    /// Description text shown when descriptions are enabled.
    pub label: String,
    /// Bar color (the saturated end of every face gradient).
    pub color: Color,
}

impl BarEntry {
    /// Creates an entry.
    pub fn new(value: f64, label: impl Into<String>, color: Color) -> Self {
        Self {
            value,
            label: label.into(),
            color,
        }
    }
}

/// Ordered entries; order is left-to-right draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartDataset {
    entries: Vec<BarEntry>,
}

impl ChartDataset {
    /// Creates a dataset from entries in draw order.
    pub fn new(entries: impl IntoIterator<Item = BarEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The entries in draw order.
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all values; see [`compute_total`].
    pub fn total(&self) -> Result<f64, ChartError> {
        compute_total(&self.entries)
    }
}

impl FromIterator<BarEntry> for ChartDataset {
    fn from_iter<I: IntoIterator<Item = BarEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Sums entry values.
///
/// Fails with [`ChartError::InvalidDataset`] when any value is negative or NaN, or
/// when the sum is not strictly positive (this includes the empty dataset) or not
/// finite.
pub fn compute_total(entries: &[BarEntry]) -> Result<f64, ChartError> {
    let total: f64 = entries.iter().map(|e| e.value).sum();
    let non_negative = entries.iter().all(|e| e.value >= 0.0);
    if non_negative && total > 0.0 && total.is_finite() {
        Ok(total)
    } else {
        Err(ChartError::InvalidDataset { total })
    }
}

/// Formats a `0..=1` share as a whole percent, e.g. `0.2667 -> "27%"`.
///
/// Halves round away from zero.
pub fn percent_label(percentage: f64) -> String {
    // `+ 0.0` folds `-0` into `0`.
    format!("{:.0}%", (percentage * 100.0).round() + 0.0)
}

/// Derived geometry for one bar.
///
/// All points are local to the bar's slot: `x` runs right from the slot's left edge,
/// `y` runs down from the slot's top, and the bar bottom is at `y = size.height`.
/// `origin` is where the slot sits in the chart row.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    /// Position of the entry in the dataset.
    pub index: usize,
    /// `value / total`.
    pub percentage: f64,
    /// `percentage * entry_count`; deliberately not clamped to `0..=1`.
    pub height_fraction: f64,
    /// Slot width and bar pixel height.
    pub size: Size,
    /// Top-left corner of the slot in chart-row coordinates.
    pub origin: Point,
    /// Front face, counter-clockwise from the bottom-left corner.
    pub front: [Point; 4],
    /// Right extrusion face.
    pub side: [Point; 4],
    /// Top extrusion face.
    pub cap: [Point; 4],
    /// Horizontal extent of the extrusion.
    pub depth: f64,
    /// Percentage text, e.g. `"27%"`.
    pub label: String,
    /// Baseline origin of the percentage text.
    pub label_anchor: Point,
    /// Description text (the entry label).
    pub description: String,
    /// Point the description is rotated about.
    pub description_pivot: Point,
    /// Description rotation in degrees.
    pub description_angle: f64,
    /// Bar color.
    pub color: Color,
}

impl BarGeometry {
    /// Start and end of the face gradients: slot top-left to bottom-right.
    pub fn gradient_line(&self) -> (Point, Point) {
        (Point::ZERO, Point::new(self.size.width, self.size.height))
    }
}

/// Output of [`ChartModel::layout`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
    /// Placed bars in draw order.
    pub bars: Vec<BarGeometry>,
    /// Row width and the height of the tallest bar.
    pub size: Size,
}

/// A dataset plus the style that shapes its bars.
#[derive(Clone, Debug, Default)]
pub struct ChartModel {
    /// Entries to chart.
    pub dataset: ChartDataset,
    /// Proportions and paints.
    pub style: BarStyle,
}

impl ChartModel {
    /// Creates a model with the default style.
    pub fn new(dataset: ChartDataset) -> Self {
        Self {
            dataset,
            style: BarStyle::default(),
        }
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sum of all values; see [`compute_total`].
    pub fn compute_total(&self) -> Result<f64, ChartError> {
        self.dataset.total()
    }

    /// Computes one bar in its own slot of `width` by `height * percentage * entry_count`.
    ///
    /// `height` is the per-bar height budget. The bar pixel height is intentionally
    /// not normalized: skewed datasets produce bars taller than `height`.
    pub fn layout_bar(
        &self,
        entry: &BarEntry,
        index: usize,
        entry_count: usize,
        total: f64,
        width: f64,
        height: f64,
    ) -> BarGeometry {
        let style = &self.style;
        let percentage = entry.value / total;
        let height_fraction = percentage * entry_count as f64;
        let h = height * height_fraction;

        let front_w = width * style.front_width_ratio;
        let front_h = h * style.front_height_ratio;
        let cap_h = h - front_h;
        let depth = (width - front_w) * h * style.depth_factor;

        let front = [
            Point::new(0.0, h),
            Point::new(front_w, h),
            Point::new(front_w, h - front_h),
            Point::new(0.0, h - front_h),
        ];
        let side = [
            Point::new(front_w, h - front_h),
            Point::new(front_w + depth, 0.0),
            Point::new(front_w + depth, front_h),
            Point::new(front_w, h),
        ];
        let cap = [
            Point::new(0.0, cap_h),
            Point::new(front_w, cap_h),
            Point::new(front_w + depth, 0.0),
            Point::new(depth, 0.0),
        ];

        BarGeometry {
            index,
            percentage,
            height_fraction,
            size: Size::new(width, h),
            origin: Point::ZERO,
            front,
            side,
            cap,
            depth,
            label: percent_label(percentage),
            label_anchor: Point::new(front_w * style.label_inset_ratio, h + style.label_offset),
            description: entry.label.clone(),
            description_pivot: Point::new(depth - style.description_offset, 0.0),
            description_angle: style.description_angle,
            color: entry.color,
        }
    }

    /// Lays out every bar across a row of `row_width`, each with height budget `height`.
    ///
    /// An empty dataset lays out to nothing. A non-empty dataset whose total is not
    /// positive is rejected before any geometry is computed.
    pub fn layout(&self, row_width: f64, height: f64) -> Result<ChartLayout, ChartError> {
        let entries = self.dataset.entries();
        if entries.is_empty() {
            return Ok(ChartLayout {
                bars: Vec::new(),
                size: Size::new(row_width, 0.0),
            });
        }
        let total = compute_total(entries)?;
        let count = entries.len();
        let width = self.style.bar_width;

        let mut bars: Vec<BarGeometry> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.layout_bar(entry, i, count, total, width, height))
            .collect();

        let row_height = bars.iter().map(|b| b.size.height).fold(0.0, f64::max);
        let xs = row_layout::space_between(row_width, width, count);
        for (bar, x) in bars.iter_mut().zip(xs) {
            bar.origin = Point::new(x, row_layout::bottom_aligned(row_height, bar.size.height));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(bars = count, total, row_height, "laid out bar chart");

        Ok(ChartLayout {
            bars,
            size: Size::new(row_width, row_height),
        })
    }
}
