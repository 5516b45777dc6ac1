// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pseudo-3D bar charts on top of `prism_core`.
//!
//! The crate has two halves:
//! - **Model**: [`ChartModel`] turns a [`ChartDataset`] and an available size into
//!   per-bar [`BarGeometry`] (percentages, the front face, the right and top extrusion
//!   faces, label anchors) and places the bar slots in a bottom-aligned row.
//! - **View**: [`ChartView`] turns geometry into ordered `prism_core` draw commands:
//!   gradient-filled faces and bold labels, with the description label rotated about
//!   its pivot when the host asks for it.
//!
//! Both halves are pure. State such as "show descriptions" belongs to the host and
//! is passed in on every render.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[cfg(not(feature = "std"))]
mod float;
mod model;
pub mod row_layout;
mod style;
mod view;

pub use model::{
    BarEntry, BarGeometry, ChartDataset, ChartError, ChartLayout, ChartModel, compute_total,
    percent_label,
};
pub use row_layout::Size;
pub use style::BarStyle;
pub use view::ChartView;
