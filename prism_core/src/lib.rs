// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw commands and the host drawing surface for Prism.
//!
//! Chart code does not talk to a GPU, a canvas, or a widget toolkit. It issues an
//! ordered stream of [`DrawCommand`]s into a [`Surface`] that the host owns for the
//! duration of one render pass:
//! - **Paths** are filled with a [`peniko::Brush`]; [`linear_brush`] builds the two-stop
//!   gradients the chart faces use.
//! - **Text** is unshaped; a [`TextRun`] carries its string, style, anchor, and an
//!   optional [`Rotation`] about a pivot.
//!
//! [`CommandList`] records commands for later playback (SVG dumps, tests), and
//! [`Translated`] offsets everything drawn through it, which is how hosts place a
//! widget's local coordinates inside a larger scene.

#![no_std]

extern crate alloc;

mod command;
mod paint;
mod surface;

pub use command::{DrawCommand, FillPath, Rotation, TextAnchor, TextRun};
pub use paint::{linear_brush, translate_brush};
pub use surface::{CommandList, Surface, Translated};
