// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface seam and the stock surfaces.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::command::{DrawCommand, FillPath, TextRun};

/// A 2D drawing surface owned by the host.
///
/// A surface is borrowed for one render pass. Commands arrive in paint order.
pub trait Surface {
    /// Fill a closed path.
    fn fill(&mut self, fill: FillPath);

    /// Draw a line of text.
    fn text(&mut self, run: TextRun);

    /// Dispatches a recorded command.
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Fill(fill) => self.fill(fill),
            DrawCommand::Text(run) => self.text(run),
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill(&mut self, fill: FillPath) {
        (**self).fill(fill);
    }

    fn text(&mut self, run: TextRun) {
        (**self).text(run);
    }
}

/// A surface that records commands in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays the recorded commands into another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        for command in &self.commands {
            target.draw(command.clone());
        }
    }
}

impl Surface for CommandList {
    fn fill(&mut self, fill: FillPath) {
        self.commands.push(DrawCommand::Fill(fill));
    }

    fn text(&mut self, run: TextRun) {
        self.commands.push(DrawCommand::Text(run));
    }
}

/// Offsets everything drawn through it before forwarding to `inner`.
#[derive(Debug)]
pub struct Translated<'a, S: ?Sized> {
    inner: &'a mut S,
    offset: Vec2,
}

impl<'a, S: Surface + ?Sized> Translated<'a, S> {
    /// Wraps `inner`, moving all commands by `offset`.
    pub fn new(inner: &'a mut S, offset: Vec2) -> Self {
        Self { inner, offset }
    }
}

impl<S: Surface + ?Sized> Surface for Translated<'_, S> {
    fn fill(&mut self, fill: FillPath) {
        self.inner.fill(fill.translated(self.offset));
    }

    fn text(&mut self, run: TextRun) {
        self.inner.text(run.translated(self.offset));
    }
}
