// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal placement of bar slots.
//!
//! Bars sit in a single row: slots are spread with space-between spacing and
//! aligned to a shared bottom edge (the tallest bar sets the row height).

extern crate alloc;

use alloc::vec::Vec;

/// A width/height pair in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in surface units.
    pub width: f64,
    /// Height in surface units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Returns the x offset of each of `count` slots of `slot_width` spread across
/// `container_width`.
///
/// The first slot starts at `0`, the last ends at `container_width`, and gaps are
/// equal. A lone slot sits at `0`. When the slots do not fit, the gap collapses to
/// `0` and the row overflows to the right.
pub fn space_between(container_width: f64, slot_width: f64, count: usize) -> Vec<f64> {
    let gap = if count > 1 {
        let free = container_width - slot_width * count as f64;
        (free / (count - 1) as f64).max(0.0)
    } else {
        0.0
    };
    (0..count)
        .map(|i| i as f64 * (slot_width + gap))
        .collect()
}

/// Returns the y offset that puts a slot of `slot_height` on the bottom edge of a
/// row of `row_height`.
pub fn bottom_aligned(row_height: f64, slot_height: f64) -> f64 {
    row_height - slot_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_slots_touch_the_edges() {
        let xs = space_between(400.0, 40.0, 5);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 0.0);
        assert!((xs[4] + 40.0 - 400.0).abs() < 1e-9);
        // (400 - 200) / 4 = 50 gap
        assert!((xs[1] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn single_slot_starts_at_zero() {
        assert_eq!(space_between(400.0, 40.0, 1), [0.0]);
        assert!(space_between(400.0, 40.0, 0).is_empty());
    }

    #[test]
    fn overflow_collapses_the_gap() {
        let xs = space_between(100.0, 40.0, 4);
        assert_eq!(xs, [0.0, 40.0, 80.0, 120.0]);
    }

    #[test]
    fn bottom_alignment() {
        assert_eq!(bottom_aligned(300.0, 120.0), 180.0);
        assert_eq!(bottom_aligned(120.0, 120.0), 0.0);
    }
}
