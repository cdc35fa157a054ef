// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track an active pointer drag and yield move deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragState::begin`] on pointer-down with the pointer position.
//! 2) On each move, call [`DragState::move_to`] to get the delta since the
//!    previous position. Inactive drags and non-finite positions yield `None`.
//! 3) Call [`DragState::finish`] on pointer-up *and* pointer-leave so a drag
//!    that exits the surface never stays stuck active.

use kurbo::{Point, Vec2};

/// Tracks whether a drag is in progress and the last pointer position.
///
/// Deltas are computed incrementally from the previous position only; the
/// position where the drag began is deliberately not kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    active: bool,
    last: Point,
}

impl DragState {
    /// Begins a drag at the given pointer position.
    ///
    /// A non-finite position is ignored and the state stays inactive.
    pub fn begin(&mut self, pos: Point) {
        if pos.x.is_finite() && pos.y.is_finite() {
            self.active = true;
            self.last = pos;
        }
    }

    /// Records a pointer move, returning the delta from the last position.
    ///
    /// Returns `None` while no drag is active. A non-finite position is
    /// discarded without disturbing the recorded one, so a single corrupt
    /// event cannot poison subsequent deltas.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    /// Ends the drag. Safe to call when no drag is active.
    pub fn finish(&mut self) {
        self.active = false;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
