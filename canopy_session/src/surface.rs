// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use canopy_event_state::input::CursorIcon;
use kurbo::Rect;

use crate::schedule::Disposer;

/// The fixed-bounds drawing region hosting the diagram and receiving input.
///
/// The surface exists for the whole session and is owned by the hosting UI;
/// the session only references it. Implementations translate these calls
/// into whatever their framework needs (a DOM element, a native view, a
/// test double).
pub trait Surface {
    /// Pixel bounds of the region in surface-local coordinates.
    fn bounds(&self) -> Rect;

    /// Updates the cursor affordance shown over the region.
    fn set_cursor(&mut self, cursor: CursorIcon);

    /// Removes any previously painted diagram content.
    fn clear(&mut self);

    /// Starts delivering pointer/wheel events for this region to the
    /// session.
    ///
    /// The host attaches its native listeners here (suppressing default
    /// scroll/zoom handling on wheel) and forwards events into the
    /// session's `on_*` entry points. The returned [`Disposer`] detaches
    /// those listeners; the session invokes it exactly once per teardown.
    fn bind_input(&mut self) -> Disposer;
}

/// In-memory [`Surface`] for tests, demos, and headless hosts.
///
/// Tracks the cursor, how often the content was cleared, and how many input
/// bindings are currently live.
#[derive(Debug)]
pub struct HeadlessSurface {
    bounds: Rect,
    cursor: CursorIcon,
    cleared: usize,
    live_bindings: Rc<Cell<usize>>,
}

impl HeadlessSurface {
    /// Creates a surface with the given pixel bounds.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            cursor: CursorIcon::default(),
            cleared: 0,
            live_bindings: Rc::new(Cell::new(0)),
        }
    }

    /// Cursor most recently set on the surface.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// How many times the content has been cleared.
    #[must_use]
    pub fn cleared(&self) -> usize {
        self.cleared
    }

    /// Number of input bindings that have not been disposed.
    #[must_use]
    pub fn live_bindings(&self) -> usize {
        self.live_bindings.get()
    }
}

impl Surface for HeadlessSurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }

    fn bind_input(&mut self) -> Disposer {
        let live = self.live_bindings.clone();
        live.set(live.get() + 1);
        Disposer::new(move || live.set(live.get() - 1))
    }
}
