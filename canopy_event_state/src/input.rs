// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer/wheel event types and cursor affordances.
//!
//! Hosts translate their native surface events into these types before
//! handing them to a controller. The controller never sees framework event
//! objects, which keeps the interaction logic headless and testable.

use kurbo::Point;

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left mouse button (or single-finger touch).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the surface origin, in pixels.
    pub position: Point,
    /// Button associated with the event.
    pub button: PointerButton,
}

impl PointerEvent {
    /// Creates a primary-button pointer event at the given position.
    #[must_use]
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
        }
    }
}

/// A wheel/trackpad scroll event in surface coordinates.
///
/// The host's native listener is responsible for suppressing default
/// scroll/zoom handling before forwarding the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Pointer position relative to the surface origin, in pixels.
    pub position: Point,
    /// Horizontal scroll amount in pixels.
    pub delta_x: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub delta_y: f64,
}

impl WheelEvent {
    /// Creates a wheel event with only a vertical delta.
    #[must_use]
    pub fn vertical(position: Point, delta_y: f64) -> Self {
        Self {
            position,
            delta_x: 0.0,
            delta_y,
        }
    }
}

/// Cursor shown over the diagram surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Open hand: the diagram can be grabbed.
    #[default]
    Grab,
    /// Closed hand: a drag is in progress.
    Grabbing,
}
