// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_event_state::drag::DragState;
use canopy_event_state::input::{CursorIcon, PointerEvent, WheelEvent};
use canopy_render::RenderHandle;
use canopy_viewport::{
    ViewTransform, ViewportState, ZoomDirection, ZoomSpec, anchor_preserving_offset,
    pointer_fraction,
};
use kurbo::{Rect, Vec2};

/// What a wheel event did, so the session can schedule follow-up work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Nothing happened: no live handle, a refit is pending, or the delta
    /// was degenerate.
    Ignored,
    /// A new scale was pushed to the renderer.
    Rescaled,
    /// A new scale was pushed and it reached the low-scale threshold; an
    /// auto-fit should run at the next paint opportunity.
    NeedsRefit,
}

/// Translates pointer/wheel input into renderer transforms.
///
/// Owns the viewport's scale/offset and the transient drag state; the
/// renderer only ever sees the results through `rescale`/`set_position`.
/// While a low-scale auto-fit is pending, manual rescales are not accepted,
/// so a zoom-out run can never leave the diagram smaller than a usable
/// fitted view.
#[derive(Debug)]
pub struct ViewportController {
    view: ViewportState,
    drag: DragState,
    refit_pending: bool,
}

impl ViewportController {
    /// Creates a controller at scale 1 with no offset.
    #[must_use]
    pub fn new(spec: ZoomSpec) -> Self {
        Self {
            view: ViewportState::new(spec),
            drag: DragState::default(),
            refit_pending: false,
        }
    }

    /// Snapshot of the controller's recorded scale and offset.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.view.transform()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Whether a low-scale auto-fit is still outstanding.
    #[must_use]
    pub fn refit_pending(&self) -> bool {
        self.refit_pending
    }

    /// Returns to scale 1, zero offset, no drag, no pending refit.
    pub fn reset(&mut self) {
        self.view.reset();
        self.drag.finish();
        self.refit_pending = false;
    }

    /// Adopts a renderer-reported transform, e.g. after an auto-fit.
    pub fn sync_from(&mut self, reported: ViewTransform) {
        self.view.sync_scale(reported.scale);
        self.view.set_offset(reported.offset());
    }

    /// Completes a pending low-scale refit with the renderer's post-fit
    /// state, unlocking manual rescales again.
    pub fn complete_refit(&mut self, post_fit: ViewTransform) {
        self.sync_from(post_fit);
        self.refit_pending = false;
    }

    /// Handles a wheel event over the surface.
    ///
    /// Derives the zoom direction from the vertical delta sign, applies one
    /// multiplicative step clamped into the configured range, and pushes
    /// the result to the renderer. The zoom anchors on the pointer: the
    /// content under the cursor stays put, with the offset corrected after
    /// the rescale. On a degenerate surface (no area) the anchor is
    /// unavailable and the zoom falls back to the diagram origin.
    pub fn on_wheel<H: RenderHandle>(
        &mut self,
        handle: Option<&mut H>,
        bounds: Rect,
        event: &WheelEvent,
    ) -> WheelOutcome {
        let Some(handle) = handle else {
            return WheelOutcome::Ignored;
        };
        if self.refit_pending {
            return WheelOutcome::Ignored;
        }
        let Some(direction) = ZoomDirection::from_wheel_delta(event.delta_y) else {
            return WheelOutcome::Ignored;
        };

        let before = handle.state();
        let scale = self.view.step(direction);
        handle.rescale(scale);

        if pointer_fraction(bounds, event.position).is_some() {
            let offset = anchor_preserving_offset(event.position, before, scale);
            self.view.set_offset(offset);
            handle.set_position(offset.x, offset.y);
        }

        if self.view.spec().wants_refit(scale) {
            self.refit_pending = true;
            return WheelOutcome::NeedsRefit;
        }
        WheelOutcome::Rescaled
    }

    /// Handles pointer-down: arms the drag and picks the grabbing cursor.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> CursorIcon {
        self.drag.begin(event.position);
        if self.drag.is_active() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        }
    }

    /// Handles pointer-move: pans the diagram by the incremental delta.
    ///
    /// A no-op unless a drag is active and a handle exists. The new offset
    /// is the renderer's current offset plus the delta; panning never
    /// recomputes from an absolute anchor.
    pub fn on_pointer_move<H: RenderHandle>(
        &mut self,
        handle: Option<&mut H>,
        event: &PointerEvent,
    ) -> bool {
        let Some(handle) = handle else {
            return false;
        };
        let Some(delta) = self.drag.move_to(event.position) else {
            return false;
        };
        let state = handle.state();
        let offset = Vec2::new(state.x + delta.x, state.y + delta.y);
        self.view.set_offset(offset);
        handle.set_position(offset.x, offset.y);
        true
    }

    /// Handles pointer-up: ends the drag and restores the grab cursor.
    pub fn on_pointer_up(&mut self) -> CursorIcon {
        self.drag.finish();
        CursorIcon::Grab
    }

    /// Handles pointer-leave: same as pointer-up, so a drag that exits the
    /// surface while the button is held does not stay stuck.
    pub fn on_pointer_leave(&mut self) -> CursorIcon {
        self.drag.finish();
        CursorIcon::Grab
    }
}
