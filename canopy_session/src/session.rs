// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_event_state::input::{CursorIcon, PointerEvent, WheelEvent};
use canopy_render::{DiagramRenderer, MapOptions, RenderHandle, SceneTheme};
use canopy_viewport::{ViewTransform, ZoomSpec};

use crate::controller::{ViewportController, WheelOutcome};
use crate::error::SessionError;
use crate::schedule::{Deferred, Disposer, FrameQueue};
use crate::surface::Surface;

/// One interactive diagram session: a renderer, a surface, and the viewport
/// controller between them.
///
/// The session owns the whole lifecycle. Supplying a document tears down
/// whatever was there before, builds a fresh diagram, and schedules the
/// mount sequence on the paint queue; the host pumps that queue by calling
/// [`Session::on_frame`] once per paint tick and forwards surface input to
/// the `on_*` entry points. At most one renderer handle is alive at any
/// time, and input delivery is scoped 1:1 to that handle's lifetime.
pub struct Session<R: DiagramRenderer, S: Surface> {
    renderer: R,
    surface: S,
    options: MapOptions,
    theme: SceneTheme,
    controller: ViewportController,
    handle: Option<R::Handle>,
    tree: Option<R::Tree>,
    queue: FrameQueue,
    input: Disposer,
    epoch: u64,
}

impl<R: DiagramRenderer, S: Surface> Session<R, S> {
    /// Creates an empty session with default options, theme, and zoom spec.
    pub fn new(renderer: R, surface: S) -> Self {
        Self::with_config(
            renderer,
            surface,
            MapOptions::default(),
            SceneTheme::default(),
            ZoomSpec::default(),
        )
    }

    /// Creates an empty session with explicit configuration.
    pub fn with_config(
        renderer: R,
        surface: S,
        options: MapOptions,
        theme: SceneTheme,
        spec: ZoomSpec,
    ) -> Self {
        Self {
            renderer,
            surface,
            options,
            theme,
            controller: ViewportController::new(spec),
            handle: None,
            tree: None,
            queue: FrameQueue::new(),
            input: Disposer::noop(),
            epoch: 0,
        }
    }

    /// Whether a diagram is currently alive.
    #[must_use]
    pub fn has_diagram(&self) -> bool {
        self.handle.is_some()
    }

    /// The controller's recorded scale and offset.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.controller.transform()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// The surface hosting the diagram.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replaces the session's content with a new document.
    ///
    /// The previous diagram is torn down first (listeners unbound, handle
    /// destroyed, pending paint work cancelled), then the document is
    /// transformed and a fresh diagram is created and scheduled to mount:
    /// the next paint tick auto-fits, the one after applies the reset
    /// scale, pushes the tree, and restyles the painted output.
    ///
    /// On a transform or creation failure the error is logged and returned
    /// and the session is left with no diagram, never a partial one.
    pub fn set_document(&mut self, doc: &str) -> Result<(), SessionError<R::Error>> {
        self.teardown();
        self.surface.clear();

        let tree = match self.renderer.transform(doc) {
            Ok(tree) => tree,
            Err(error) => {
                tracing::error!(%error, "failed to transform document");
                return Err(SessionError::Transform(error));
            }
        };
        let handle = match self.renderer.create(&self.options, &tree) {
            Ok(handle) => handle,
            Err(error) => {
                tracing::error!(%error, "failed to create diagram");
                return Err(SessionError::Create(error));
            }
        };

        self.controller.reset();
        self.handle = Some(handle);
        self.tree = Some(tree);
        self.queue.push(self.epoch, Deferred::FitNewDiagram);
        self.input = self.surface.bind_input();
        self.surface.set_cursor(CursorIcon::Grab);
        tracing::debug!("diagram mounted, fit scheduled");
        Ok(())
    }

    /// Pumps the deferred-paint queue; the host calls this once per paint
    /// tick.
    pub fn on_frame(&mut self) {
        for action in self.queue.take_due(self.epoch) {
            match action {
                Deferred::FitNewDiagram => {
                    if let Some(handle) = &mut self.handle {
                        handle.fit();
                        // Rescale and data push wait one more tick so the
                        // renderer has committed the fitted layout.
                        self.queue.push(self.epoch, Deferred::FinishMount);
                    }
                }
                Deferred::FinishMount => {
                    if let (Some(handle), Some(tree)) = (&mut self.handle, &self.tree) {
                        handle.rescale(self.controller.transform().scale);
                        handle.set_data(tree);
                        handle.apply_theme(&self.theme);
                        let reported = handle.state();
                        self.controller.sync_from(reported);
                    }
                }
                Deferred::Refit => {
                    if let Some(handle) = &mut self.handle {
                        handle.fit();
                        self.controller.complete_refit(handle.state());
                    }
                }
            }
        }
    }

    /// Forwards a wheel event from the surface.
    pub fn on_wheel(&mut self, event: &WheelEvent) {
        let bounds = self.surface.bounds();
        let outcome = self.controller.on_wheel(self.handle.as_mut(), bounds, event);
        if outcome == WheelOutcome::NeedsRefit {
            self.queue.push(self.epoch, Deferred::Refit);
        }
    }

    /// Forwards a pointer-down event from the surface.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        let cursor = self.controller.on_pointer_down(event);
        self.surface.set_cursor(cursor);
    }

    /// Forwards a pointer-move event from the surface.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        self.controller.on_pointer_move(self.handle.as_mut(), event);
    }

    /// Forwards a pointer-up event from the surface.
    pub fn on_pointer_up(&mut self) {
        let cursor = self.controller.on_pointer_up();
        self.surface.set_cursor(cursor);
    }

    /// Forwards a pointer-leave event from the surface.
    pub fn on_pointer_leave(&mut self) {
        let cursor = self.controller.on_pointer_leave();
        self.surface.set_cursor(cursor);
    }

    /// Tears the current diagram down: cancels pending paint work, unbinds
    /// input, destroys the handle, and resets the controller.
    ///
    /// Idempotent; also runs when the session is dropped. There is no
    /// ordering dependency between unbinding and destruction.
    pub fn teardown(&mut self) {
        self.epoch += 1;
        self.queue.clear();
        self.input.dispose();
        if let Some(mut handle) = self.handle.take() {
            handle.destroy();
            tracing::debug!("diagram torn down");
        }
        self.tree = None;
        self.controller.reset();
    }
}

impl<R: DiagramRenderer, S: Surface> Drop for Session<R, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<R, S> core::fmt::Debug for Session<R, S>
where
    R: DiagramRenderer,
    S: Surface,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("has_diagram", &self.has_diagram())
            .field("transform", &self.transform())
            .field("is_dragging", &self.is_dragging())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}
