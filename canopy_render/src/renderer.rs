// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_viewport::ViewTransform;

use crate::options::MapOptions;
use crate::theme::SceneTheme;

/// A tree-layout/rendering engine for hierarchical outline diagrams.
///
/// Implementations own whatever drawing target they paint into; a renderer
/// instance is constructed by the host already bound to its surface, the
/// same way a canvas engine owns its element. The interaction layer only
/// sees the two entry points here plus the handle operations.
pub trait DiagramRenderer {
    /// Layout tree produced from a document.
    type Tree;
    /// Live diagram instance.
    type Handle: RenderHandle<Tree = Self::Tree>;
    /// Failure transforming a document or creating a diagram.
    type Error: core::error::Error;

    /// Parses/transforms a document into a layout tree.
    ///
    /// A failure here must not leave any partial diagram behind.
    fn transform(&mut self, doc: &str) -> Result<Self::Tree, Self::Error>;

    /// Creates a live diagram from a layout tree with the given options.
    fn create(&mut self, options: &MapOptions, tree: &Self::Tree) -> Result<Self::Handle, Self::Error>;
}

/// One instantiated diagram bound to a drawing surface.
///
/// All operations on a destroyed handle are no-ops; [`RenderHandle::destroy`]
/// itself is idempotent.
pub trait RenderHandle {
    /// Layout tree type accepted by [`RenderHandle::set_data`].
    type Tree;

    /// Computes a scale/offset so the whole diagram is visible within the
    /// surface bounds.
    fn fit(&mut self);

    /// Applies a uniform scale about the diagram origin.
    fn rescale(&mut self, scale: f64);

    /// Moves the diagram to an absolute pixel offset.
    fn set_position(&mut self, x: f64, y: f64);

    /// Current scale and offset as the renderer sees them.
    fn state(&self) -> ViewTransform;

    /// Pushes a layout tree for (re)paint.
    fn set_data(&mut self, tree: &Self::Tree);

    /// Restyles the painted output (text fill, connector strokes,
    /// background) after a paint.
    fn apply_theme(&mut self, theme: &SceneTheme);

    /// Releases the diagram's resources and detaches it from the surface.
    fn destroy(&mut self);
}
