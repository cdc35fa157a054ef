// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording reference renderer.
//!
//! This module provides a small, stateful implementation of
//! [`DiagramRenderer`] / [`RenderHandle`] for **operation recording and
//! state tracing**.
//!
//! It is intentionally *not* a real renderer:
//! - It does **not** lay out or rasterize anything.
//! - It does **not** establish "golden" visual behavior.
//! - It is intended for tests and demos that want to assert on the exact
//!   sequence of operations a session issued and the transform state at the
//!   time each operation was applied.
//!
//! All handles created by one [`RecordingRenderer`] append to a shared
//! [`Journal`], so a caller can keep a journal clone and inspect the full
//! history even after the session has consumed renderer and handles.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use canopy_viewport::ViewTransform;

use crate::options::MapOptions;
use crate::renderer::{DiagramRenderer, RenderHandle};
use crate::theme::SceneTheme;

/// One node of a parsed outline: its depth and text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineNode {
    /// Nesting depth, root = 0.
    pub depth: usize,
    /// Node text with indentation stripped.
    pub text: String,
}

/// Flat layout tree produced by [`RecordingRenderer::transform`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
}

impl Outline {
    /// Nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[OutlineNode] {
        &self.nodes
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Failure parsing a document into an [`Outline`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The document contained no content lines.
    Empty,
    /// The first content line was indented; an outline must start at the
    /// root level.
    IndentedRoot,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "document has no content"),
            Self::IndentedRoot => write!(f, "outline must start at the root level"),
        }
    }
}

impl core::error::Error for ParseError {}

/// One recorded renderer operation.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    /// A document was transformed into a tree with this many nodes.
    Transformed(usize),
    /// A diagram was created from a tree with this many nodes.
    Created(usize),
    /// `fit` was called.
    Fit,
    /// `rescale` was called with this scale.
    Rescale(f64),
    /// `set_position` was called with this offset.
    SetPosition(f64, f64),
    /// `set_data` was called with a tree of this many nodes.
    SetData(usize),
    /// `apply_theme` was called.
    ApplyTheme,
    /// `destroy` was called (recorded once per handle).
    Destroy,
}

/// Shared, clonable log of every operation issued to a
/// [`RecordingRenderer`] and its handles.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    ops: Rc<RefCell<Vec<RenderOp>>>,
}

impl Journal {
    /// Snapshot of all recorded operations, oldest first.
    #[must_use]
    pub fn ops(&self) -> Vec<RenderOp> {
        self.ops.borrow().clone()
    }

    /// Number of operations recorded for `op`'s variant-and-payload.
    #[must_use]
    pub fn count(&self, op: &RenderOp) -> usize {
        self.ops.borrow().iter().filter(|o| *o == op).count()
    }

    /// Discards the recorded history.
    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    fn record(&self, op: RenderOp) {
        self.ops.borrow_mut().push(op);
    }
}

/// Reference [`DiagramRenderer`] that journals operations instead of
/// painting.
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    journal: Journal,
    fit_transform: ViewTransform,
}

impl RecordingRenderer {
    /// Creates a renderer whose auto-fit settles at scale 0.5 with no
    /// offset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            journal: Journal::default(),
            fit_transform: ViewTransform::new(0.5, 0.0, 0.0),
        }
    }

    /// Overrides the transform every `fit` call settles at.
    #[must_use]
    pub fn with_fit_transform(mut self, transform: ViewTransform) -> Self {
        self.fit_transform = transform;
        self
    }

    /// Clone of the shared operation journal.
    #[must_use]
    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer for RecordingRenderer {
    type Tree = Outline;
    type Handle = RecordingHandle;
    type Error = ParseError;

    fn transform(&mut self, doc: &str) -> Result<Outline, ParseError> {
        let mut nodes = Vec::new();
        for line in doc.lines() {
            let trimmed = line.trim_start_matches(' ');
            if trimmed.is_empty() {
                continue;
            }
            let indent = line.len() - trimmed.len();
            let depth = indent / 2;
            if nodes.is_empty() && depth != 0 {
                return Err(ParseError::IndentedRoot);
            }
            nodes.push(OutlineNode {
                depth,
                text: String::from(trimmed.trim_end()),
            });
        }
        if nodes.is_empty() {
            return Err(ParseError::Empty);
        }
        self.journal.record(RenderOp::Transformed(nodes.len()));
        Ok(Outline { nodes })
    }

    fn create(&mut self, _options: &MapOptions, tree: &Outline) -> Result<RecordingHandle, ParseError> {
        self.journal.record(RenderOp::Created(tree.len()));
        Ok(RecordingHandle {
            journal: self.journal.clone(),
            transform: ViewTransform::IDENTITY,
            fit_transform: self.fit_transform,
            destroyed: false,
        })
    }
}

/// Handle produced by [`RecordingRenderer::create`].
///
/// Tracks the transform a real renderer would be showing and journals every
/// operation. Once destroyed, all operations become no-ops.
#[derive(Clone, Debug)]
pub struct RecordingHandle {
    journal: Journal,
    transform: ViewTransform,
    fit_transform: ViewTransform,
    destroyed: bool,
}

impl RecordingHandle {
    /// Whether `destroy` has been called.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl RenderHandle for RecordingHandle {
    type Tree = Outline;

    fn fit(&mut self) {
        if self.destroyed {
            return;
        }
        self.transform = self.fit_transform;
        self.journal.record(RenderOp::Fit);
    }

    fn rescale(&mut self, scale: f64) {
        if self.destroyed {
            return;
        }
        self.transform.scale = scale;
        self.journal.record(RenderOp::Rescale(scale));
    }

    fn set_position(&mut self, x: f64, y: f64) {
        if self.destroyed {
            return;
        }
        self.transform.x = x;
        self.transform.y = y;
        self.journal.record(RenderOp::SetPosition(x, y));
    }

    fn state(&self) -> ViewTransform {
        self.transform
    }

    fn set_data(&mut self, tree: &Outline) {
        if self.destroyed {
            return;
        }
        self.journal.record(RenderOp::SetData(tree.len()));
    }

    fn apply_theme(&mut self, _theme: &SceneTheme) {
        if self.destroyed {
            return;
        }
        self.journal.record(RenderOp::ApplyTheme);
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.journal.record(RenderOp::Destroy);
    }
}
