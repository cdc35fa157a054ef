// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_render --heading-base-level=0

//! Canopy Render: the seam between the interaction layer and a diagram
//! renderer.
//!
//! A session drives an external tree-layout/rendering engine through two
//! traits:
//!
//! - [`DiagramRenderer`]: turns a document into a layout tree and creates a
//!   live diagram bound to a drawing surface.
//! - [`RenderHandle`]: one instantiated diagram; exposes the transform
//!   primitives a viewport controller needs (`fit`, `rescale`,
//!   `set_position`, `state`, `set_data`, `apply_theme`, `destroy`).
//!
//! Alongside the traits live the fixed configuration handed to the renderer
//! ([`MapOptions`]), the depth-indexed node [`Palette`], and the
//! [`SceneTheme`] used to restyle painted output for a dark background.
//!
//! ## Reference renderer
//!
//! [`recording::RecordingRenderer`] is a small, stateful implementation for
//! tests and demos. It does not rasterize anything: it parses an indented
//! outline into a flat tree, tracks the transform a real renderer would
//! apply, and journals every operation so callers can assert on the exact
//! call sequence.
//!
//! ```rust
//! use canopy_render::recording::{RecordingRenderer, RenderOp};
//! use canopy_render::{DiagramRenderer, MapOptions, RenderHandle};
//!
//! let mut renderer = RecordingRenderer::new();
//! let journal = renderer.journal();
//!
//! let tree = renderer.transform("root\n  child a\n  child b").unwrap();
//! let mut handle = renderer.create(&MapOptions::default(), &tree).unwrap();
//! handle.rescale(1.5);
//! assert_eq!(handle.state().scale, 1.5);
//! assert!(journal.ops().contains(&RenderOp::Rescale(1.5)));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod options;
pub mod recording;
mod renderer;
mod theme;

pub use options::MapOptions;
pub use renderer::{DiagramRenderer, RenderHandle};
pub use theme::{Palette, SceneTheme};
