// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_viewport --heading-base-level=0

//! Canopy Viewport: headless pan/zoom state for a renderer-backed diagram.
//!
//! This crate models the transform a viewport controller owns while a user
//! pans and zooms a diagram: a uniform scale plus a pixel-space offset. It
//! focuses on:
//! - Scale stepping from wheel input, with clamping into a configured range.
//! - Anchor-preserving zoom math (keep the point under the pointer fixed).
//! - Guards against degenerate input (zero-sized surfaces, non-finite deltas).
//!
//! It does **not** own a scene graph, a renderer, or any event plumbing.
//! Callers are expected to:
//! - Interpret raw pointer/wheel events at a higher layer and feed scale
//!   steps and pan deltas into [`ViewportState`].
//! - Forward the resulting transform to whatever renders the diagram.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_viewport::{ViewportState, ZoomDirection, ZoomSpec};
//!
//! let mut view = ViewportState::new(ZoomSpec::default());
//! assert_eq!(view.scale(), 1.0);
//!
//! // One zoom-in step then one zoom-out step at the default step of 0.1.
//! view.step(ZoomDirection::In);
//! view.step(ZoomDirection::Out);
//! // Reciprocal out-steps undo in-steps exactly.
//! assert!((view.scale() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform; rotation is out of scope.
//! - Zoom-out uses the reciprocal of the zoom-in factor so that symmetric
//!   step sequences return to the starting scale without drift.
//! - The scale range invariant holds after every mutation, including
//!   adoption of an externally reported scale via
//!   [`ViewportState::sync_scale`].
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;
mod zoom;

pub use viewport::{ViewTransform, ViewportState, anchor_preserving_offset, pointer_fraction};
pub use zoom::{ZoomDirection, ZoomSpec};
