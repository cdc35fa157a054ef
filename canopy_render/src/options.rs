// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::theme::Palette;

/// Fixed configuration handed to the renderer when a diagram is created.
///
/// These are the recognized options of the renderer contract; anything the
/// underlying engine supports beyond this set is out of scope. The defaults
/// are the ones every session uses.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    /// Embed styling inline so the diagram has no external stylesheet
    /// dependency.
    pub embed_css: bool,
    /// Enable the renderer's native pan affordance.
    pub pan: bool,
    /// Enable the renderer's native zoom affordance.
    pub zoom: bool,
    /// Minimum node height in pixels.
    pub node_min_height: f64,
    /// Horizontal padding inside a node, in pixels.
    pub padding_x: f64,
    /// Horizontal spacing between tree levels, in pixels.
    pub spacing_horizontal: f64,
    /// Vertical spacing between sibling nodes, in pixels.
    pub spacing_vertical: f64,
    /// Expansion depth on first paint; `-1` expands every level.
    pub initial_expand_level: i32,
    /// Upper bound on the scale chosen by the initial auto-fit.
    pub max_initial_scale: f64,
    /// Transition duration for animated transforms, in milliseconds.
    pub duration_ms: u32,
    /// Maximum node text width before wrapping, in pixels.
    pub max_node_width: f64,
    /// Whether expand/collapse toggles apply to the whole subtree.
    pub toggle_recursively: bool,
    /// Whether the renderer auto-fits the diagram after layout changes.
    pub auto_fit: bool,
    /// Fraction of the surface the auto-fit fills.
    pub fit_ratio: f64,
    /// Node accent colors indexed by tree depth.
    pub palette: Palette,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            embed_css: true,
            pan: true,
            zoom: true,
            node_min_height: 16.0,
            padding_x: 20.0,
            spacing_horizontal: 100.0,
            spacing_vertical: 5.0,
            initial_expand_level: -1,
            max_initial_scale: 1.0,
            duration_ms: 500,
            max_node_width: 300.0,
            toggle_recursively: true,
            auto_fit: true,
            fit_ratio: 0.95,
            palette: Palette::DEFAULT,
        }
    }
}
