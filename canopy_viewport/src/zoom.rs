// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of one wheel-driven zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Grow the scale (diagram appears larger).
    In,
    /// Shrink the scale (diagram appears smaller).
    Out,
}

impl ZoomDirection {
    /// Derives a zoom direction from a vertical wheel delta.
    ///
    /// Positive deltas (wheel down) zoom out, negative deltas zoom in.
    /// Returns `None` for a zero or non-finite delta, so a degenerate event
    /// produces no step at all.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        if delta_y > 0.0 { Some(Self::Out) } else { Some(Self::In) }
    }

    /// Multiplicative scale factor for one step of size `step`.
    ///
    /// Zoom-in multiplies by `1 + step`; zoom-out by its reciprocal, so an
    /// in-step followed by an out-step restores the original scale exactly.
    #[must_use]
    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::In => 1.0 + step,
            Self::Out => 1.0 / (1.0 + step),
        }
    }
}

/// Zoom stepping and clamping parameters for a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSpec {
    step: f64,
    min_scale: f64,
    max_scale: f64,
    refit_threshold: f64,
}

impl Default for ZoomSpec {
    /// Step 0.1, scale range `[0.1, 4.0]`, refit threshold 0.2.
    fn default() -> Self {
        Self {
            step: 0.1,
            min_scale: 0.1,
            max_scale: 4.0,
            refit_threshold: 0.2,
        }
    }
}

impl ZoomSpec {
    /// Creates a spec with the given step size, scale range, and low-scale
    /// refit threshold.
    ///
    /// The range is normalized so that `min_scale <= max_scale`, and all
    /// values are required to be finite; non-finite input falls back to the
    /// corresponding default.
    #[must_use]
    pub fn new(step: f64, min_scale: f64, max_scale: f64, refit_threshold: f64) -> Self {
        let defaults = Self::default();
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            defaults.step
        };
        let (mut min_scale, mut max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        if !min_scale.is_finite() || min_scale <= 0.0 {
            min_scale = defaults.min_scale;
        }
        if !max_scale.is_finite() || max_scale < min_scale {
            max_scale = defaults.max_scale.max(min_scale);
        }
        let refit_threshold = if refit_threshold.is_finite() {
            refit_threshold
        } else {
            defaults.refit_threshold
        };
        Self {
            step,
            min_scale,
            max_scale,
            refit_threshold,
        }
    }

    /// Step size applied per wheel event.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Smallest scale the viewport may reach.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest scale the viewport may reach.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Scale at or below which a manual zoom-out should hand control back
    /// to an auto-fit pass.
    #[must_use]
    pub fn refit_threshold(&self) -> f64 {
        self.refit_threshold
    }

    /// Clamps a scale into the configured range.
    ///
    /// Non-finite input clamps to the minimum so the range invariant holds
    /// no matter what the caller computed.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(self.min_scale, self.max_scale)
        } else {
            self.min_scale
        }
    }

    /// Whether a scale has dropped to the point where an auto-fit should
    /// take over.
    #[must_use]
    pub fn wants_refit(&self, scale: f64) -> bool {
        scale <= self.refit_threshold
    }
}
