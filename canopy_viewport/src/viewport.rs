// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::zoom::{ZoomDirection, ZoomSpec};

/// Read-only snapshot of a diagram transform: a uniform scale plus a
/// pixel-space offset.
///
/// This is the shape a renderer reports from its state accessor and the
/// shape a controller pushes back through `rescale`/`set_position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal offset in surface pixels.
    pub x: f64,
    /// Vertical offset in surface pixels.
    pub y: f64,
}

impl ViewTransform {
    /// Scale 1 with no offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Creates a transform from a scale and offset components.
    #[must_use]
    pub const fn new(scale: f64, x: f64, y: f64) -> Self {
        Self { scale, x, y }
    }

    /// The offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pan/zoom state owned by a viewport controller.
///
/// Tracks the current scale and offset together with the [`ZoomSpec`] that
/// bounds them. Every mutation keeps the scale inside the spec's range;
/// non-finite input is discarded rather than propagated.
#[derive(Clone, Copy, Debug)]
pub struct ViewportState {
    scale: f64,
    offset: Vec2,
    spec: ZoomSpec,
}

impl ViewportState {
    /// Creates a state at scale 1 with no offset.
    #[must_use]
    pub fn new(spec: ZoomSpec) -> Self {
        Self {
            scale: spec.clamp(1.0),
            offset: Vec2::ZERO,
            spec,
        }
    }

    /// Returns the zoom spec in effect.
    #[must_use]
    pub fn spec(&self) -> &ZoomSpec {
        &self.spec
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current offset in surface pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Resets to scale 1 and zero offset, e.g. when a new document arrives.
    pub fn reset(&mut self) {
        self.scale = self.spec.clamp(1.0);
        self.offset = Vec2::ZERO;
    }

    /// Applies one zoom step in the given direction, returning the new scale.
    pub fn step(&mut self, direction: ZoomDirection) -> f64 {
        let factor = direction.factor(self.spec.step());
        self.scale = self.spec.clamp(self.scale * factor);
        self.scale
    }

    /// Adopts an externally reported scale, clamped into range.
    ///
    /// Used to resynchronize after a renderer-side auto-fit changed the
    /// scale behind the controller's back. Non-finite input leaves the
    /// current scale untouched.
    pub fn sync_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = self.spec.clamp(scale);
        }
    }

    /// Replaces the offset. Non-finite components are discarded.
    pub fn set_offset(&mut self, offset: Vec2) {
        if offset.x.is_finite() && offset.y.is_finite() {
            self.offset = offset;
        }
    }

    /// Shifts the offset by a delta. Non-finite deltas are discarded.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta.x.is_finite() && delta.y.is_finite() {
            self.offset += delta;
        }
    }

    /// Snapshot of the current scale and offset.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.scale, self.offset.x, self.offset.y)
    }
}

/// Offset that keeps the world point under `anchor` fixed across a scale
/// change.
///
/// `current` is the transform the renderer is showing right now; the
/// returned offset is what `set_position` should receive alongside a
/// `rescale` to `new_scale` so the content under the anchor does not slide.
/// If the current scale is zero or any input is non-finite, the current
/// offset is returned unchanged.
#[must_use]
pub fn anchor_preserving_offset(anchor: Point, current: ViewTransform, new_scale: f64) -> Vec2 {
    let finite = anchor.x.is_finite()
        && anchor.y.is_finite()
        && current.scale.is_finite()
        && current.x.is_finite()
        && current.y.is_finite()
        && new_scale.is_finite();
    if !finite || current.scale == 0.0 {
        return current.offset();
    }
    // World point under the anchor, then the offset that maps it back to
    // the anchor at the new scale.
    let ratio = new_scale / current.scale;
    Vec2::new(
        anchor.x - (anchor.x - current.x) * ratio,
        anchor.y - (anchor.y - current.y) * ratio,
    )
}

/// Fractional position of a pointer within surface bounds, each component
/// in `[0, 1]`.
///
/// Returns `None` when the bounds have no area or any input is non-finite,
/// so degenerate surfaces never produce NaN anchors downstream.
#[must_use]
pub fn pointer_fraction(bounds: Rect, pos: Point) -> Option<Point> {
    let width = bounds.width();
    let height = bounds.height();
    if !(width > 0.0 && height > 0.0) || !pos.x.is_finite() || !pos.y.is_finite() {
        return None;
    }
    let fx = ((pos.x - bounds.x0) / width).clamp(0.0, 1.0);
    let fy = ((pos.y - bounds.y0) / height).clamp(0.0, 1.0);
    if fx.is_finite() && fy.is_finite() {
        Some(Point::new(fx, fy))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{ViewTransform, ViewportState, anchor_preserving_offset, pointer_fraction};
    use crate::zoom::{ZoomDirection, ZoomSpec};

    #[test]
    fn new_state_is_identity() {
        let view = ViewportState::new(ZoomSpec::default());
        assert_eq!(view.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn three_in_steps_compound_multiplicatively() {
        let mut view = ViewportState::new(ZoomSpec::default());
        view.step(ZoomDirection::In);
        view.step(ZoomDirection::In);
        let scale = view.step(ZoomDirection::In);
        let expected = 1.1 * 1.1 * 1.1;
        assert!((scale - expected).abs() < 1e-12);
    }

    #[test]
    fn symmetric_steps_return_to_start() {
        let mut view = ViewportState::new(ZoomSpec::default());
        for _ in 0..5 {
            view.step(ZoomDirection::In);
        }
        for _ in 0..5 {
            view.step(ZoomDirection::Out);
        }
        assert!((view.scale() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scale_stays_in_range_under_long_runs() {
        let mut view = ViewportState::new(ZoomSpec::default());
        for _ in 0..200 {
            let s = view.step(ZoomDirection::In);
            assert!(s <= view.spec().max_scale());
        }
        for _ in 0..500 {
            let s = view.step(ZoomDirection::Out);
            assert!(s >= view.spec().min_scale());
        }
    }

    #[test]
    fn sync_scale_clamps_and_ignores_non_finite() {
        let mut view = ViewportState::new(ZoomSpec::default());
        view.sync_scale(0.5);
        assert_eq!(view.scale(), 0.5);
        view.sync_scale(f64::NAN);
        assert_eq!(view.scale(), 0.5);
        view.sync_scale(100.0);
        assert_eq!(view.scale(), view.spec().max_scale());
    }

    #[test]
    fn pan_round_trip_restores_offset() {
        let mut view = ViewportState::new(ZoomSpec::default());
        view.pan_by(Vec2::new(40.0, 30.0));
        view.pan_by(Vec2::new(-40.0, -30.0));
        assert!(view.offset().hypot() < 1e-12);
    }

    #[test]
    fn non_finite_pan_is_discarded() {
        let mut view = ViewportState::new(ZoomSpec::default());
        view.pan_by(Vec2::new(10.0, 10.0));
        view.pan_by(Vec2::new(f64::NAN, 5.0));
        view.pan_by(Vec2::new(5.0, f64::INFINITY));
        assert_eq!(view.offset(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn reset_restores_identity() {
        let mut view = ViewportState::new(ZoomSpec::default());
        view.step(ZoomDirection::In);
        view.pan_by(Vec2::new(12.0, -7.0));
        view.reset();
        assert_eq!(view.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn anchor_point_stays_fixed_across_rescale() {
        let anchor = Point::new(200.0, 150.0);
        let current = ViewTransform::new(1.0, 20.0, -10.0);
        let new_scale = 1.1;
        let offset = anchor_preserving_offset(anchor, current, new_scale);

        // The world point under the anchor before and after must agree.
        let world_before_x = (anchor.x - current.x) / current.scale;
        let world_before_y = (anchor.y - current.y) / current.scale;
        let world_after_x = (anchor.x - offset.x) / new_scale;
        let world_after_y = (anchor.y - offset.y) / new_scale;
        assert!((world_before_x - world_after_x).abs() < 1e-9);
        assert!((world_before_y - world_after_y).abs() < 1e-9);
    }

    #[test]
    fn anchor_offset_degenerate_inputs_keep_current_offset() {
        let current = ViewTransform::new(0.0, 5.0, 6.0);
        let offset = anchor_preserving_offset(Point::new(1.0, 1.0), current, 2.0);
        assert_eq!(offset, current.offset());

        let current = ViewTransform::new(1.0, 5.0, 6.0);
        let offset = anchor_preserving_offset(Point::new(f64::NAN, 1.0), current, 2.0);
        assert_eq!(offset, current.offset());
    }

    #[test]
    fn pointer_fraction_within_bounds() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 500.0);
        let frac = pointer_fraction(bounds, Point::new(200.0, 250.0)).unwrap();
        assert!((frac.x - 0.25).abs() < 1e-12);
        assert!((frac.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pointer_fraction_rejects_zero_sized_surface() {
        let bounds = Rect::new(10.0, 10.0, 10.0, 300.0);
        assert!(pointer_fraction(bounds, Point::new(10.0, 100.0)).is_none());
    }

    #[test]
    fn pointer_fraction_rejects_non_finite_position() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 500.0);
        assert!(pointer_fraction(bounds, Point::new(f64::NAN, 10.0)).is_none());
    }
}
