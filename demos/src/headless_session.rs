// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted headless session against the recording reference renderer.
//!
//! Mounts an outline, zooms in at the pointer, drags the diagram around,
//! then zooms out far enough to hand control back to the auto-fit. Every
//! renderer operation the session issued is printed at the end.

use canopy_event_state::input::{PointerEvent, WheelEvent};
use canopy_render::recording::RecordingRenderer;
use canopy_session::{HeadlessSurface, Session};
use canopy_viewport::ViewTransform;
use kurbo::{Point, Rect};

const OUTLINE: &str = "\
project
  goals
    ship the viewer
    keep input latency low
  risks
    renderer churn
  notes";

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let renderer =
        RecordingRenderer::new().with_fit_transform(ViewTransform::new(0.6, 24.0, 16.0));
    let journal = renderer.journal();
    let surface = HeadlessSurface::new(Rect::new(0.0, 0.0, 800.0, 500.0));
    let mut session = Session::new(renderer, surface);

    session.set_document(OUTLINE).expect("outline parses");
    // Two paint ticks: fit first, then rescale + data push + restyle.
    session.on_frame();
    session.on_frame();
    tracing::info!(transform = ?session.transform(), "mounted");

    let pointer = Point::new(620.0, 180.0);
    for _ in 0..3 {
        session.on_wheel(&WheelEvent::vertical(pointer, -120.0));
    }
    tracing::info!(transform = ?session.transform(), "after three zoom-in steps");

    session.on_pointer_down(&PointerEvent::primary(Point::new(100.0, 100.0)));
    session.on_pointer_move(&PointerEvent::primary(Point::new(140.0, 130.0)));
    session.on_pointer_up();
    tracing::info!(transform = ?session.transform(), "after dragging by (40, 30)");

    // A long zoom-out run crosses the low-scale threshold; the next paint
    // tick runs the auto-fit and resyncs the recorded scale from it.
    for _ in 0..30 {
        session.on_wheel(&WheelEvent::vertical(pointer, 120.0));
        session.on_frame();
    }
    tracing::info!(transform = ?session.transform(), "after zoom-out hand-off to fit");

    session.teardown();

    println!("renderer operations, in order:");
    for op in journal.ops() {
        println!("  {op:?}");
    }
}
