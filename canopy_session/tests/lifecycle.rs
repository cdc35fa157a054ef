// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end lifecycle tests driving a [`Session`] against the recording
//! reference renderer.

use canopy_event_state::input::{CursorIcon, PointerEvent, WheelEvent};
use canopy_render::recording::{Journal, RecordingRenderer, RenderOp};
use canopy_render::{MapOptions, SceneTheme};
use canopy_session::{HeadlessSurface, Session, SessionError};
use canopy_viewport::{ViewTransform, ZoomSpec};
use kurbo::{Point, Rect};

const OUTLINE: &str = "root\n  left\n    leaf\n  right";

fn surface() -> HeadlessSurface {
    HeadlessSurface::new(Rect::new(0.0, 0.0, 800.0, 500.0))
}

fn mounted_session() -> (Session<RecordingRenderer, HeadlessSurface>, Journal) {
    let renderer = RecordingRenderer::new();
    let journal = renderer.journal();
    let mut session = Session::new(renderer, surface());
    session.set_document(OUTLINE).unwrap();
    session.on_frame();
    session.on_frame();
    (session, journal)
}

fn wheel(delta_y: f64) -> WheelEvent {
    WheelEvent::vertical(Point::new(400.0, 250.0), delta_y)
}

#[test]
fn mount_sequence_fits_then_rescales_and_pushes_data() {
    let (session, journal) = mounted_session();
    assert!(session.has_diagram());
    assert_eq!(
        journal.ops(),
        [
            RenderOp::Transformed(4),
            RenderOp::Created(4),
            RenderOp::Fit,
            RenderOp::Rescale(1.0),
            RenderOp::SetData(4),
            RenderOp::ApplyTheme,
        ]
    );
    assert_eq!(session.transform(), ViewTransform::IDENTITY);
}

#[test]
fn transform_failure_leaves_the_session_empty() {
    let renderer = RecordingRenderer::new();
    let journal = renderer.journal();
    let mut session = Session::new(renderer, surface());

    let result = session.set_document("   \n\n");
    assert!(matches!(result, Err(SessionError::Transform(_))));
    assert!(!session.has_diagram());
    assert!(journal.ops().is_empty());
    assert_eq!(session.surface().live_bindings(), 0);

    // The session still works for the next good document.
    session.set_document(OUTLINE).unwrap();
    assert!(session.has_diagram());
}

#[test]
fn replacing_the_document_destroys_the_old_handle_first() {
    let (mut session, journal) = mounted_session();
    session.set_document("other root\n  other child").unwrap();
    session.on_frame();
    session.on_frame();

    let ops = journal.ops();
    let destroy = ops.iter().position(|op| *op == RenderOp::Destroy).unwrap();
    let second_create = ops.iter().position(|op| *op == RenderOp::Created(2)).unwrap();
    assert!(destroy < second_create, "old handle must die before the new one exists");
    assert_eq!(journal.count(&RenderOp::Destroy), 1);
    // Listener registration stays balanced: one binding per live diagram.
    assert_eq!(session.surface().live_bindings(), 1);
}

#[test]
fn replacing_the_document_mid_drag_cancels_the_drag() {
    let (mut session, journal) = mounted_session();
    session.on_pointer_down(&PointerEvent::primary(Point::new(100.0, 100.0)));
    assert!(session.is_dragging());

    session.set_document("fresh root").unwrap();
    assert!(!session.is_dragging());

    journal.clear();
    session.on_pointer_move(&PointerEvent::primary(Point::new(180.0, 140.0)));
    assert_eq!(
        journal
            .ops()
            .iter()
            .filter(|op| matches!(op, RenderOp::SetPosition(..)))
            .count(),
        0
    );
}

#[test]
fn three_wheel_steps_compound_from_the_mounted_scale() {
    let (mut session, _journal) = mounted_session();
    for _ in 0..3 {
        session.on_wheel(&wheel(-120.0));
    }
    let expected = 1.1 * 1.1 * 1.1;
    assert!((session.transform().scale - expected).abs() < 1e-12);
}

#[test]
fn scale_invariant_holds_for_arbitrary_wheel_runs() {
    let (mut session, _journal) = mounted_session();
    let deltas = [120.0, -120.0, 3.0, -1.0, f64::NAN, 0.0, 900.0, -900.0];
    for i in 0..400 {
        session.on_wheel(&wheel(deltas[i % deltas.len()]));
        session.on_frame();
        let scale = session.transform().scale;
        assert!((0.1..=4.0).contains(&scale));
    }
}

#[test]
fn low_scale_zoom_out_hands_off_to_auto_fit_once() {
    let renderer =
        RecordingRenderer::new().with_fit_transform(ViewTransform::new(0.6, 0.0, 0.0));
    let journal = renderer.journal();
    let mut session = Session::with_config(
        renderer,
        surface(),
        MapOptions::default(),
        SceneTheme::default(),
        ZoomSpec::new(0.1, 0.1, 4.0, 0.5),
    );
    session.set_document(OUTLINE).unwrap();
    session.on_frame();
    session.on_frame();
    assert_eq!(journal.count(&RenderOp::Fit), 1);

    // Zoom out past the 0.5 threshold; extra events while the refit is
    // pending are ignored.
    for _ in 0..12 {
        session.on_wheel(&wheel(120.0));
    }
    let locked = session.transform().scale;
    assert!(locked <= 0.5);

    session.on_frame();
    assert_eq!(journal.count(&RenderOp::Fit), 2, "exactly one refit");
    // The controller adopts the renderer's post-fit scale, not its own
    // last manual value.
    assert_eq!(session.transform().scale, 0.6);

    // Manual rescales are accepted again.
    session.on_wheel(&wheel(-120.0));
    assert!((session.transform().scale - 0.66).abs() < 1e-12);
}

#[test]
fn drag_pans_by_incremental_deltas() {
    let (mut session, journal) = mounted_session();
    journal.clear();

    session.on_pointer_down(&PointerEvent::primary(Point::new(100.0, 100.0)));
    assert_eq!(session.surface().cursor(), CursorIcon::Grabbing);

    session.on_pointer_move(&PointerEvent::primary(Point::new(140.0, 130.0)));
    assert_eq!(journal.ops(), [RenderOp::SetPosition(40.0, 30.0)]);

    session.on_pointer_up();
    assert_eq!(session.surface().cursor(), CursorIcon::Grab);
}

#[test]
fn symmetric_drag_returns_the_offset_to_start() {
    let (mut session, _journal) = mounted_session();
    session.on_pointer_down(&PointerEvent::primary(Point::new(0.0, 0.0)));
    session.on_pointer_move(&PointerEvent::primary(Point::new(33.0, -21.0)));
    session.on_pointer_move(&PointerEvent::primary(Point::new(0.0, 0.0)));
    let transform = session.transform();
    assert_eq!((transform.x, transform.y), (0.0, 0.0));
}

#[test]
fn pointer_leave_mid_drag_blocks_subsequent_moves() {
    let (mut session, journal) = mounted_session();
    session.on_pointer_down(&PointerEvent::primary(Point::new(10.0, 10.0)));
    session.on_pointer_leave();
    assert_eq!(session.surface().cursor(), CursorIcon::Grab);

    journal.clear();
    session.on_pointer_move(&PointerEvent::primary(Point::new(90.0, 90.0)));
    assert!(journal.ops().is_empty());
}

#[test]
fn teardown_unbinds_input_and_is_idempotent() {
    let (mut session, journal) = mounted_session();
    assert_eq!(session.surface().live_bindings(), 1);

    session.teardown();
    assert_eq!(session.surface().live_bindings(), 0);
    assert!(!session.has_diagram());
    assert_eq!(journal.count(&RenderOp::Destroy), 1);

    session.teardown();
    assert_eq!(session.surface().live_bindings(), 0);
    assert_eq!(journal.count(&RenderOp::Destroy), 1);
}

#[test]
fn pending_paint_work_dies_with_the_diagram() {
    let renderer = RecordingRenderer::new();
    let journal = renderer.journal();
    let mut session = Session::new(renderer, surface());
    session.set_document(OUTLINE).unwrap();

    // Teardown before the mount sequence ever runs.
    session.teardown();
    session.on_frame();
    session.on_frame();
    assert_eq!(journal.count(&RenderOp::Fit), 0);
}

#[test]
fn events_after_teardown_are_noops() {
    let (mut session, journal) = mounted_session();
    session.teardown();
    journal.clear();

    session.on_wheel(&wheel(-120.0));
    session.on_pointer_down(&PointerEvent::primary(Point::new(5.0, 5.0)));
    session.on_pointer_move(&PointerEvent::primary(Point::new(50.0, 50.0)));
    session.on_pointer_up();
    session.on_frame();

    assert!(journal.ops().is_empty());
    assert_eq!(session.transform().scale, 1.0);
}

#[test]
fn dropping_the_session_destroys_the_handle() {
    let renderer = RecordingRenderer::new();
    let journal = renderer.journal();
    {
        let mut session = Session::new(renderer, surface());
        session.set_document(OUTLINE).unwrap();
    }
    assert_eq!(journal.count(&RenderOp::Destroy), 1);
}
