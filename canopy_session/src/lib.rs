// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_session --heading-base-level=0

//! Canopy Session: interactive pan/zoom sessions over a diagram renderer.
//!
//! This crate composes the headless state crates into the two pieces an
//! interactive outline diagram needs:
//!
//! - [`ViewportController`]: turns pointer/wheel events into renderer
//!   transforms — multiplicative, pointer-anchored wheel zoom clamped into
//!   a scale range, incremental drag panning, and a low-scale hand-off to
//!   the renderer's auto-fit.
//! - [`Session`]: the lifecycle manager — builds a diagram per document,
//!   tears the previous one down first, schedules the fit/rescale mount
//!   sequence on a paint-tick queue, and guarantees listener and handle
//!   cleanup.
//!
//! The renderer itself stays behind the traits in [`canopy_render`]; the
//! hosting UI implements [`Surface`] and forwards its native events.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_event_state::input::WheelEvent;
//! use canopy_render::recording::RecordingRenderer;
//! use canopy_session::{HeadlessSurface, Session};
//! use kurbo::{Point, Rect};
//!
//! let renderer = RecordingRenderer::new();
//! let surface = HeadlessSurface::new(Rect::new(0.0, 0.0, 800.0, 500.0));
//! let mut session = Session::new(renderer, surface);
//!
//! session.set_document("root\n  child a\n  child b").unwrap();
//! session.on_frame(); // auto-fit commits first
//! session.on_frame(); // then rescale, data push, restyle
//!
//! // One wheel-zoom-in step at the default step size.
//! session.on_wheel(&WheelEvent::vertical(Point::new(400.0, 250.0), -120.0));
//! assert!((session.transform().scale - 1.1).abs() < 1e-12);
//! ```
//!
//! ## Event wiring
//!
//! The session never talks to a windowing system. Hosts attach their own
//! listeners inside [`Surface::bind_input`] (suppressing native
//! scroll/zoom on wheel), translate events into
//! [`canopy_event_state::input`] types, call the session's `on_*` methods,
//! and pump [`Session::on_frame`] once per paint tick. All of that runs on
//! one thread; the session holds no locks and never blocks.

mod controller;
mod error;
mod schedule;
mod session;
mod surface;

pub use controller::{ViewportController, WheelOutcome};
pub use error::SessionError;
pub use schedule::{Deferred, Disposer, FrameQueue};
pub use session::Session;
pub use surface::{HeadlessSurface, Surface};
