// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_event_state --heading-base-level=0

//! Canopy Event State: input-side state for diagram interaction.
//!
//! This crate holds the small stateful pieces a viewport controller needs
//! between pointer events, plus the event types a host forwards into it:
//!
//! - [`drag::DragState`]: track an active drag and yield incremental deltas
//! - [`input`]: pointer/wheel event types and the cursor affordance enum
//!
//! ## Drag tracking
//!
//! A drag is purely incremental: each move yields the delta from the last
//! recorded position, and no start anchor is retained.
//!
//! ```rust
//! use kurbo::Point;
//! use canopy_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.begin(Point::new(100.0, 100.0));
//!
//! let delta = drag.move_to(Point::new(140.0, 130.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (40.0, 30.0));
//!
//! drag.finish();
//! // After the drag ends, moves are no-ops.
//! assert!(drag.move_to(Point::new(0.0, 0.0)).is_none());
//! ```
//!
//! The crate does not assume any particular UI framework or event loop;
//! hosts translate their native events into [`input::PointerEvent`] /
//! [`input::WheelEvent`] and hand them to a controller layer.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod input;
