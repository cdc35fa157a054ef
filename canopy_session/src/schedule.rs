// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred-paint scheduling and one-shot cleanup.
//!
//! Fit/rescale sequencing needs a "next paint opportunity" primitive: work
//! queued during event handling runs only when the host pumps the next
//! paint tick. [`FrameQueue`] models that primitive as a FIFO of
//! epoch-tagged entries; bumping the session epoch cancels everything that
//! was queued for a torn-down diagram without the queue having to know why.

use std::collections::VecDeque;
use std::fmt;

/// Work deferred to a paint tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// First mount tick: auto-fit the freshly created diagram.
    FitNewDiagram,
    /// Second mount tick: apply the reset scale, push the tree, restyle.
    FinishMount,
    /// Auto-fit after a low-scale zoom-out, then resync the recorded scale.
    Refit,
}

/// FIFO queue of epoch-tagged deferred work, pumped once per paint tick.
///
/// Entries queued while a tick is being processed run on the *next* tick;
/// [`FrameQueue::take_due`] only returns what was queued before it was
/// called. Entries whose epoch no longer matches are silently dropped.
#[derive(Debug, Default)]
pub struct FrameQueue {
    entries: VecDeque<(u64, Deferred)>,
}

impl FrameQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` for the next tick, tagged with `epoch`.
    pub fn push(&mut self, epoch: u64, action: Deferred) {
        self.entries.push_back((epoch, action));
    }

    /// Removes and returns the actions due now whose epoch matches.
    ///
    /// Only entries present when this is called are returned, so an action
    /// that queues follow-up work during processing defers that work to the
    /// following tick.
    pub fn take_due(&mut self, epoch: u64) -> Vec<Deferred> {
        let due = self.entries.len();
        let mut out = Vec::new();
        for _ in 0..due {
            if let Some((tag, action)) = self.entries.pop_front() {
                if tag == epoch {
                    out.push(action);
                }
            }
        }
        out
    }

    /// Discards everything queued.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One-shot cleanup callback.
///
/// Returned by [`Surface::bind_input`](crate::Surface::bind_input) to undo
/// listener registration. Runs at most once: disposing twice is a no-op,
/// and an undisposed value runs its cleanup on drop.
#[derive(Default)]
pub struct Disposer(Option<Box<dyn FnOnce()>>);

impl Disposer {
    /// Wraps a cleanup callback.
    #[must_use]
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(cleanup)))
    }

    /// A disposer with nothing to clean up.
    #[must_use]
    pub fn noop() -> Self {
        Self(None)
    }

    /// Runs the cleanup if it has not run yet.
    pub fn dispose(&mut self) {
        if let Some(cleanup) = self.0.take() {
            cleanup();
        }
    }

    /// Whether the cleanup has already run (or there never was one).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.0.is_none()
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Disposer")
            .field(&if self.0.is_some() { "armed" } else { "disposed" })
            .finish()
    }
}
