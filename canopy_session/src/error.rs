// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failure surfaced by [`Session::set_document`](crate::Session::set_document).
///
/// Either way the session is left with no diagram rather than a partially
/// constructed one; the error is also logged at the boundary where it is
/// caught.
#[derive(Debug, Error)]
pub enum SessionError<E>
where
    E: core::error::Error + 'static,
{
    /// The document could not be transformed into a layout tree.
    #[error("failed to transform document into a layout tree")]
    Transform(#[source] E),
    /// The renderer could not create a diagram from the layout tree.
    #[error("failed to create a diagram from the layout tree")]
    Create(#[source] E),
}
