//! Error taxonomy for the box-to-view bridge.
//!
//! Only an unsupported drawing surface is unrecoverable; everything else
//! either propagates to the caller (`OutOfRange`) or is surfaced and
//! recovered locally (`Relayout`, see the viewport root).

use thiserror::Error;

/// Errors produced by view-tree operations.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A document offset outside the view's valid span was requested.
    #[error("offset {offset} not in range {start}..{end}")]
    OutOfRange {
        /// The requested document offset.
        offset: usize,
        /// Start of the view's valid span (inclusive).
        start: usize,
        /// End of the view's valid span (inclusive for caret queries).
        end: usize,
    },

    /// Paint was invoked with a surface lacking clipped 2D drawing support.
    ///
    /// Fatal configuration error: the root cannot paint without clip state,
    /// so no partial paint is attempted.
    #[error("drawing surface does not support clipped 2D painting")]
    UnsupportedSurface,

    /// The relayout collaborator reported an I/O failure.
    ///
    /// The view tree stays usable at its last good layout; the failure is
    /// reported rather than silently dropped.
    #[error("relayout failed: {0}")]
    Relayout(#[from] std::io::Error),
}
