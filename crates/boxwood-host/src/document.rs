//! In-memory document model backing the view tree.

use boxwood_core::document::{BoxDocument, ViewSpec};

/// Offset-addressed document storing the current view-spec batch.
///
/// Each relayout replaces the whole batch; the document's length follows
/// the largest end offset in the batch.
#[derive(Default)]
pub struct InMemoryDocument {
    length: usize,
    specs: Vec<ViewSpec>,
}

impl InMemoryDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view-spec batch, in layout order.
    #[must_use]
    pub fn specs(&self) -> &[ViewSpec] {
        &self.specs
    }
}

impl BoxDocument for InMemoryDocument {
    fn len(&self) -> usize {
        self.length
    }

    fn replace_views(&mut self, specs: Vec<ViewSpec>) {
        self.length = specs.iter().map(|spec| spec.end).max().unwrap_or(0);
        self.specs = specs;
    }
}
