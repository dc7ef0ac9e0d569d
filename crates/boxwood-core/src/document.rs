//! Contracts toward the document model and the relayout collaborator.
//!
//! The document stores offset-addressed content and the current batch of
//! view-construction specifications. The analyzer (the relayout
//! collaborator) produces a fresh batch for a target dimension; the bridge
//! only issues the request and reacts to its result.

use std::rc::Rc;

use boxwood_common::geometry::Dimension;

use crate::layout::LayoutBox;

/// Which view node type a spec constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Presence-only box adapter (no painting of its own).
    Box,
    /// Block with overflow-aware clipping.
    Block,
    /// Atomic replaced content (image-like).
    Replaced,
    /// The single root bound to the scrollable viewport.
    Viewport,
}

/// Specification for one view node, produced by the analyzer.
///
/// One spec per layout box; specs form a tree mirroring the box tree, with
/// children in layout order and offset ranges nested inside the parent's.
#[derive(Clone)]
pub struct ViewSpec {
    /// View node type to construct.
    pub kind: ViewKind,
    /// Start of the document offset range (inclusive).
    pub start: usize,
    /// End of the document offset range (exclusive).
    pub end: usize,
    /// The layout box the view wraps.
    pub layout: Rc<dyn LayoutBox>,
    /// Child specs in layout order.
    pub children: Vec<ViewSpec>,
}

impl ViewSpec {
    /// Create a leaf spec.
    #[must_use]
    pub fn new(kind: ViewKind, start: usize, end: usize, layout: Rc<dyn LayoutBox>) -> Self {
        Self {
            kind,
            start,
            end,
            layout,
            children: Vec::new(),
        }
    }

    /// Attach child specs, in layout order.
    #[must_use]
    pub fn with_children(mut self, children: Vec<ViewSpec>) -> Self {
        self.children = children;
        self
    }
}

impl std::fmt::Debug for ViewSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewSpec")
            .field("kind", &self.kind)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// The offset-addressed document model hosting the view tree.
pub trait BoxDocument {
    /// Length of the document in offsets.
    fn len(&self) -> usize;

    /// True when the document holds no content.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the document's view-backing structure with a freshly
    /// produced batch of specs.
    fn replace_views(&mut self, specs: Vec<ViewSpec>);
}

/// The relayout collaborator.
///
/// Runs the external layout engine against a target dimension and returns
/// the ordered view specs for the resulting box tree. May be configured by
/// the implementor to run inline or deferred; the bridge only consumes the
/// synchronous result.
pub trait Analyzer {
    /// Lay the document out at `dimension`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the underlying engine cannot complete the
    /// layout pass; the previous view tree remains valid in that case.
    fn relayout(&mut self, dimension: Dimension) -> std::io::Result<Vec<ViewSpec>>;
}
