//! The bridge kit: ties an analyzer and a document together for a host.

use std::cell::RefCell;
use std::rc::Rc;

use boxwood_common::geometry::Dimension;
use boxwood_common::warning::clear_warnings;
use boxwood_core::document::{Analyzer, BoxDocument, ViewSpec};
use boxwood_core::error::ViewError;
use boxwood_core::view::viewport::ViewportRoot;

use crate::factory::ViewFactory;

/// Host entry point for loading and relaying out a document.
///
/// The analyzer is injected at construction; a host decides which layout
/// engine to use and the kit never consults any global configuration.
pub struct BridgeKit {
    analyzer: Rc<RefCell<dyn Analyzer>>,
    document: Rc<RefCell<dyn BoxDocument>>,
}

impl BridgeKit {
    /// Create a kit over a caller-supplied analyzer and document.
    #[must_use]
    pub fn new(
        analyzer: Rc<RefCell<dyn Analyzer>>,
        document: Rc<RefCell<dyn BoxDocument>>,
    ) -> Self {
        Self { analyzer, document }
    }

    /// The relayout collaborator handle.
    #[must_use]
    pub fn analyzer(&self) -> Rc<RefCell<dyn Analyzer>> {
        Rc::clone(&self.analyzer)
    }

    /// The document model handle.
    #[must_use]
    pub fn document(&self) -> Rc<RefCell<dyn BoxDocument>> {
        Rc::clone(&self.document)
    }

    /// Lay the document out at `dimension` and replace its view backing.
    ///
    /// This is the same path the viewport root takes on resize; hosts call
    /// it directly for the initial layout.
    ///
    /// # Errors
    ///
    /// [`ViewError::Relayout`] when the analyzer's layout pass fails; the
    /// document keeps its previous view backing.
    pub fn update(&self, dimension: Dimension) -> Result<(), ViewError> {
        let specs = self.analyzer.borrow_mut().relayout(dimension)?;
        // A fresh layout pass may legitimately re-trigger conditions we
        // have warned about before.
        clear_warnings();
        self.document.borrow_mut().replace_views(specs);
        Ok(())
    }

    /// A view factory wired to this kit's analyzer and document.
    #[must_use]
    pub fn factory(&self) -> ViewFactory {
        ViewFactory::new(Rc::clone(&self.analyzer), Rc::clone(&self.document))
    }

    /// Build the root view for the topmost spec.
    #[must_use]
    pub fn create_root(&self, spec: &ViewSpec) -> ViewportRoot {
        self.factory().create_root(spec)
    }
}
