//! Construction of view trees from analyzer-produced specs.

use std::cell::RefCell;
use std::rc::Rc;

use boxwood_core::document::{Analyzer, BoxDocument, ViewKind, ViewSpec};
use boxwood_core::view::block::ClippingBlockView;
use boxwood_core::view::box_view::BoxView;
use boxwood_core::view::replaced::ReplacedContentView;
use boxwood_core::view::viewport::ViewportRoot;
use boxwood_core::view::{View, ViewCore};

/// Builds view nodes from [`ViewSpec`] trees, one view per layout box.
///
/// The factory carries the analyzer and document handles so any
/// [`ViewKind::Viewport`] spec can be wired for relayout without global
/// state.
pub struct ViewFactory {
    analyzer: Rc<RefCell<dyn Analyzer>>,
    document: Rc<RefCell<dyn BoxDocument>>,
}

impl ViewFactory {
    /// Create a factory over the relayout collaborators.
    #[must_use]
    pub fn new(
        analyzer: Rc<RefCell<dyn Analyzer>>,
        document: Rc<RefCell<dyn BoxDocument>>,
    ) -> Self {
        Self { analyzer, document }
    }

    /// Build the view (and its subtree) a spec describes.
    #[must_use]
    pub fn create(&self, spec: &ViewSpec) -> Box<dyn View> {
        let core = self.build_core(spec);
        match spec.kind {
            ViewKind::Box => Box::new(BoxView::new(core)),
            ViewKind::Block => Box::new(ClippingBlockView::new(core)),
            ViewKind::Replaced => Box::new(ReplacedContentView::new(core)),
            ViewKind::Viewport => Box::new(self.wire_root(core)),
        }
    }

    /// Build a viewport root directly, regardless of the spec's kind tag.
    ///
    /// Hosts use this for the topmost spec so they keep a concrete root
    /// handle for resize delivery.
    #[must_use]
    pub fn create_root(&self, spec: &ViewSpec) -> ViewportRoot {
        self.wire_root(self.build_core(spec))
    }

    fn build_core(&self, spec: &ViewSpec) -> ViewCore {
        let children = spec
            .children
            .iter()
            .map(|child| self.create(child))
            .collect();
        ViewCore::new(Rc::clone(&spec.layout), spec.start, spec.end, children)
    }

    fn wire_root(&self, core: ViewCore) -> ViewportRoot {
        ViewportRoot::new(core, Rc::clone(&self.analyzer), Rc::clone(&self.document))
    }
}
