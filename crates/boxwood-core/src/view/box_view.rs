//! Base box adapter: presence and span queries, no painting.

use std::rc::Rc;

use boxwood_common::geometry::Shape;

use crate::error::ViewError;
use crate::host::HostContainer;
use crate::layout::LayoutBox;
use crate::surface::Surface;
use crate::view::{Axis, View, ViewCore};

/// Wraps one layout box and answers layout-span queries for it.
///
/// A hidden box contributes zero span along both axes so it takes no room
/// in the hosting widget; otherwise spans derive from the box's computed
/// geometry and its admissible width range. This view makes only
/// presence/absence decisions and never paints content itself.
pub struct BoxView {
    core: ViewCore,
}

impl BoxView {
    /// Wrap a layout box.
    #[must_use]
    pub fn new(core: ViewCore) -> Self {
        Self { core }
    }

    /// Shared node state.
    #[must_use]
    pub fn core(&self) -> &ViewCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    /// Span of the box's rendered content along `axis`, ignoring visibility.
    pub(crate) fn content_span(&self, axis: Axis) -> f32 {
        let bounds = self.core.layout().absolute_bounds();
        match axis {
            Axis::Horizontal => bounds.width,
            Axis::Vertical => bounds.height,
        }
    }

    /// Minimum span ignoring visibility: the smallest admissible width
    /// horizontally, the laid-out height vertically.
    pub(crate) fn min_content_span(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.core.layout().minimal_width(),
            Axis::Vertical => self.core.layout().absolute_bounds().height,
        }
    }

    /// Maximum span ignoring visibility: the largest admissible width
    /// horizontally, the laid-out height vertically.
    pub(crate) fn max_content_span(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.core.layout().maximal_width(),
            Axis::Vertical => self.core.layout().absolute_bounds().height,
        }
    }
}

impl View for BoxView {
    fn start_offset(&self) -> usize {
        self.core.start()
    }

    fn end_offset(&self) -> usize {
        self.core.end()
    }

    fn is_visible(&self) -> bool {
        self.core.layout().is_visible()
    }

    fn preferred_span(&self, axis: Axis) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.content_span(axis)
    }

    fn minimum_span(&self, axis: Axis) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.min_content_span(axis)
    }

    fn maximum_span(&self, axis: Axis) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.max_content_span(axis)
    }

    fn paint(&self, _surface: &mut dyn Surface, _allocation: Shape) -> Result<(), ViewError> {
        // Presence only. Painting belongs to block-level subclasses.
        Ok(())
    }

    fn attach(&mut self, container: Option<Rc<dyn HostContainer>>) {
        self.core.attach(container);
    }

    fn children(&self) -> &[Box<dyn View>] {
        self.core.children()
    }
}
