//! Block view with overflow-aware clipping.
//!
//! [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)

use std::rc::Rc;

use boxwood_common::geometry::{Rect, Shape, intersect, to_rect};

use crate::error::ViewError;
use crate::host::HostContainer;
use crate::layout::{LayoutBox, Overflow};
use crate::surface::Surface;
use crate::view::box_view::BoxView;
use crate::view::{Axis, View, ViewCore};

/// A block-level view that realizes CSS overflow clipping.
///
/// Clipping is enforced once, at the block boundary: when overflow is not
/// `visible`, the paint region handed to the content painter is the
/// intersection of the box's own bounds with the incoming allocation, so
/// children need no overflow awareness of their own.
pub struct ClippingBlockView {
    inner: BoxView,
    /// Overflow mode, read once at construction. A changed overflow value
    /// always comes with a rebuilt view tree.
    overflow: Overflow,
}

impl ClippingBlockView {
    /// Wrap a block-level layout box.
    #[must_use]
    pub fn new(core: ViewCore) -> Self {
        let overflow = Overflow::parse(core.layout().overflow_x());
        Self {
            inner: BoxView::new(core),
            overflow,
        }
    }

    /// The wrapped layout box.
    #[must_use]
    pub fn layout(&self) -> &Rc<dyn LayoutBox> {
        self.inner.core().layout()
    }

    /// Shared node state.
    #[must_use]
    pub fn core(&self) -> &ViewCore {
        self.inner.core()
    }

    pub(crate) fn core_mut(&mut self) -> &mut ViewCore {
        self.inner.core_mut()
    }

    /// The overflow mode in effect for this block.
    #[must_use]
    pub const fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Compute the region content may paint into for a given allocation.
    ///
    /// `overflow: visible` leaves the allocation untouched; any clipping
    /// mode cuts it down to the box's own absolute bounds.
    #[must_use]
    pub fn paint_region(&self, allocation: Shape) -> Rect {
        let alloc = to_rect(allocation);
        if self.overflow.clips() {
            intersect(self.layout().absolute_bounds(), alloc)
        } else {
            alloc
        }
    }

    /// Paint background and children into an already computed region.
    pub(crate) fn paint_content(
        &self,
        surface: &mut dyn Surface,
        region: Rect,
    ) -> Result<(), ViewError> {
        self.layout().draw_background(surface);
        self.inner.core().paint_children(surface, region)
    }
}

impl View for ClippingBlockView {
    fn start_offset(&self) -> usize {
        self.inner.start_offset()
    }

    fn end_offset(&self) -> usize {
        self.inner.end_offset()
    }

    /// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    ///
    /// Stricter than the base adapter: `display` and `visibility` are
    /// distinct CSS mechanisms and both must allow the box to show.
    fn is_visible(&self) -> bool {
        let layout = self.layout();
        layout.is_displayed() && layout.is_declared_visible()
    }

    fn preferred_span(&self, axis: Axis) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.inner.content_span(axis)
    }

    fn minimum_span(&self, axis: Axis) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.inner.min_content_span(axis)
    }

    fn maximum_span(&self, axis: Axis) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        self.inner.max_content_span(axis)
    }

    fn paint(&self, surface: &mut dyn Surface, allocation: Shape) -> Result<(), ViewError> {
        if !self.is_visible() {
            return Ok(());
        }
        let region = self.paint_region(allocation);
        self.paint_content(surface, region)
    }

    fn attach(&mut self, container: Option<Rc<dyn HostContainer>>) {
        self.inner.attach(container);
    }

    fn children(&self) -> &[Box<dyn View>] {
        self.inner.children()
    }
}
