//! The view tree bridging layout boxes to the text widget.
//!
//! One view node per layout box, created together and discarded together at
//! the next relayout. A view addresses a half-open offset range in the
//! document and is granted an allocation shape by its parent during paint.
//! Geometry always comes fresh from the layout box; nothing here caches
//! bounds across a layout pass.

pub mod block;
pub mod box_view;
pub mod replaced;
pub mod viewport;

use std::rc::Rc;

use boxwood_common::geometry::{Rect, Shape, to_rect};

use crate::error::ViewError;
use crate::host::HostContainer;
use crate::layout::LayoutBox;
use crate::surface::Surface;

/// Layout axis for span queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// Which side of an offset a caret leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// The caret sits just before the content at the offset.
    Forward,
    /// The caret sits just after the content preceding the offset.
    Backward,
}

/// Result of a pixel-to-offset hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPosition {
    /// The document offset hit.
    pub offset: usize,
    /// Caret bias at that offset.
    pub bias: Bias,
}

/// A node in the view tree.
///
/// Operations all run on the UI thread; no view is touched concurrently.
pub trait View {
    /// Start of the view's document offset range (inclusive).
    fn start_offset(&self) -> usize;

    /// End of the view's document offset range (exclusive).
    fn end_offset(&self) -> usize;

    /// Whether the view takes part in painting at all.
    fn is_visible(&self) -> bool;

    /// The span the view would like along `axis`. Zero when hidden.
    fn preferred_span(&self, axis: Axis) -> f32;

    /// The smallest acceptable span along `axis`. Zero when hidden.
    fn minimum_span(&self, axis: Axis) -> f32;

    /// The largest acceptable span along `axis`. Zero when hidden.
    fn maximum_span(&self, axis: Axis) -> f32;

    /// Paint the view into its allocation.
    ///
    /// # Errors
    ///
    /// [`ViewError::UnsupportedSurface`] when the surface lacks a required
    /// capability; errors from children propagate unchanged.
    fn paint(&self, surface: &mut dyn Surface, allocation: Shape) -> Result<(), ViewError>;

    /// Map a pixel position inside the allocation to a document offset.
    fn point_to_offset(&self, x: f32, y: f32, allocation: Shape) -> HitPosition {
        let _ = (x, y, allocation);
        HitPosition {
            offset: self.start_offset(),
            bias: Bias::Forward,
        }
    }

    /// Map a document offset to a caret rectangle inside the allocation.
    ///
    /// # Errors
    ///
    /// [`ViewError::OutOfRange`] when `offset` lies outside
    /// `[start_offset, end_offset]`.
    fn offset_to_rect(&self, offset: usize, allocation: Shape, bias: Bias) -> Result<Rect, ViewError> {
        let _ = bias;
        let start = self.start_offset();
        let end = self.end_offset();
        if offset < start || offset > end {
            return Err(ViewError::OutOfRange { offset, start, end });
        }
        let mut rect = to_rect(allocation);
        rect.width = 0.0;
        Ok(rect)
    }

    /// Tooltip markup for a pointer position, when the view has any.
    fn tooltip_text(&self, x: f32, y: f32, allocation: Shape) -> Option<String> {
        let _ = (x, y, allocation);
        None
    }

    /// The deepest view under the pointer, when this view claims the point.
    fn view_at_point(&self, x: f32, y: f32, allocation: Shape) -> Option<&dyn View> {
        let _ = (x, y, allocation);
        None
    }

    /// Attach the view (and its subtree) to a hosting container, or detach
    /// with `None`.
    fn attach(&mut self, container: Option<Rc<dyn HostContainer>>);

    /// Child views in layout order.
    fn children(&self) -> &[Box<dyn View>];
}

/// State shared by every view node: the wrapped box, the offset range,
/// children, and the hosting container while attached.
pub struct ViewCore {
    layout: Rc<dyn LayoutBox>,
    start: usize,
    end: usize,
    children: Vec<Box<dyn View>>,
    container: Option<Rc<dyn HostContainer>>,
}

impl ViewCore {
    /// Create the shared node state.
    ///
    /// Children must be in layout order, with offset ranges nested inside
    /// `[start, end)` and non-overlapping among siblings.
    #[must_use]
    pub fn new(
        layout: Rc<dyn LayoutBox>,
        start: usize,
        end: usize,
        children: Vec<Box<dyn View>>,
    ) -> Self {
        debug_assert!(start <= end);
        debug_assert!(
            children
                .iter()
                .all(|c| c.start_offset() >= start && c.end_offset() <= end),
            "child offset ranges must nest inside the parent's"
        );
        debug_assert!(
            children
                .windows(2)
                .all(|pair| pair[0].end_offset() <= pair[1].start_offset()),
            "sibling offset ranges must not overlap"
        );
        Self {
            layout,
            start,
            end,
            children,
            container: None,
        }
    }

    /// The wrapped layout box.
    #[must_use]
    pub fn layout(&self) -> &Rc<dyn LayoutBox> {
        &self.layout
    }

    /// Start offset (inclusive).
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Children in layout order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn View>] {
        &self.children
    }

    /// The hosting container while attached.
    #[must_use]
    pub fn container(&self) -> Option<&Rc<dyn HostContainer>> {
        self.container.as_ref()
    }

    /// Store the container and fan the attachment out to children.
    pub fn attach(&mut self, container: Option<Rc<dyn HostContainer>>) {
        for child in &mut self.children {
            child.attach(container.clone());
        }
        self.container = container;
    }

    /// Paint every child with the given region as its allocation.
    ///
    /// # Errors
    ///
    /// Propagates the first child paint error.
    pub fn paint_children(&self, surface: &mut dyn Surface, region: Rect) -> Result<(), ViewError> {
        for child in &self.children {
            child.paint(surface, Shape::Rect(region))?;
        }
        Ok(())
    }
}
