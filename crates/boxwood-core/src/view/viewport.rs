//! The root view bound to the hosting scrollable viewport.
//!
//! Owns the only live relationship between the view tree and the framework:
//! a resize subscription on the viewport around the text surface. Resize
//! events flow in here, and when the new extent actually invalidates the
//! current layout, a relayout request flows back out to the analyzer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use boxwood_common::geometry::{Dimension, Shape, intersect, to_rect};
use boxwood_common::warning::warn_once;

use crate::document::{Analyzer, BoxDocument};
use crate::error::ViewError;
use crate::host::{HostContainer, ListenerToken, ScrollViewport};
use crate::layout::LayoutBox;
use crate::surface::{ClippedSurface, Surface};
use crate::view::block::ClippingBlockView;
use crate::view::{Axis, View, ViewCore};

/// The live relation from the root to the hosting viewport.
///
/// At most one registration exists at a time; rebinding always releases the
/// old token first. The reference is weak so a viewport reclaimed by the
/// framework lapses to empty instead of dangling.
struct ViewportBinding {
    viewport: Weak<dyn ScrollViewport>,
    token: ListenerToken,
}

/// The single root view attached directly to the editable surface.
///
/// Two states: *Unbound* (no viewport relationship) and *Bound* (listening
/// for resize on one specific viewport). Attachment drives the transitions;
/// resize events drive relayout through [`ViewportRoot::check_size`].
pub struct ViewportRoot {
    inner: ClippingBlockView,
    binding: Option<ViewportBinding>,
    /// Extent of the last relayout request, so repeated resize events with
    /// an unchanged extent do nothing.
    last_extent: Dimension,
    analyzer: Rc<RefCell<dyn Analyzer>>,
    document: Rc<RefCell<dyn BoxDocument>>,
}

impl ViewportRoot {
    /// Create the root over the engine's viewport box.
    ///
    /// The analyzer and document are supplied by the caller; there is no
    /// global configuration to consult.
    #[must_use]
    pub fn new(
        core: ViewCore,
        analyzer: Rc<RefCell<dyn Analyzer>>,
        document: Rc<RefCell<dyn BoxDocument>>,
    ) -> Self {
        Self {
            inner: ClippingBlockView::new(core),
            binding: None,
            last_extent: Dimension::ZERO,
            analyzer,
            document,
        }
    }

    /// True while a resize listener is registered on a live viewport.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.viewport.upgrade().is_some())
    }

    /// Bind to the container's viewport, releasing any previous binding
    /// that points elsewhere. Binding twice to the same live viewport is a
    /// no-op, so exactly one listener registration exists.
    fn hook(&mut self, container: &Rc<dyn HostContainer>) {
        let Some(viewport) = container.viewport() else {
            self.unhook();
            return;
        };

        if let Some(binding) = self.binding.take() {
            match binding.viewport.upgrade() {
                Some(bound) if std::ptr::addr_eq(Rc::as_ptr(&bound), Rc::as_ptr(&viewport)) => {
                    // Already bound to this viewport; keep the registration.
                    self.binding = Some(binding);
                    return;
                }
                Some(bound) => bound.remove_resize_listener(binding.token),
                None => warn_once("Viewport", "bound viewport was reclaimed, rebinding"),
            }
        }

        let token = viewport.add_resize_listener();
        self.binding = Some(ViewportBinding {
            viewport: Rc::downgrade(&viewport),
            token,
        });
    }

    /// Release the binding. Safe to call when already unbound.
    fn unhook(&mut self) {
        if let Some(binding) = self.binding.take()
            && let Some(viewport) = binding.viewport.upgrade()
        {
            viewport.remove_resize_listener(binding.token);
        }
    }

    /// Resize event entry point, called by the framework adapter when the
    /// bound viewport changes size.
    pub fn viewport_resized(&mut self, extent: Dimension) {
        let _ = self.check_size(extent);
    }

    /// Decide whether a new viewport extent warrants a relayout, and run
    /// one when it does. Returns true when a new layout was produced.
    ///
    /// No relayout happens for a transient zero extent, for an extent equal
    /// to the last one requested, or for a width at which the current box
    /// tree is already known to fit (inside the box's admissible width
    /// range). A failed relayout is surfaced as a warning and leaves the
    /// previous layout in place; no preference notification fires.
    pub fn check_size(&mut self, extent: Dimension) -> bool {
        if extent.width == 0.0 || extent.height == 0.0 {
            return false;
        }
        if extent == self.last_extent {
            return false;
        }
        let (min_width, max_width) = {
            let layout = self.inner.layout();
            (layout.minimal_width(), layout.maximal_width())
        };
        if extent.width <= min_width || extent.width >= max_width {
            return false;
        }

        self.last_extent = extent;
        match self.relayout(extent) {
            Ok(()) => {
                if let Some(container) = self.inner.core().container() {
                    container.preferences_changed();
                }
                true
            }
            Err(err) => {
                warn_once("Viewport", &format!("{err}"));
                false
            }
        }
    }

    /// Run the relayout collaborator at `extent` and replace the document's
    /// view backing with the produced specs.
    ///
    /// # Errors
    ///
    /// [`ViewError::Relayout`] when the analyzer's layout pass fails; the
    /// document is left untouched in that case.
    pub fn relayout(&mut self, extent: Dimension) -> Result<(), ViewError> {
        let specs = self.analyzer.borrow_mut().relayout(extent)?;
        self.document.borrow_mut().replace_views(specs);
        Ok(())
    }
}

impl View for ViewportRoot {
    fn start_offset(&self) -> usize {
        self.inner.start_offset()
    }

    fn end_offset(&self) -> usize {
        self.inner.end_offset()
    }

    /// The root always participates in painting and layout, whatever its
    /// content box reports: it must keep receiving events to recover.
    fn is_visible(&self) -> bool {
        true
    }

    fn preferred_span(&self, axis: Axis) -> f32 {
        let bounds = self.inner.layout().absolute_bounds();
        match axis {
            Axis::Horizontal => bounds.width,
            Axis::Vertical => bounds.height,
        }
    }

    fn minimum_span(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.inner.layout().minimal_width(),
            Axis::Vertical => self.inner.layout().absolute_bounds().height,
        }
    }

    fn maximum_span(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.inner.layout().maximal_width(),
            Axis::Vertical => self.inner.layout().absolute_bounds().height,
        }
    }

    /// Paint with one combined clip for the whole subtree.
    ///
    /// The combined clip is the intersection of the incoming allocation,
    /// the root box's absolute bounds, and the surface's current clip.
    /// Children receive it once as their allocation and handle any finer
    /// clipping themselves; the original clip is restored afterward.
    fn paint(&self, surface: &mut dyn Surface, allocation: Shape) -> Result<(), ViewError> {
        let alloc = to_rect(allocation);
        let bounds = self.inner.layout().absolute_bounds();

        let Some(clipped) = surface.as_clipped() else {
            return Err(ViewError::UnsupportedSurface);
        };

        let old_clip = clipped.clip();
        let mut combined = intersect(alloc, bounds);
        if let Some(clip) = old_clip {
            combined = intersect(combined, clip);
        }
        clipped.set_clip(Some(combined));

        let layout = self.inner.layout();
        layout.visual_context().apply(&mut *clipped);
        layout.draw_background(&mut *clipped);

        let result = self.inner.core().paint_children(&mut *clipped, combined);
        clipped.set_clip(old_clip);
        result
    }

    fn attach(&mut self, container: Option<Rc<dyn HostContainer>>) {
        match container {
            Some(container) => {
                self.inner.attach(Some(Rc::clone(&container)));
                self.hook(&container);
            }
            None => {
                self.unhook();
                self.inner.attach(None);
            }
        }
    }

    fn children(&self) -> &[Box<dyn View>] {
        self.inner.children()
    }
}
