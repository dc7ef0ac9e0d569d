//! Atomic replaced-content view: painting, hit-testing, tooltips.
//!
//! [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
//!
//! A replaced element has no internal text positions: the caret can land
//! just before it or just after it, never inside. Hit-testing therefore has
//! exactly two outcomes, split at the allocation's horizontal midpoint.

use std::fmt::Write as _;
use std::rc::Rc;

use boxwood_common::geometry::{Rect, Shape, to_rect};

use crate::content::ReplacedContent;
use crate::element::MarkupElement;
use crate::error::ViewError;
use crate::host::HostContainer;
use crate::layout::LayoutBox;
use crate::surface::{Color, FontSpec, Surface};
use crate::view::block::ClippingBlockView;
use crate::view::{Axis, Bias, HitPosition, View, ViewCore};

/// View for an atomic embedded object such as an image.
pub struct ReplacedContentView {
    inner: ClippingBlockView,
    /// The box's drawable payload; dropped entirely on detach so no binding
    /// outlives the view.
    content: Option<Rc<dyn ReplacedContent>>,
    /// `alt` attribute, read once at construction.
    alt: String,
    /// `title` attribute, read once at construction.
    title: String,
}

impl ReplacedContentView {
    /// Wrap a replaced-element layout box.
    #[must_use]
    pub fn new(core: ViewCore) -> Self {
        let content = core.layout().content_obj();
        let element = core.layout().element();
        let alt = element.attribute("alt").unwrap_or_default().to_string();
        let title = element.attribute("title").unwrap_or_default().to_string();
        Self {
            inner: ClippingBlockView::new(core),
            content,
            alt,
            title,
        }
    }

    /// The fallback text shown when image data is missing.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt
    }

    fn paint_highlights(&self, surface: &mut dyn Surface, allocation: Rect) {
        if let Some(container) = self.inner.core().container()
            && let Some(highlighter) = container.highlighter()
        {
            highlighter.paint_highlights(
                surface,
                self.start_offset()..self.end_offset(),
                allocation,
            );
        }
    }
}

impl View for ReplacedContentView {
    fn start_offset(&self) -> usize {
        self.inner.start_offset()
    }

    fn end_offset(&self) -> usize {
        self.inner.end_offset()
    }

    fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    fn preferred_span(&self, axis: Axis) -> f32 {
        self.inner.preferred_span(axis)
    }

    fn minimum_span(&self, axis: Axis) -> f32 {
        self.inner.minimum_span(axis)
    }

    fn maximum_span(&self, axis: Axis) -> f32 {
        self.inner.maximum_span(axis)
    }

    fn paint(&self, surface: &mut dyn Surface, allocation: Shape) -> Result<(), ViewError> {
        if !self.is_visible() {
            return Ok(());
        }
        let alloc = to_rect(allocation);
        self.paint_highlights(surface, alloc);

        let layout = self.inner.layout();
        layout.visual_context().apply(surface);
        layout.draw_background(surface);

        if let Some(content) = &self.content {
            let bounds = layout.absolute_bounds();
            let dest = Rect::new(
                bounds.x,
                bounds.y,
                layout.content_width(),
                layout.content_height(),
            );
            content.draw(surface, dest);

            // Image payload with no decoded data yet: show the alt text in
            // its place, inside the content box.
            if content.missing_image() && !self.alt.is_empty() {
                surface.set_font(FontSpec::FALLBACK);
                surface.set_color(Color::BLACK);
                surface.draw_text(&self.alt, dest.x + 2.0, dest.y + dest.height * 0.7);
            }
        }
        Ok(())
    }

    fn point_to_offset(&self, x: f32, _y: f32, allocation: Shape) -> HitPosition {
        let alloc = to_rect(allocation);
        if x < alloc.x + alloc.width / 2.0 {
            HitPosition {
                offset: self.start_offset(),
                bias: Bias::Forward,
            }
        } else {
            HitPosition {
                offset: self.end_offset(),
                bias: Bias::Backward,
            }
        }
    }

    fn offset_to_rect(
        &self,
        offset: usize,
        allocation: Shape,
        _bias: Bias,
    ) -> Result<Rect, ViewError> {
        let start = self.start_offset();
        let end = self.end_offset();
        if offset < start || offset > end {
            return Err(ViewError::OutOfRange { offset, start, end });
        }
        let mut rect = to_rect(allocation);
        if offset == end {
            rect.x += rect.width;
        }
        rect.width = 0.0;
        Ok(rect)
    }

    fn tooltip_text(&self, _x: f32, _y: f32, _allocation: Shape) -> Option<String> {
        let mut markup = String::new();
        if !self.title.is_empty() {
            let _ = write!(markup, "<b>{}</b><br>", self.title);
        }

        let element = self.inner.layout().element();
        if let Some(anchor) = element.anchor_attributes() {
            if let Some(title) = anchor.get("title")
                && !title.is_empty()
            {
                let _ = write!(markup, "<i>{title}</i><br>");
            }
            if let Some(href) = anchor.get("href")
                && !href.is_empty()
            {
                markup.push_str(href);
            }
        }

        if markup.is_empty() {
            None
        } else {
            Some(format!("<html>{markup}</html>"))
        }
    }

    fn view_at_point(&self, x: f32, y: f32, _allocation: Shape) -> Option<&dyn View> {
        if self.inner.layout().absolute_bounds().contains(x, y) {
            Some(self)
        } else {
            None
        }
    }

    fn attach(&mut self, container: Option<Rc<dyn HostContainer>>) {
        match container {
            Some(container) => {
                self.inner.attach(Some(Rc::clone(&container)));
                if let Some(content) = &self.content {
                    content.bind_container(container);
                }
            }
            None => {
                self.inner.attach(None);
                if let Some(content) = self.content.take() {
                    content.release_container();
                }
            }
        }
    }

    fn children(&self) -> &[Box<dyn View>] {
        self.inner.children()
    }
}
