//! Replaced content payloads.
//!
//! [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
//!
//! A replaced element occupies a single box the text cursor cannot enter.
//! The payload is owned by the layout box; views bind it to the hosting
//! container while attached so content that finishes decoding late can still
//! request a repaint of the right surface.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use boxwood_common::geometry::Rect;
use boxwood_common::image::LoadedImage;

use crate::host::HostContainer;
use crate::surface::Surface;

/// Drawable payload of a replaced element.
pub trait ReplacedContent {
    /// Draw the content scaled into the destination rectangle.
    fn draw(&self, surface: &mut dyn Surface, dest: Rect);

    /// True for an image payload whose pixel data has not arrived yet.
    ///
    /// Non-image payloads always return false; the alt-text fallback only
    /// applies to images.
    fn missing_image(&self) -> bool {
        false
    }

    /// Bind the payload to the hosting container for repaint requests.
    fn bind_container(&self, container: Rc<dyn HostContainer>);

    /// Drop the container binding (the owning view was discarded).
    fn release_container(&self);
}

/// An image payload, possibly still waiting for decoded data.
pub struct ReplacedImage {
    image: RefCell<Option<Rc<LoadedImage>>>,
    /// Non-owning: a reclaimed container must not be kept alive by content.
    container: RefCell<Option<Weak<dyn HostContainer>>>,
}

impl ReplacedImage {
    /// Create an image payload, with or without decoded data.
    #[must_use]
    pub fn new(image: Option<LoadedImage>) -> Self {
        Self {
            image: RefCell::new(image.map(Rc::new)),
            container: RefCell::new(None),
        }
    }

    /// The decoded image data, when available.
    #[must_use]
    pub fn image(&self) -> Option<Rc<LoadedImage>> {
        self.image.borrow().clone()
    }

    /// Deliver decoded data after construction and ask the bound container,
    /// if any is still alive, to repaint.
    pub fn set_image(&self, image: LoadedImage) {
        *self.image.borrow_mut() = Some(Rc::new(image));
        if let Some(weak) = self.container.borrow().as_ref()
            && let Some(container) = weak.upgrade()
        {
            container.request_repaint();
        }
    }
}

impl std::fmt::Debug for ReplacedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplacedImage")
            .field("image", &self.image.borrow())
            .finish_non_exhaustive()
    }
}

impl ReplacedContent for ReplacedImage {
    fn draw(&self, surface: &mut dyn Surface, dest: Rect) {
        if let Some(image) = self.image.borrow().as_ref() {
            surface.draw_image(image, dest);
        }
    }

    fn missing_image(&self) -> bool {
        self.image.borrow().is_none()
    }

    fn bind_container(&self, container: Rc<dyn HostContainer>) {
        *self.container.borrow_mut() = Some(Rc::downgrade(&container));
    }

    fn release_container(&self) {
        *self.container.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ListSurface, SurfaceCommand};

    #[test]
    fn draw_without_data_emits_nothing() {
        let content = ReplacedImage::new(None);
        let mut surface = ListSurface::new();
        content.draw(&mut surface, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(surface.is_empty());
        assert!(content.missing_image());
    }

    #[test]
    fn draw_with_data_emits_image_command() {
        let content = ReplacedImage::new(Some(LoadedImage::new(1, 1, vec![0, 0, 0, 255])));
        let mut surface = ListSurface::new();
        let dest = Rect::new(2.0, 3.0, 10.0, 10.0);
        content.draw(&mut surface, dest);
        assert!(!content.missing_image());
        assert!(
            matches!(surface.commands(), [SurfaceCommand::DrawImage { dest: d, .. }] if *d == dest)
        );
    }
}
