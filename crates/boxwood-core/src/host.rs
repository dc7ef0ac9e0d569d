//! Contracts toward the hosting text-widget framework.
//!
//! The framework owns the editable text surface and the scrollable viewport
//! around it. The bridge reaches them only through these traits, so no view
//! ever depends on a concrete widget type.

use std::ops::Range;
use std::rc::Rc;

use boxwood_common::geometry::{Dimension, Rect};

use crate::surface::Surface;

/// Handle for a registered resize listener.
///
/// Registration returns a token; unregistration takes it back. There is no
/// hidden listener identity to leak: whoever holds the token owns the
/// subscription and must release it before rebinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerToken(pub u64);

/// The scrollable viewport around the hosting text surface.
pub trait ScrollViewport {
    /// Current visible extent of the viewport.
    fn extent(&self) -> Dimension;

    /// Register interest in resize events, returning the subscription token.
    fn add_resize_listener(&self) -> ListenerToken;

    /// Release a previously returned subscription token.
    fn remove_resize_listener(&self, token: ListenerToken);
}

/// The hosting editable text surface a view tree is attached to.
pub trait HostContainer {
    /// The scrollable viewport directly containing the text surface, when
    /// the surface is hosted inside one.
    fn viewport(&self) -> Option<Rc<dyn ScrollViewport>>;

    /// The host's selection-highlight painter, when one is installed.
    fn highlighter(&self) -> Option<Rc<dyn Highlighter>>;

    /// Ask the host to repaint the surface (late-arriving decoded content).
    fn request_repaint(&self);

    /// Tell the host that preferred sizes changed for the whole view tree,
    /// forcing a re-measurement.
    fn preferences_changed(&self);
}

/// Selection/highlight painting, owned by the host.
///
/// The bridge only forwards offset ranges; it never computes highlight
/// geometry itself.
pub trait Highlighter {
    /// Paint any active highlight layers covering `range` into `allocation`.
    fn paint_highlights(&self, surface: &mut dyn Surface, range: Range<usize>, allocation: Rect);
}
