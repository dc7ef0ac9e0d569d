//! Box-to-view bridge between a CSS layout engine and a text-widget
//! framework.
//!
//! # Scope
//!
//! This crate implements:
//! - **View Tree** - one view node per layout box: span queries, paint,
//!   pixel/offset hit-testing
//!   - [`view::box_view::BoxView`] - presence-only base adapter
//!   - [`view::block::ClippingBlockView`] - overflow-aware clipping per
//!     [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
//!   - [`view::replaced::ReplacedContentView`] - atomic replaced content
//!     with alt/tooltip support
//!   - [`view::viewport::ViewportRoot`] - the root bound to the scrollable
//!     viewport, driving relayout on resize
//! - **Collaborator Contracts** - narrow interfaces to the layout engine,
//!   the document model, the relayout analyzer, and the hosting widget
//! - **Recording Surface** - drawing commands captured in paint order
//!
//! # Out of Scope
//!
//! CSS parsing and layout (the engine computes the box tree), markup
//! serialization, mouse-event routing, font and color resolution, and image
//! decoding all live with external collaborators.
//!
//! # Threading
//!
//! Single-threaded by design: every operation runs on the UI thread and no
//! two of them may interleave, so there is no internal locking.

pub mod content;
pub mod document;
pub mod element;
pub mod error;
pub mod host;
pub mod layout;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use content::{ReplacedContent, ReplacedImage};
pub use document::{Analyzer, BoxDocument, ViewKind, ViewSpec};
pub use element::{AttributesMap, MarkupElement, SimpleElement};
pub use error::ViewError;
pub use host::{Highlighter, HostContainer, ListenerToken, ScrollViewport};
pub use layout::{LayoutBox, Overflow, VisualContext};
pub use surface::{ClippedSurface, Color, FontSpec, ListSurface, Surface, SurfaceCommand};
pub use view::block::ClippingBlockView;
pub use view::box_view::BoxView;
pub use view::replaced::ReplacedContentView;
pub use view::viewport::ViewportRoot;
pub use view::{Axis, Bias, HitPosition, View, ViewCore};
