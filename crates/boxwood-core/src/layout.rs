//! Contracts toward the external CSS layout engine.
//!
//! The engine owns the box tree and its geometry; the bridge consumes it
//! through the [`LayoutBox`] trait and never mutates it. Bounds read from a
//! box are valid only until the next layout pass starts, so views re-read
//! them on every operation instead of caching.

use std::rc::Rc;

use boxwood_common::geometry::Rect;
use boxwood_common::warning::warn_once;
use strum_macros::{Display, EnumString};

use crate::content::ReplacedContent;
use crate::element::MarkupElement;
use crate::surface::{Color, FontSpec, Surface};

/// [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
///
/// Per-box overflow policy along the horizontal axis. Every mode except
/// `visible` cuts content off at the box's bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Overflow {
    /// Content is rendered outside the box's bounds.
    #[default]
    Visible,
    /// Overflowing content is clipped.
    Hidden,
    /// Clipped, with scrolling affordances owned by the host.
    Scroll,
    /// Clipped when the content actually overflows.
    Auto,
}

impl Overflow {
    /// True when painting must be restricted to the box's own bounds.
    #[must_use]
    pub const fn clips(self) -> bool {
        !matches!(self, Self::Visible)
    }

    /// Parse the engine's overflow string, falling back to the CSS initial
    /// value (`visible`) for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn_once("CSS", &format!("unknown overflow mode '{value}', using 'visible'"));
            Self::Visible
        })
    }
}

/// Rendering context carried by a box: the color and font its content is
/// drawn with. Applied to a surface before the box's content is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualContext {
    /// Foreground color.
    pub color: Color,
    /// Font used for text content.
    pub font: FontSpec,
}

impl Default for VisualContext {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font: FontSpec::DEFAULT,
        }
    }
}

impl VisualContext {
    /// Update a surface's color and font state from this context.
    pub fn apply(&self, surface: &mut dyn Surface) {
        surface.set_color(self.color);
        surface.set_font(self.font);
    }
}

/// A single node of the externally computed box tree.
///
/// Implemented by the layout engine adapter. All geometry is absolute pixel
/// coordinates from a completed layout pass.
pub trait LayoutBox {
    /// Absolute pixel bounds of the box.
    fn absolute_bounds(&self) -> Rect;

    /// True when the box has a visible area on the canvas.
    fn is_visible(&self) -> bool;

    /// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    ///
    /// True when `visibility` computes to `visible` for the box.
    fn is_declared_visible(&self) -> bool;

    /// True when `display` does not compute to `none` for the box.
    fn is_displayed(&self) -> bool;

    /// The engine's `overflow-x` value as a raw string (see [`Overflow::parse`]).
    fn overflow_x(&self) -> &str;

    /// Smallest width at which the current layout remains valid.
    fn minimal_width(&self) -> f32;

    /// Largest width at which the current layout remains valid.
    fn maximal_width(&self) -> f32;

    /// Rendering context (color, font) for the box's content.
    fn visual_context(&self) -> VisualContext;

    /// Paint the box's background onto the surface.
    fn draw_background(&self, surface: &mut dyn Surface);

    /// Width of the content area.
    fn content_width(&self) -> f32;

    /// Height of the content area.
    fn content_height(&self) -> f32;

    /// Embedded replaced content, when the box is a replaced element.
    fn content_obj(&self) -> Option<Rc<dyn ReplacedContent>>;

    /// The markup element this box was generated from.
    fn element(&self) -> Rc<dyn MarkupElement>;
}
