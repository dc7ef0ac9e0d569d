//! Drawing surface contracts and the recording surface.
//!
//! Views paint through the [`Surface`] trait; the clip-capable subset needed
//! by the viewport root is the [`ClippedSurface`] capability, resolved once
//! at the start of a paint pass instead of by runtime type inspection at
//! every call site.
//!
//! [`ListSurface`] records drawing commands in paint order, display-list
//! style. Hosts execute the recorded commands against a real canvas (see the
//! host crate's rasterizer); tests inspect them to observe exact paint
//! behavior.

use std::rc::Rc;

use boxwood_common::geometry::Rect;
use boxwood_common::image::LoadedImage;

/// An RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create an opaque-or-not color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font selection for text drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Font size in pixels.
    pub size: f32,
    /// Bold variant.
    pub bold: bool,
    /// Italic variant.
    pub italic: bool,
}

impl FontSpec {
    /// The default text font.
    pub const DEFAULT: Self = Self {
        size: 16.0,
        bold: false,
        italic: false,
    };

    /// Small plain font used for replaced-content fallback text.
    pub const FALLBACK: Self = Self {
        size: 13.0,
        bold: false,
        italic: false,
    };
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Basic 2D drawing operations a view paints with.
pub trait Surface {
    /// Set the current foreground color.
    fn set_color(&mut self, color: Color);

    /// Set the current font.
    fn set_font(&mut self, font: FontSpec);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw decoded image data scaled into a destination rectangle.
    fn draw_image(&mut self, image: &Rc<LoadedImage>, dest: Rect);

    /// Draw text with the current font and color, `(x, y)` at the top-left
    /// of the first glyph cell.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// The clip-capable view of this surface, when it has one.
    ///
    /// Painting a view tree requires clip support at the root; a surface
    /// returning `None` here cannot host the bridge.
    fn as_clipped(&mut self) -> Option<&mut dyn ClippedSurface> {
        None
    }
}

/// A surface that supports rectangular clipping.
pub trait ClippedSurface: Surface {
    /// The current clip rectangle, `None` when unconstrained.
    fn clip(&self) -> Option<Rect>;

    /// Replace the current clip rectangle.
    fn set_clip(&mut self, clip: Option<Rect>);
}

/// A single recorded drawing command.
///
/// Commands appear in paint order (back to front). Text and clip commands
/// carry the surface state current at record time so execution needs no
/// state replay.
#[derive(Debug, Clone)]
pub enum SurfaceCommand {
    /// Foreground color change.
    SetColor(Color),
    /// Font change.
    SetFont(FontSpec),
    /// Solid rectangle fill.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Image draw, scaled to the destination rectangle.
    DrawImage {
        /// Decoded source pixels.
        image: Rc<LoadedImage>,
        /// Destination rectangle.
        dest: Rect,
    },
    /// Text draw.
    DrawText {
        /// The text content.
        text: String,
        /// X coordinate of the first glyph cell.
        x: f32,
        /// Y coordinate of the text's top edge.
        y: f32,
        /// Font current when the text was recorded.
        font: FontSpec,
        /// Color current when the text was recorded.
        color: Color,
    },
    /// Clip rectangle change (`None` clears the clip).
    SetClip(Option<Rect>),
}

/// A recording surface that stores commands in paint order.
#[derive(Debug)]
pub struct ListSurface {
    commands: Vec<SurfaceCommand>,
    color: Color,
    font: FontSpec,
    clip: Option<Rect>,
}

impl ListSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            color: Color::BLACK,
            font: FontSpec::DEFAULT,
            clip: None,
        }
    }

    /// The recorded commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Consume the surface, returning the recorded commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<SurfaceCommand> {
        self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for ListSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ListSurface {
    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(SurfaceCommand::SetColor(color));
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
        self.commands.push(SurfaceCommand::SetFont(font));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(SurfaceCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &Rc<LoadedImage>, dest: Rect) {
        self.commands.push(SurfaceCommand::DrawImage {
            image: Rc::clone(image),
            dest,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::DrawText {
            text: text.to_string(),
            x,
            y,
            font: self.font,
            color: self.color,
        });
    }

    fn as_clipped(&mut self) -> Option<&mut dyn ClippedSurface> {
        Some(self)
    }
}

impl ClippedSurface for ListSurface {
    fn clip(&self) -> Option<Rect> {
        self.clip
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
        self.commands.push(SurfaceCommand::SetClip(clip));
    }
}
