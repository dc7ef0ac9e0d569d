//! Software rasterizer for recorded surface commands.
//!
//! Executes the command list produced by a `ListSurface` paint pass onto an
//! RGBA pixel buffer, honoring the recorded clip state. The rasterizer
//! knows nothing about boxes or views; it only executes drawing commands.
//!
//! ```text
//! View tree → ListSurface → SurfaceCommands → Pixels
//! ```

use anyhow::Result;
use fontdue::{Font, FontSettings};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use boxwood_common::geometry::Rect;
use boxwood_common::image::LoadedImage;
use boxwood_core::surface::{Color, SurfaceCommand};

/// Common system font paths to search for a default font, used for
/// replaced-content fallback text.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Executes recorded surface commands to a pixel buffer.
pub struct Rasterizer {
    /// RGBA pixel buffer
    buffer: RgbaImage,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Active clip rectangle from the command stream
    clip: Option<Rect>,
    /// Font for text commands (None if no system font was found)
    font: Option<Font>,
}

impl Rasterizer {
    /// Create a rasterizer with the given dimensions and a white canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        let font = load_system_font();
        if font.is_none() {
            eprintln!("Warning: No system font found. Text will not be rendered.");
        }
        Self {
            buffer,
            width,
            height,
            clip: None,
            font,
        }
    }

    /// Execute a command list in paint order.
    pub fn run(&mut self, commands: &[SurfaceCommand]) {
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: &SurfaceCommand) {
        match command {
            // Fill/text commands carry their own color and font state.
            SurfaceCommand::SetColor(_) | SurfaceCommand::SetFont(_) => {}
            SurfaceCommand::SetClip(clip) => self.clip = *clip,
            SurfaceCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
            SurfaceCommand::DrawImage { image, dest } => self.draw_image(image, *dest),
            SurfaceCommand::DrawText {
                text,
                x,
                y,
                font,
                color,
            } => self.draw_text(text, *x, *y, font.size, *color),
        }
    }

    /// The rendered pixel buffer.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// The RGBA value at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.buffer.get_pixel(x, y).0)
    }

    /// Save the rendered canvas to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be written to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save(path)
            .map_err(|e| anyhow::anyhow!("failed to save canvas to '{}': {e}", path.display()))?;
        Ok(())
    }

    /// True when the pixel center lies inside the active clip.
    #[allow(clippy::cast_precision_loss)]
    fn clip_allows(&self, px: u32, py: u32) -> bool {
        self.clip
            .is_none_or(|clip| clip.contains(px as f32 + 0.5, py as f32 + 0.5))
    }

    /// Blend one pixel, honoring canvas bounds and the active clip.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn blend_pixel(&mut self, px: i64, py: i64, rgba: Rgba<u8>, alpha: u8) {
        if px < 0 || py < 0 {
            return;
        }
        let (ux, uy) = (px as u32, py as u32);
        if ux >= self.width || uy >= self.height || !self.clip_allows(ux, uy) {
            return;
        }
        if alpha == 0 {
            return;
        }
        if alpha == 255 && rgba[3] == 255 {
            self.buffer.put_pixel(ux, uy, rgba);
        } else {
            let bg = *self.buffer.get_pixel(ux, uy);
            let effective = u16::from(alpha) * u16::from(rgba[3]) / 255;
            #[allow(clippy::cast_possible_truncation)]
            let blended = alpha_blend(rgba, bg, effective as u8);
            self.buffer.put_pixel(ux, uy, blended);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rgba = Rgba([color.r, color.g, color.b, color.a]);
        let x0 = rect.x.floor() as i64;
        let y0 = rect.y.floor() as i64;
        let x1 = rect.right().ceil() as i64;
        let y1 = rect.bottom().ceil() as i64;

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, rgba, 255);
            }
        }
    }

    /// Draw an image scaled to the destination rectangle with
    /// nearest-neighbor sampling.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_image(&mut self, img: &LoadedImage, dest: Rect) {
        let dest_x = dest.x as i64;
        let dest_y = dest.y as i64;
        let dest_w = dest.width as u32;
        let dest_h = dest.height as u32;
        let src_w = img.width();
        let src_h = img.height();

        if src_w == 0 || src_h == 0 || dest_w == 0 || dest_h == 0 {
            return;
        }

        for dy in 0..dest_h {
            for dx in 0..dest_w {
                let sx = ((u64::from(dx) * u64::from(src_w)) / u64::from(dest_w))
                    .min(u64::from(src_w) - 1) as u32;
                let sy = ((u64::from(dy) * u64::from(src_h)) / u64::from(dest_h))
                    .min(u64::from(src_h) - 1) as u32;
                let Some([r, g, b, a]) = img.pixel(sx, sy) else {
                    continue;
                };
                self.blend_pixel(
                    dest_x + i64::from(dx),
                    dest_y + i64::from(dy),
                    Rgba([r, g, b, 255]),
                    a,
                );
            }
        }
    }

    /// Draw text with `(x, y)` at the top-left of the first glyph cell.
    #[allow(clippy::cast_possible_truncation)]
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let Some(font) = self.font.clone() else {
            return;
        };

        let rgba = Rgba([color.r, color.g, color.b, color.a]);
        let mut cursor_x = x;

        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }

            let (metrics, bitmap) = font.rasterize(ch, font_size);
            let glyph_x = cursor_x as i64 + i64::from(metrics.xmin);
            let glyph_y =
                y as i64 + (font_size as i64 - i64::from(metrics.ymin) - metrics.height as i64);

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let alpha = bitmap[gy * metrics.width + gx];
                    self.blend_pixel(glyph_x + gx as i64, glyph_y + gy as i64, rgba, alpha);
                }
            }

            cursor_x += metrics.advance_width;
        }
    }
}

/// Try to load a default system font from well-known paths.
#[must_use]
pub fn load_system_font() -> Option<Font> {
    for path in FONT_SEARCH_PATHS {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = Font::from_bytes(data, FontSettings::default())
        {
            return Some(font);
        }
    }
    None
}

/// Alpha blend a foreground color onto a background color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0;
    let inv_a = 1.0 - a;

    Rgba([
        f32::from(fg[0]).mul_add(a, f32::from(bg[0]) * inv_a) as u8,
        f32::from(fg[1]).mul_add(a, f32::from(bg[1]) * inv_a) as u8,
        f32::from(fg[2]).mul_add(a, f32::from(bg[2]) * inv_a) as u8,
        255,
    ])
}
