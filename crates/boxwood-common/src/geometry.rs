//! Rectangle and dimension math shared by every paint path.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! All helpers here are pure functions returning new values. Paint code at
//! every level of the view tree funnels its clip arithmetic through these so
//! that no two call sites duplicate (or subtly disagree on) intersection
//! logic, and no scratch rectangle is ever shared between nested paint calls.

/// A rectangle positioned in 2D space, in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const EMPTY: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a rectangle from position and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle encloses no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the point lies inside the rectangle.
    ///
    /// The top and left edges are inclusive, the bottom and right edges
    /// exclusive, so adjacent rectangles never both claim a boundary point.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A width/height extent, e.g. the visible size of a scrollable viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimension {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Dimension {
    /// The zero extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a dimension from width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An allocation shape granted by a parent view.
///
/// Parents hand children a region to render into. In practice that region is
/// almost always a plain rectangle; a non-rectangular outline (a partially
/// scrolled-in region, for instance) is carried by its bounding rectangle and
/// reduced with [`to_rect`] before any clip arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A rectangular allocation.
    Rect(Rect),
    /// An arbitrary outline, represented by its bounding rectangle.
    Outline(Rect),
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

/// Normalize an allocation shape to its rectangular bounds.
#[must_use]
pub const fn to_rect(shape: Shape) -> Rect {
    match shape {
        Shape::Rect(rect) | Shape::Outline(rect) => rect,
    }
}

/// Intersect two rectangles.
///
/// Returns the overlapping region, or [`Rect::EMPTY`] when the inputs are
/// disjoint. The operation is commutative and the result is always contained
/// in both inputs.
#[must_use]
pub fn intersect(a: Rect, b: Rect) -> Rect {
    let x1 = a.x.max(b.x);
    let y1 = a.y.max(b.y);
    let x2 = a.right().min(b.right());
    let y2 = a.bottom().min(b.bottom());

    if x2 <= x1 || y2 <= y1 {
        return Rect::EMPTY;
    }
    Rect::new(x1, y1, x2 - x1, y2 - y1)
}
