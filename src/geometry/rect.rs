/// A 2D screen-space rectangle stored as its top-left and bottom-right
/// corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle2D {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl Rectangle2D {
    /// Creates a rectangle from its top-left `(x0, y0)` and bottom-right
    /// `(x1, y1)` corners.
    #[must_use]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Left edge (`x0`).
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x0
    }

    /// Right edge (`x1`).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x1
    }

    /// Top edge (`y0`).
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y0
    }

    /// Bottom edge (`y1`).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y1
    }

    /// Horizontal extent, `right - left`.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Vertical extent, `bottom - top`.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Signed area, `width * height`.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

impl Default for Rectangle2D {
    /// The device-coordinate square `[-1, 1] x [-1, 1]`.
    fn default() -> Self {
        Self::new(-1.0, -1.0, 1.0, 1.0)
    }
}
