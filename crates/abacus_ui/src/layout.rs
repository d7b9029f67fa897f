//! Screen-space rectangles.

/// A rectangle in screen coordinates (points, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Radius of the largest circle centered in the rectangle.
    #[must_use]
    pub fn inscribed_radius(&self) -> f32 {
        self.width.min(self.height).max(0.0) * 0.5
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Expands the rectangle by the given amount on all sides.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        self.expand(-amount)
    }

    /// Square of side `height` flush with the left edge.
    #[must_use]
    pub fn leading_square(&self) -> Self {
        Self::new(self.x, self.y, self.height.min(self.width), self.height)
    }

    /// Square of side `height` flush with the right edge.
    #[must_use]
    pub fn trailing_square(&self) -> Self {
        let side = self.height.min(self.width);
        Self::new(self.right() - side, self.y, side, self.height)
    }

    /// Returns a copy with a different width, keeping the left edge.
    #[must_use]
    pub fn with_width(&self, width: f32) -> Self {
        Self::new(self.x, self.y, width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(109.9, 59.9));
        assert!(!rect.contains(110.0, 30.0));
        assert!(!rect.contains(50.0, 60.0));
    }

    #[test]
    fn test_squares() {
        let rect = Rect::new(0.0, 0.0, 200.0, 44.0);
        assert_eq!(rect.leading_square(), Rect::new(0.0, 0.0, 44.0, 44.0));
        assert_eq!(rect.trailing_square(), Rect::new(156.0, 0.0, 44.0, 44.0));
    }

    #[test]
    fn test_shrink() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0).shrink(10.0);
        assert_eq!(rect, Rect::new(10.0, 10.0, 80.0, 80.0));
        assert!((rect.inscribed_radius() - 40.0).abs() < f32::EPSILON);
    }
}
