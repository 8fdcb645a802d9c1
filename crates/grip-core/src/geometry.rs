/// A point in global screen coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns how far the pointer travelled from `self` to `current`,
    /// expressed as `self - current`.
    ///
    /// A positive `dx` means the pointer moved left, a positive `dy`
    /// means it moved up.
    pub fn delta_to(&self, current: Point) -> Delta {
        Delta {
            dx: self.x - current.x,
            dy: self.y - current.y,
        }
    }

    /// Moves the point against a pointer delta, so the point follows
    /// the pointer.
    pub fn follow(&self, delta: Delta) -> Point {
        Point::new(self.x - delta.dx, self.y - delta.dy)
    }
}

/// A width/height pair.
///
/// Values are not clamped: negative or degenerate sizes pass straight
/// through to the platform, which may reject or clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grows the size against a pointer delta, so the bottom-right
    /// corner follows the pointer.
    pub fn follow(&self, delta: Delta) -> Size {
        Size::new(self.width - delta.dx, self.height - delta.dy)
    }
}

/// Pointer displacement between two consecutive samples (`old - new`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}
