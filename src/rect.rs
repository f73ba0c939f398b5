//! Rectangle type for panel geometry and hit-testing

/// A rectangle defined by position and size, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Centered sub-rectangle covering the given fraction of each dimension
    pub fn centered_fraction(&self, fraction: f32) -> Self {
        let inset = (1.0 - fraction) * 0.5;
        Self::new(
            self.x + self.w * inset,
            self.y + self.h * inset,
            self.w * fraction,
            self.h * fraction,
        )
    }
}
