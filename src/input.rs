//! Per-frame input snapshot
//!
//! The host event layer samples the pointer once per frame and computes the
//! press/release edges from raw button state before handing the snapshot to
//! [`Gui::begin_frame`](crate::Gui::begin_frame).

use super::Rect;

/// Pointer state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    /// Primary button is held (level)
    pub left_down: bool,
    /// Primary button went down this frame (edge)
    pub left_pressed: bool,
    /// Primary button went up this frame (edge)
    pub left_released: bool,
}

impl MouseState {
    /// Check if the pointer is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if the pointer just pressed inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }

    pub fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
