//! Top-to-bottom widget placement inside a panel body

use super::Rect;
use crate::theme::{BODY_INSET_X, BODY_INSET_Y, WIDGET_SPACING};

/// Flows widgets downward from the top of a panel body. Installed by
/// `begin_panel` and consumed by the widget calls that follow; widget calls
/// with no cursor installed are no-ops.
#[derive(Debug, Clone, Copy)]
pub struct LayoutCursor {
    x: f32,
    y: f32,
    avail_w: f32,
}

impl LayoutCursor {
    pub fn new(panel_rect: Rect) -> Self {
        Self {
            x: panel_rect.x + BODY_INSET_X,
            y: panel_rect.y + BODY_INSET_Y,
            avail_w: (panel_rect.w - BODY_INSET_X * 2.0).max(0.0),
        }
    }

    /// Width left for a full-row widget
    pub fn avail_w(&self) -> f32 {
        self.avail_w
    }

    /// Claim a `w` x `h` rect at the cursor and advance past it.
    pub fn place(&mut self, w: f32, h: f32) -> Rect {
        let rect = Rect::new(self.x, self.y, w, h);
        self.y += h + WIDGET_SPACING;
        rect
    }
}
