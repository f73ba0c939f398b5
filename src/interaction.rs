//! Widget identity and hot/active interaction tracking
//!
//! Widget identities are frame-local: they are handed out in declaration order
//! by a counter that resets every frame. An identity is therefore only
//! meaningful across frames while the declaration sequence stays stable, which
//! holds for the duration of any press-to-release interaction.

use super::panel::PanelId;
use super::{MouseState, Rect};

/// Frame-local widget identity, assigned in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetId(u32);

/// Hot/active bookkeeping shared by every widget in the frame
#[derive(Debug, Default)]
pub struct Interaction {
    pub mouse: MouseState,
    hot: Option<WidgetId>,
    active: Option<WidgetId>,
    /// Frontmost panel, recomputed whenever a panel is clicked
    pub selected: Option<PanelId>,
    counter: u32,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame state; call exactly once before any declarations
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.hot = None;
        self.counter = 0;
    }

    /// Fresh identity for the next declared widget
    pub fn next_id(&mut self) -> WidgetId {
        self.counter += 1;
        WidgetId(self.counter)
    }

    /// Claim hot status when the pointer is inside `rect`; the last claim in
    /// declaration order wins, mirroring draw order. Returns whether the
    /// pointer was inside.
    pub fn report_hover(&mut self, id: WidgetId, rect: Rect) -> bool {
        let inside = self.mouse.inside(&rect);
        if inside {
            self.hot = Some(id);
        }
        inside
    }

    /// Latch this widget as active when pressed while hot. The active widget,
    /// not the hot one, receives subsequent updates, so the interaction stays
    /// captured even if the pointer leaves the widget's bounds.
    pub fn mark_pressed(&mut self, id: WidgetId) {
        if self.hot == Some(id) && self.mouse.left_pressed {
            self.active = Some(id);
        }
    }

    pub fn is_hot(&self, id: WidgetId) -> bool {
        self.hot == Some(id)
    }

    pub fn is_active(&self, id: WidgetId) -> bool {
        self.active == Some(id)
    }

    /// True on the release frame while this widget is both hot and active,
    /// i.e. a completed click
    pub fn clicked(&self, id: WidgetId) -> bool {
        self.mouse.left_released && self.is_hot(id) && self.is_active(id)
    }

    /// Drop the active widget unconditionally; called at frame end on any
    /// pointer-up so interactions can never get stuck
    pub fn clear_active(&mut self) {
        self.active = None;
    }
}
