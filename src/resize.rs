//! Per-panel edge/corner resize state machine
//!
//! Idle -> Resizing(direction) -> Idle, always ended by pointer release.
//! Moving and resizing are mutually exclusive for a panel: a resize can only
//! start from an edge band, a move only from the title bar, and the two
//! regions never overlap.

use bitflags::bitflags;

use super::dock::DockSlot;
use super::panel::PanelState;
use super::{MouseState, Rect};
use crate::theme::TITLE_BAR_H;

bitflags! {
    /// Resize direction; corners are bitwise unions of their edges.
    /// There is no top edge: the title bar owns that strip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ResizeDir: u8 {
        const LEFT = 1;
        const RIGHT = 2;
        const BOTTOM = 4;
        const BOTTOM_LEFT = Self::LEFT.bits() | Self::BOTTOM.bits();
        const BOTTOM_RIGHT = Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

/// Half-width of the hit band along each resizable edge
pub const EDGE_BAND: f32 = 6.0;

pub const MIN_PANEL_W: f32 = 128.0;
pub const MIN_PANEL_H: f32 = 96.0;

/// Which edges the current dock slot permits resizing.
///
/// A docked panel may only adjust its depth: the edge opposite its anchor
/// (left-docked -> right edge, right-docked -> left edge, top-docked ->
/// bottom edge). Bottom-docked panels also use the bottom edge since there is
/// no top direction; layout re-anchors them after the height change.
pub fn allowed_dirs(slot: DockSlot) -> ResizeDir {
    match slot {
        DockSlot::None | DockSlot::Center => ResizeDir::all(),
        DockSlot::Left => ResizeDir::RIGHT,
        DockSlot::Right => ResizeDir::LEFT,
        DockSlot::Top | DockSlot::Bottom => ResizeDir::BOTTOM,
    }
}

/// Single hit-test routine shared by gesture start and hotspot exclusion.
/// Priority is corner > edge; side bands stop short of the title bar.
pub fn resize_hit(rect: Rect, allowed: ResizeDir, mx: f32, my: f32) -> ResizeDir {
    let e = EDGE_BAND;
    let over_left = mx >= rect.x - e
        && mx <= rect.x + e
        && my > rect.y + TITLE_BAR_H
        && my < rect.bottom() - e;
    let over_right = mx >= rect.right() - e
        && mx <= rect.right() + e
        && my > rect.y + TITLE_BAR_H
        && my < rect.bottom() - e;
    let over_bottom = mx >= rect.x + e
        && mx <= rect.right() - e
        && my >= rect.bottom() - e
        && my <= rect.bottom() + e;
    let over_bl =
        mx >= rect.x - e && mx <= rect.x + e && my >= rect.bottom() - e && my <= rect.bottom() + e;
    let over_br = mx >= rect.right() - e
        && mx <= rect.right() + e
        && my >= rect.bottom() - e
        && my <= rect.bottom() + e;

    let hit = if over_bl {
        ResizeDir::BOTTOM_LEFT
    } else if over_br {
        ResizeDir::BOTTOM_RIGHT
    } else if over_left {
        ResizeDir::LEFT
    } else if over_right {
        ResizeDir::RIGHT
    } else if over_bottom {
        ResizeDir::BOTTOM
    } else {
        ResizeDir::empty()
    };

    // a corner with a disallowed component degrades to nothing, not to the
    // remaining edge, so the gesture is unambiguous
    if allowed.contains(hit) {
        hit
    } else {
        ResizeDir::empty()
    }
}

/// Advance the resize state machine for one panel this frame.
///
/// Starting a resize requires the panel to be the selected one; updating and
/// ending do not, so a release anywhere always terminates the gesture.
pub fn update_resize(panel: &mut PanelState, mouse: &MouseState, selected: bool) {
    let (mx, my) = mouse.pos();

    if selected && mouse.left_pressed && !panel.resizing {
        let hit = resize_hit(panel.rect, allowed_dirs(panel.slot), mx, my);
        if !hit.is_empty() {
            panel.resizing = true;
            panel.resize_dir = hit;
            panel.resize_anchor = panel.rect;
            panel.resize_grab = (mx, my);
        }
    }

    if !mouse.left_down {
        panel.resizing = false;
        panel.resize_dir = ResizeDir::empty();
    }

    if !panel.resizing {
        return;
    }

    let dx = mx - panel.resize_grab.0;
    let dy = my - panel.resize_grab.1;

    if panel.resize_dir.contains(ResizeDir::LEFT) {
        // clamp the delta, not the width, so the right edge stays fixed
        let d = dx.min(panel.resize_anchor.w - MIN_PANEL_W);
        panel.rect.x = panel.resize_anchor.x + d;
        panel.rect.w = panel.resize_anchor.w - d;
    }
    if panel.resize_dir.contains(ResizeDir::RIGHT) {
        panel.rect.w = (panel.resize_anchor.w + dx).max(MIN_PANEL_W);
    }
    if panel.resize_dir.contains(ResizeDir::BOTTOM) {
        panel.rect.h = (panel.resize_anchor.h + dy).max(MIN_PANEL_H);
    }

    // manual resize of a docked panel becomes its sticky override depth
    match panel.slot {
        DockSlot::Left | DockSlot::Right => panel.user_width = Some(panel.rect.w),
        DockSlot::Top | DockSlot::Bottom => panel.user_height = Some(panel.rect.h),
        DockSlot::Center | DockSlot::None => {}
    }
}
