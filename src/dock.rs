//! Docking engine: drop zones, forest maintenance and recursive layout
//!
//! Docked panels form a forest over the registry. Roots anchor to the edges
//! of the global rect, children anchor to a fraction of their parent. The
//! forest is kept acyclic by rejecting any dock whose target descends from
//! the panel being docked.

use tracing::{debug, warn};

use super::panel::{PanelId, PanelRegistry};
use super::Rect;

/// Where a panel is anchored relative to its parent (or the global rect for
/// roots). `None` means floating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockSlot {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

/// A drop target under the pointer during a title-bar drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockTarget {
    Panel(PanelId, DockSlot),
    Global(DockSlot),
}

/// An in-flight title-bar drag. Lives in the gui context from press to
/// release; `hover` is recomputed every frame.
#[derive(Debug, Clone, Copy)]
pub struct DockDrag {
    pub panel: PanelId,
    /// Pointer offset from the panel origin at press time
    pub grab: (f32, f32),
    pub hover: Option<DockTarget>,
    /// Rect the panel floated at when the drag began (or when it popped free
    /// mid-drag). A dock committed at release restores from this, not from
    /// wherever the drag happened to carry the rect.
    pub float_origin: Option<Rect>,
}

/// Fraction of the parent edge a docked child occupies
pub const DOCK_FRACTION: f32 = 0.3;

/// Drop zones over a candidate target panel, in hit-test order.
pub fn panel_zones(rect: Rect) -> [(DockSlot, Rect); 5] {
    let Rect { x, y, w, h } = rect;
    [
        (DockSlot::Left, Rect::new(x, y + h / 4.0, w / 6.0, h / 2.0)),
        (
            DockSlot::Right,
            Rect::new(x + w - w / 6.0, y + h / 4.0, w / 6.0, h / 2.0),
        ),
        (DockSlot::Top, Rect::new(x + w / 4.0, y, w / 2.0, h / 6.0)),
        (
            DockSlot::Bottom,
            Rect::new(x + w / 4.0, y + h - h / 6.0, w / 2.0, h / 6.0),
        ),
        (
            DockSlot::Center,
            Rect::new(x + w / 4.0, y + h / 4.0, w / 2.0, h / 2.0),
        ),
    ]
}

/// Drop zones along the edges of the global rect. There is no global center
/// slot; the thin 1/32 strips leave the middle of the screen for panel
/// zones.
pub fn global_zones(global: Rect) -> [(DockSlot, Rect); 4] {
    let Rect { x, y, w, h } = global;
    [
        (
            DockSlot::Left,
            Rect::new(x, y + h / 4.0, w / 32.0, h / 2.0),
        ),
        (
            DockSlot::Right,
            Rect::new(x + w - w / 32.0, y + h / 4.0, w / 32.0, h / 2.0),
        ),
        (DockSlot::Top, Rect::new(x + w / 4.0, y, w / 2.0, h / 32.0)),
        (
            DockSlot::Bottom,
            Rect::new(x + w / 4.0, y + h - h / 32.0, w / 2.0, h / 32.0),
        ),
    ]
}

/// Attach `panel` under `target` (or as a global root when `target` is
/// `None`) in the given slot.
///
/// Rejects self-docking and any target that descends from `panel`, which is
/// exactly the set of attachments that would create a cycle. The panel's
/// floating rect is captured on the float-to-docked transition only, so a
/// later undock restores the rect from before the first dock in the chain.
pub fn dock_to(
    reg: &mut PanelRegistry,
    panel: PanelId,
    target: Option<PanelId>,
    slot: DockSlot,
) {
    if let Some(t) = target {
        if t == panel || reg.is_descendant(t, panel) {
            warn!(?panel, target = ?t, "rejected dock: target descends from panel");
            return;
        }
    }

    let was_floating = match reg.get(panel) {
        Some(p) => p.slot == DockSlot::None,
        None => return,
    };

    reg.detach(panel);
    if was_floating {
        if let Some(p) = reg.get_mut(panel) {
            p.prev_float = Some(p.rect);
        }
    }

    if let Some(t) = target {
        if let Some(tp) = reg.get_mut(t) {
            tp.children.push(panel);
        }
    }
    if let Some(p) = reg.get_mut(panel) {
        p.parent = target;
        p.slot = slot;
    }
    debug!(?panel, ?target, ?slot, "docked");
}

/// Detach `panel` from the forest and restore its floating rect, if one was
/// captured. Its docked children stay attached and follow it.
pub fn undock(reg: &mut PanelRegistry, panel: PanelId) {
    reg.detach(panel);
    if let Some(p) = reg.get_mut(panel) {
        if let Some(prev) = p.prev_float.take() {
            p.rect = prev;
        }
        debug!(?panel, "undocked");
    }
}

fn slot_rect(slot: DockSlot, parent: Rect, user_w: Option<f32>, user_h: Option<f32>) -> Rect {
    let Rect { x, y, w, h } = parent;
    match slot {
        DockSlot::Left => {
            let cw = user_w.unwrap_or(w * DOCK_FRACTION);
            Rect::new(x, y, cw, h)
        }
        DockSlot::Right => {
            let cw = user_w.unwrap_or(w * DOCK_FRACTION);
            Rect::new(x + w - cw, y, cw, h)
        }
        DockSlot::Top => {
            let ch = user_h.unwrap_or(h * DOCK_FRACTION);
            Rect::new(x, y, w, ch)
        }
        DockSlot::Bottom => {
            let ch = user_h.unwrap_or(h * DOCK_FRACTION);
            Rect::new(x, y + h - ch, w, ch)
        }
        DockSlot::Center | DockSlot::None => parent.centered_fraction(0.7),
    }
}

fn layout_children(reg: &mut PanelRegistry, parent: PanelId) {
    let (parent_rect, children) = match reg.get(parent) {
        Some(p) => (p.rect, p.children.clone()),
        None => return,
    };
    for child_id in children {
        let Some(child) = reg.get_mut(child_id) else {
            continue;
        };
        if child.slot == DockSlot::None {
            continue;
        }
        // children take the fixed fraction; user overrides apply to roots
        // only, so sibling layouts stay independent of resize history
        child.rect = slot_rect(child.slot, parent_rect, None, None);
        layout_children(reg, child_id);
    }
}

/// Recompute the rect of every docked panel from the global rect down.
/// Runs once per frame after all gestures have been applied, so manual
/// resizes of docked roots are reconciled through their sticky overrides.
/// Floating roots keep their own rect but their docked children still follow
/// them.
pub fn layout_docked(reg: &mut PanelRegistry, global: Rect) {
    let roots: Vec<(PanelId, DockSlot)> = reg
        .iter()
        .filter(|p| p.open && p.parent.is_none())
        .map(|p| (p.id, p.slot))
        .collect();
    for (id, slot) in roots {
        if slot != DockSlot::None {
            if let Some(p) = reg.get_mut(id) {
                p.rect = slot_rect(slot, global, p.user_width, p.user_height);
            }
        }
        layout_children(reg, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn approx(r: Rect, x: f32, y: f32, w: f32, h: f32) {
        assert!((r.x - x).abs() < 0.001, "x: {} vs {}", r.x, x);
        assert!((r.y - y).abs() < 0.001, "y: {} vs {}", r.y, y);
        assert!((r.w - w).abs() < 0.001, "w: {} vs {}", r.w, w);
        assert!((r.h - h).abs() < 0.001, "h: {} vs {}", r.h, h);
    }

    #[test]
    fn test_global_left_dock_takes_30_percent() {
        let mut reg = PanelRegistry::new();
        let p = reg.get_or_create("P", Rect::new(100.0, 100.0, 200.0, 150.0));
        dock_to(&mut reg, p, None, DockSlot::Left);
        layout_docked(&mut reg, GLOBAL);
        approx(reg.get(p).unwrap().rect, 0.0, 0.0, 240.0, 600.0);
    }

    #[test]
    fn test_global_right_and_bottom_anchor_far_edge() {
        let mut reg = PanelRegistry::new();
        let r = reg.get_or_create("R", Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = reg.get_or_create("B", Rect::new(0.0, 0.0, 100.0, 100.0));
        dock_to(&mut reg, r, None, DockSlot::Right);
        dock_to(&mut reg, b, None, DockSlot::Bottom);
        layout_docked(&mut reg, GLOBAL);
        approx(reg.get(r).unwrap().rect, 560.0, 0.0, 240.0, 600.0);
        approx(reg.get(b).unwrap().rect, 0.0, 420.0, 800.0, 180.0);
    }

    #[test]
    fn test_user_override_survives_relayout() {
        let mut reg = PanelRegistry::new();
        let p = reg.get_or_create("P", Rect::new(0.0, 0.0, 100.0, 100.0));
        dock_to(&mut reg, p, None, DockSlot::Left);
        reg.get_mut(p).unwrap().user_width = Some(320.0);
        layout_docked(&mut reg, GLOBAL);
        layout_docked(&mut reg, GLOBAL);
        approx(reg.get(p).unwrap().rect, 0.0, 0.0, 320.0, 600.0);
    }

    #[test]
    fn test_child_layout_recurses() {
        let mut reg = PanelRegistry::new();
        let a = reg.get_or_create("A", Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = reg.get_or_create("B", Rect::new(0.0, 0.0, 100.0, 100.0));
        let c = reg.get_or_create("C", Rect::new(0.0, 0.0, 100.0, 100.0));
        dock_to(&mut reg, a, None, DockSlot::Left);
        dock_to(&mut reg, b, Some(a), DockSlot::Bottom);
        dock_to(&mut reg, c, Some(b), DockSlot::Right);
        layout_docked(&mut reg, GLOBAL);

        // a: left 30% of 800x600
        approx(reg.get(a).unwrap().rect, 0.0, 0.0, 240.0, 600.0);
        // b: bottom 30% of a
        approx(reg.get(b).unwrap().rect, 0.0, 420.0, 240.0, 180.0);
        // c: right 30% of b
        approx(reg.get(c).unwrap().rect, 168.0, 420.0, 72.0, 180.0);
    }

    #[test]
    fn test_center_child_is_centered_70_percent() {
        let mut reg = PanelRegistry::new();
        let a = reg.get_or_create("A", Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = reg.get_or_create("B", Rect::new(0.0, 0.0, 100.0, 100.0));
        dock_to(&mut reg, a, None, DockSlot::Left);
        dock_to(&mut reg, b, Some(a), DockSlot::Center);
        layout_docked(&mut reg, GLOBAL);
        approx(reg.get(b).unwrap().rect, 36.0, 90.0, 168.0, 420.0);
    }

    #[test]
    fn test_cycle_rejected() {
        let mut reg = PanelRegistry::new();
        let a = reg.get_or_create("A", Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = reg.get_or_create("B", Rect::new(0.0, 0.0, 100.0, 100.0));
        let c = reg.get_or_create("C", Rect::new(0.0, 0.0, 100.0, 100.0));
        dock_to(&mut reg, b, Some(a), DockSlot::Left);
        dock_to(&mut reg, c, Some(b), DockSlot::Left);

        // a into its grandchild c: rejected, forest unchanged
        dock_to(&mut reg, a, Some(c), DockSlot::Right);
        let a_state = reg.get(a).unwrap();
        assert_eq!(a_state.parent, None);
        assert_eq!(a_state.slot, DockSlot::None);
        assert!(reg.get(c).unwrap().children.is_empty());

        // a into itself: rejected
        dock_to(&mut reg, a, Some(a), DockSlot::Left);
        assert_eq!(reg.get(a).unwrap().parent, None);
    }

    #[test]
    fn test_prev_float_captured_once() {
        let mut reg = PanelRegistry::new();
        let a = reg.get_or_create("A", Rect::new(0.0, 0.0, 400.0, 400.0));
        let float_rect = Rect::new(50.0, 60.0, 200.0, 150.0);
        let p = reg.get_or_create("P", float_rect);

        dock_to(&mut reg, p, Some(a), DockSlot::Left);
        layout_docked(&mut reg, GLOBAL);
        // re-dock while already docked must not clobber the saved rect
        dock_to(&mut reg, p, Some(a), DockSlot::Right);
        layout_docked(&mut reg, GLOBAL);

        undock(&mut reg, p);
        let r = reg.get(p).unwrap().rect;
        approx(r, float_rect.x, float_rect.y, float_rect.w, float_rect.h);
        assert_eq!(reg.get(p).unwrap().prev_float, None);
        assert!(reg.get(a).unwrap().children.is_empty());
    }

    #[test]
    fn test_zones_cover_expected_regions() {
        let zones = panel_zones(Rect::new(0.0, 0.0, 120.0, 60.0));
        assert_eq!(zones[0].0, DockSlot::Left);
        approx(zones[0].1, 0.0, 15.0, 20.0, 30.0);
        assert_eq!(zones[4].0, DockSlot::Center);
        approx(zones[4].1, 30.0, 15.0, 60.0, 30.0);

        let g = global_zones(GLOBAL);
        assert_eq!(g[1].0, DockSlot::Right);
        approx(g[1].1, 775.0, 150.0, 25.0, 300.0);
        // no center slot at the global level
        assert!(g.iter().all(|(s, _)| *s != DockSlot::Center));
    }

    #[test]
    fn test_zero_size_global_collapses_without_panic() {
        let mut reg = PanelRegistry::new();
        let p = reg.get_or_create("P", Rect::new(0.0, 0.0, 100.0, 100.0));
        dock_to(&mut reg, p, None, DockSlot::Left);
        layout_docked(&mut reg, Rect::new(0.0, 0.0, 0.0, 0.0));
        approx(reg.get(p).unwrap().rect, 0.0, 0.0, 0.0, 0.0);
    }

    #[test]
    fn test_closed_root_is_skipped() {
        let mut reg = PanelRegistry::new();
        let p = reg.get_or_create("P", Rect::new(5.0, 5.0, 100.0, 100.0));
        dock_to(&mut reg, p, None, DockSlot::Left);
        reg.get_mut(p).unwrap().open = false;
        layout_docked(&mut reg, GLOBAL);
        approx(reg.get(p).unwrap().rect, 5.0, 5.0, 100.0, 100.0);
    }
}
