//! Frame orchestration: panel declaration, drag resolution, dock commit
//!
//! One [`Gui`] lives for the life of the host. Each frame the host calls
//! `begin_frame`, declares its panels and widgets, then `end_frame` with the
//! global rect. All cross-panel gestures (title-bar drags, dock commits,
//! docked layout) resolve in `end_frame`, after every panel of the frame has
//! been declared.

use tracing::debug;

use super::dock::{
    dock_to, global_zones, layout_docked, panel_zones, undock, DockDrag, DockSlot, DockTarget,
};
use super::draw::DrawSurface;
use super::interaction::{Interaction, WidgetId};
use super::layout::LayoutCursor;
use super::panel::{PanelId, PanelRegistry};
use super::resize::{allowed_dirs, resize_hit, update_resize};
use super::theme::{self, TITLE_BAR_H};
use super::{MouseState, Rect};

/// Retained gui state: interaction tracking, the panel registry and whatever
/// gesture is in flight.
#[derive(Default)]
pub struct Gui {
    pub interaction: Interaction,
    pub panels: PanelRegistry,
    drag: Option<DockDrag>,
    cursor: Option<LayoutCursor>,
    pub(crate) focused_input: Option<WidgetId>,
}

impl Gui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame from a fresh input snapshot. Call exactly once before
    /// any panel declarations.
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.interaction.begin_frame(mouse);
        self.cursor = None;
    }

    /// Declare a panel for this frame. Returns whether the panel is open;
    /// when it returns `false` the caller skips the panel's widgets.
    ///
    /// The first declaration of a title registers it with `default` geometry;
    /// afterwards the retained rect wins. Declaring also runs the panel's
    /// own gestures (select, title-bar drag start, resize, close) and draws
    /// its chrome, then installs the layout cursor for the widget calls that
    /// follow.
    pub fn begin_panel(
        &mut self,
        surface: &mut dyn DrawSurface,
        title: &str,
        default: Rect,
        alpha: f32,
    ) -> bool {
        self.cursor = None;
        let id = self.panels.get_or_create(title, default);
        let Some(panel) = self.panels.get(id) else {
            return false;
        };
        if !panel.open {
            return false;
        }

        let mouse = self.interaction.mouse;
        let (mx, my) = mouse.pos();
        let rect = panel.rect;
        let slot = panel.slot;
        let title_hovered = mouse.inside(&panel.title_bar());
        let close_hovered = mouse.inside(&panel.close_button());
        let resize_hovered = !resize_hit(rect, allowed_dirs(slot), mx, my).is_empty();

        // select and raise on any press inside, except over the hotspots
        // that start their own gestures
        if mouse.clicked(&rect) && !close_hovered && !resize_hovered {
            self.panels.bring_to_front(id);
            self.interaction.selected = Some(id);
        }

        // title-bar press starts a drag; the move itself happens in
        // end_frame once all panels are declared
        if title_hovered && mouse.left_pressed && !close_hovered && !resize_hovered {
            self.drag = Some(DockDrag {
                panel: id,
                grab: (mx - rect.x, my - rect.y),
                hover: None,
                float_origin: (slot == DockSlot::None).then_some(rect),
            });
            for p in self.panels.iter_mut() {
                p.moving = p.id == id;
            }
        }

        let selected = self.interaction.selected == Some(id);
        if let Some(panel) = self.panels.get_mut(id) {
            update_resize(panel, &mouse, selected);
        }

        if close_hovered && mouse.left_pressed {
            self.panels.close(id);
            return false;
        }

        let Some(panel) = self.panels.get(id) else {
            return false;
        };
        let rect = panel.rect;
        let title_bar = panel.title_bar();
        let close = panel.close_button();

        surface.fill_rect(rect, theme::with_alpha(theme::PANEL_BG, alpha));
        surface.stroke_rect(rect, theme::OUTLINE);

        let bar = if selected {
            theme::TITLE_BAR_SELECTED
        } else {
            theme::TITLE_BAR_IDLE
        };
        surface.fill_rect(title_bar, bar);
        surface.stroke_rect(title_bar, theme::OUTLINE);
        surface.text(rect.x + 8.0, rect.y + 8.0, title, theme::TEXT_LIGHT);

        let close_bg = if close_hovered {
            theme::CLOSE_HOVER
        } else {
            theme::CLOSE_BG
        };
        surface.fill_rect(close, close_bg);
        surface.stroke_rect(close, theme::OUTLINE);
        surface.text(close.x + 4.0, close.y + 4.0, "X", theme::TEXT_LIGHT);

        self.cursor = Some(LayoutCursor::new(rect));
        true
    }

    /// Close off the current panel's widget scope.
    pub fn end_panel(&mut self) {
        self.cursor = None;
    }

    pub(crate) fn cursor_mut(&mut self) -> Option<&mut LayoutCursor> {
        self.cursor.as_mut()
    }

    /// Finish the frame: resolve the in-flight title-bar drag (including
    /// dock-zone overlays, undock-on-leave and the dock commit on release),
    /// then re-run docked layout against `global`.
    pub fn end_frame(&mut self, surface: &mut dyn DrawSurface, global: Rect) {
        let mouse = self.interaction.mouse;
        let (mx, my) = mouse.pos();

        if let Some(mut drag) = self.drag.take() {
            drag.hover = None;

            // candidate zones over every other open panel; last hit wins,
            // matching z-order since panels are drawn back to front
            let candidates: Vec<(PanelId, Rect)> = self
                .panels
                .iter()
                .filter(|p| p.open && p.id != drag.panel)
                .map(|p| (p.id, p.rect))
                .collect();
            for (pid, prect) in candidates {
                for (slot, zone) in panel_zones(prect) {
                    let hovered = zone.contains(mx, my);
                    surface.fill_rect(
                        zone,
                        if hovered {
                            theme::DOCK_ZONE_HOVER
                        } else {
                            theme::DOCK_ZONE
                        },
                    );
                    if hovered {
                        drag.hover = Some(DockTarget::Panel(pid, slot));
                    }
                }
            }

            // global strips override any panel zone underneath them
            for (slot, zone) in global_zones(global) {
                let hovered = zone.contains(mx, my);
                surface.fill_rect(
                    zone,
                    if hovered {
                        theme::DOCK_ZONE_GLOBAL_HOVER
                    } else {
                        theme::DOCK_ZONE_GLOBAL
                    },
                );
                if hovered {
                    drag.hover = Some(DockTarget::Global(slot));
                }
            }

            // a docked panel pulled clear of every zone pops back out to its
            // floating rect; the grab offset is recomputed against the
            // restored rect so the title bar stays under the pointer
            let docked = self
                .panels
                .get(drag.panel)
                .map(|p| p.slot != DockSlot::None)
                .unwrap_or(false);
            if docked && drag.hover.is_none() {
                undock(&mut self.panels, drag.panel);
                if let Some(p) = self.panels.get(drag.panel) {
                    let title_bar = p.title_bar();
                    drag.grab.1 = if my < title_bar.y || my > title_bar.bottom() {
                        TITLE_BAR_H / 2.0
                    } else {
                        my - p.rect.y
                    };
                    drag.grab.0 = mx - p.rect.x;
                    drag.float_origin = Some(p.rect);
                }
            }

            if let Some(p) = self.panels.get_mut(drag.panel) {
                p.rect.x = mx - drag.grab.0;
                p.rect.y = my - drag.grab.1;
            }

            if mouse.left_released {
                match drag.hover {
                    Some(DockTarget::Global(slot)) => {
                        dock_to(&mut self.panels, drag.panel, None, slot);
                    }
                    Some(DockTarget::Panel(target, slot)) => {
                        dock_to(&mut self.panels, drag.panel, Some(target), slot);
                    }
                    None => debug!(panel = ?drag.panel, "drag ended floating"),
                }
                // a committed dock restores from where the drag picked the
                // panel up, not from the dragged rect the commit saw
                if drag.hover.is_some() && drag.float_origin.is_some() {
                    if let Some(p) = self.panels.get_mut(drag.panel) {
                        if p.slot != DockSlot::None {
                            p.prev_float = drag.float_origin;
                        }
                    }
                }
            } else {
                self.drag = Some(drag);
            }
        }

        // gestures can never outlive the button press
        if !mouse.left_down {
            self.drag = None;
            for p in self.panels.iter_mut() {
                p.moving = false;
                p.resizing = false;
            }
        }

        layout_docked(&mut self.panels, global);

        if mouse.left_released {
            self.interaction.clear_active();
        }
    }
}
