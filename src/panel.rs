//! Persistent panel records and their z-ordered registry
//!
//! Immediate-mode declarations run against retained state: a panel record is
//! created the first time its title is declared and kept for the life of the
//! process. Closed panels stay in the registry hidden, so reopening a title
//! resumes its previous geometry.

use super::dock::DockSlot;
use super::resize::ResizeDir;
use super::theme::{CLOSE_SIZE, TITLE_BAR_H};
use super::Rect;

/// Stable panel handle; never reused, survives z-order moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelId(u64);

/// Retained per-panel state, one record per distinct title
#[derive(Debug)]
pub struct PanelState {
    pub id: PanelId,
    pub title: String,
    pub rect: Rect,
    pub open: bool,

    pub moving: bool,
    pub resizing: bool,
    pub resize_dir: ResizeDir,
    /// Geometry captured when the current resize began; deltas are computed
    /// against this anchor so no error accumulates over the gesture
    pub resize_anchor: Rect,
    pub resize_grab: (f32, f32),

    /// Explicit depth set by manually resizing a docked panel; wins over the
    /// default dock fraction and survives re-docking
    pub user_width: Option<f32>,
    pub user_height: Option<f32>,

    /// Floating rectangle saved the moment the panel first docks, restored
    /// when it is pulled free again
    pub prev_float: Option<Rect>,

    /// Weak back-reference; the parent's `children` list is the owning side
    pub parent: Option<PanelId>,
    pub children: Vec<PanelId>,
    pub slot: DockSlot,
}

impl PanelState {
    fn new(id: PanelId, title: &str, rect: Rect) -> Self {
        Self {
            id,
            title: title.to_string(),
            rect,
            open: true,
            moving: false,
            resizing: false,
            resize_dir: ResizeDir::empty(),
            resize_anchor: Rect::default(),
            resize_grab: (0.0, 0.0),
            user_width: None,
            user_height: None,
            prev_float: None,
            parent: None,
            children: Vec::new(),
            slot: DockSlot::None,
        }
    }

    /// Title bar strip across the top of the panel
    pub fn title_bar(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y, self.rect.w, TITLE_BAR_H)
    }

    /// Close button inside the title bar, right-aligned
    pub fn close_button(&self) -> Rect {
        Rect::new(
            self.rect.x + self.rect.w - 24.0,
            self.rect.y + 4.0,
            CLOSE_SIZE,
            CLOSE_SIZE,
        )
    }

    /// A root panel anchored to a global screen edge (or centered), as opposed
    /// to one docked into another panel or floating freely
    pub fn is_global_anchor(&self) -> bool {
        self.parent.is_none() && self.slot != DockSlot::None
    }
}

/// All known panels in z-sequence; the last entry is frontmost
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: Vec<PanelState>,
    next_id: u64,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent per title: the first call registers the panel with the given
    /// default geometry, later calls are pure lookups and the defaults are
    /// ignored.
    pub fn get_or_create(&mut self, title: &str, default: Rect) -> PanelId {
        if let Some(id) = self.find(title) {
            return id;
        }
        let id = PanelId(self.next_id);
        self.next_id += 1;
        tracing::debug!(title, ?default, "panel created");
        self.panels.push(PanelState::new(id, title, default));
        id
    }

    pub fn find(&self, title: &str) -> Option<PanelId> {
        self.panels.iter().find(|p| p.title == title).map(|p| p.id)
    }

    pub fn get(&self, id: PanelId) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut PanelState> {
        self.panels.iter_mut().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelState> {
        self.panels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PanelState> {
        self.panels.iter_mut()
    }

    /// Move the panel to the end of the z-sequence (frontmost)
    pub fn bring_to_front(&mut self, id: PanelId) {
        if let Some(pos) = self.panels.iter().position(|p| p.id == id) {
            if pos != self.panels.len() - 1 {
                let panel = self.panels.remove(pos);
                self.panels.push(panel);
            }
        }
    }

    /// Hide the panel and detach it from any dock parent. The record is
    /// retained; reopening the same title resumes its geometry.
    pub fn close(&mut self, id: PanelId) {
        self.detach(id);
        if let Some(panel) = self.get_mut(id) {
            panel.open = false;
            tracing::debug!(title = %panel.title, "panel closed");
        }
    }

    /// Remove the panel from its parent's child list (or global anchor) and
    /// reset its slot to `None`
    pub fn detach(&mut self, id: PanelId) {
        let parent = match self.get(id) {
            Some(panel) => panel.parent,
            None => return,
        };
        if let Some(parent_id) = parent {
            if let Some(parent) = self.get_mut(parent_id) {
                parent.children.retain(|&c| c != id);
            }
        }
        if let Some(panel) = self.get_mut(id) {
            panel.parent = None;
            panel.slot = DockSlot::None;
        }
    }

    /// Whether `node` lies in `ancestor`'s subtree (walks the parent chain;
    /// a panel is not its own descendant)
    pub fn is_descendant(&self, node: PanelId, ancestor: PanelId) -> bool {
        let mut current = self.get(node).and_then(|p| p.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|p| p.parent);
        }
        false
    }
}
