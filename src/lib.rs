//! Immediate-mode panel system with docking
//!
//! Panels and widgets are declared every frame; interaction state (hot and
//! active widgets, panel geometry, the dock forest) is retained between
//! frames and reconciled against the declarations. A typical frame:
//!
//! ```no_run
//! use paneldock::{Gui, MacroquadSurface, MouseState, Rect};
//!
//! let mut gui = Gui::new();
//! let mut surface = MacroquadSurface;
//! // per frame, after sampling input into `mouse`:
//! # let mouse = MouseState::default();
//! gui.begin_frame(mouse);
//! if gui.begin_panel(&mut surface, "Tools", Rect::new(40.0, 40.0, 220.0, 260.0), 0.95) {
//!     if gui.button(&mut surface, "Apply") {
//!         // clicked this frame
//!     }
//!     gui.end_panel();
//! }
//! gui.end_frame(&mut surface, Rect::screen(800.0, 600.0));
//! ```
//!
//! Dragging a panel by its title bar shows dock zones over every other panel
//! and along the screen edges; dropping on one attaches the panel to the
//! dock forest, and pulling a docked panel free restores its floating rect.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod context;
mod dock;
mod draw;
mod font;
mod input;
mod interaction;
mod layout;
mod panel;
mod rect;
mod resize;
pub mod theme;
mod widgets;

pub use context::Gui;
pub use dock::{DockSlot, DockTarget};
pub use draw::{DrawSurface, MacroquadSurface, NullSurface};
pub use input::MouseState;
pub use interaction::WidgetId;
pub use panel::{PanelId, PanelState};
pub use rect::Rect;
pub use resize::ResizeDir;
