//! Widget set: button, checkbox, slider, label, text input
//!
//! Every widget flows through the layout cursor installed by `begin_panel`,
//! claims a hot/active identity and draws itself through the surface. All of
//! them are silent no-ops when no panel scope is open.

use super::context::Gui;
use super::draw::DrawSurface;
use super::font::text_width;
use super::theme::{self, WIDGET_MARGIN, WIDGET_ROW_H};
use super::Rect;

impl Gui {
    /// Push button. True on the frame the press is released over it.
    pub fn button(&mut self, surface: &mut dyn DrawSurface, label: &str) -> bool {
        let Some(cursor) = self.cursor_mut() else {
            return false;
        };
        let rect = cursor.place(theme::BUTTON_W, theme::BUTTON_H);

        let id = self.interaction.next_id();
        self.interaction.report_hover(id, rect);
        self.interaction.mark_pressed(id);
        let clicked = self.interaction.clicked(id);

        let face = if self.interaction.is_active(id) && self.interaction.is_hot(id) {
            theme::BUTTON_PRESSED
        } else if self.interaction.is_hot(id) {
            theme::BUTTON_HOVER
        } else {
            theme::BUTTON_BG
        };
        surface.fill_rect(rect, face);
        surface.stroke_rect(rect, theme::OUTLINE);
        surface.text(
            rect.x + (rect.w - text_width(label)) / 2.0,
            rect.y + rect.h / 2.0 - 4.0,
            label,
            theme::TEXT_DARK,
        );

        clicked
    }

    /// Checkbox with a trailing label. Toggles `value` on click; true on the
    /// frame it changed.
    pub fn checkbox(&mut self, surface: &mut dyn DrawSurface, label: &str, value: &mut bool) -> bool {
        let Some(cursor) = self.cursor_mut() else {
            return false;
        };
        let row = cursor.place(theme::CHECKBOX_SIZE, theme::CHECKBOX_SIZE);
        let boxed = Rect::new(row.x, row.y, theme::CHECKBOX_SIZE, theme::CHECKBOX_SIZE);

        let id = self.interaction.next_id();
        self.interaction.report_hover(id, boxed);
        self.interaction.mark_pressed(id);
        let changed = self.interaction.clicked(id);
        if changed {
            *value = !*value;
        }

        surface.fill_rect(boxed, theme::CHECKBOX_BG);
        surface.stroke_rect(boxed, theme::OUTLINE);
        if *value {
            surface.fill_rect(
                Rect::new(boxed.x + 3.0, boxed.y + 3.0, boxed.w - 6.0, boxed.h - 6.0),
                theme::CHECKBOX_MARK,
            );
        }
        surface.text(
            boxed.right() + 6.0,
            boxed.y + boxed.h - 4.0,
            label,
            theme::TEXT_DARK,
        );

        changed
    }

    /// Horizontal slider over `[min, max]`. The handle captures the pointer
    /// on press and tracks it until release, even outside the track. True on
    /// frames the value changed.
    pub fn slider(
        &mut self,
        surface: &mut dyn DrawSurface,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> bool {
        let Some(cursor) = self.cursor_mut() else {
            return false;
        };
        let avail = cursor.avail_w();
        let row = cursor.place(avail, WIDGET_ROW_H);
        let rect = Rect::new(
            row.x + WIDGET_MARGIN,
            row.y,
            (avail - WIDGET_MARGIN).max(0.0),
            row.h,
        );

        surface.fill_rect(rect, theme::SLIDER_BG);
        surface.stroke_rect(rect, theme::OUTLINE);

        let span = max - min;
        let travel = rect.w - theme::SLIDER_HANDLE_W;
        let id = self.interaction.next_id();
        self.interaction.report_hover(id, rect);
        self.interaction.mark_pressed(id);

        let mut changed = false;
        // degenerate range or zero travel: still drawn, never updated
        if self.interaction.is_active(id) && span > 0.0 && travel > 0.0 {
            let rel = ((self.interaction.mouse.x - rect.x) / travel).clamp(0.0, 1.0);
            let next = min + rel * span;
            if next != *value {
                *value = next;
                changed = true;
            }
        }

        let t = if span > 0.0 {
            ((*value - min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        surface.fill_rect(
            Rect::new(
                rect.x + t * travel.max(0.0),
                rect.y,
                theme::SLIDER_HANDLE_W,
                rect.h,
            ),
            theme::SLIDER_HANDLE,
        );
        surface.text(
            rect.x + 8.0,
            rect.y + 4.0,
            &format!("{label}: {value:.2}"),
            theme::TEXT_DARK,
        );

        changed
    }

    /// Static text row.
    pub fn label(&mut self, surface: &mut dyn DrawSurface, text: &str) {
        let Some(cursor) = self.cursor_mut() else {
            return;
        };
        let avail = cursor.avail_w();
        let row = cursor.place(avail, WIDGET_ROW_H);
        surface.text(
            row.x + WIDGET_MARGIN,
            row.y + 4.0,
            text,
            theme::TEXT_LIGHT,
        );
    }

    /// Read-only text field that takes keyboard focus on click. Editing is
    /// the host's concern (it owns the event loop and the string); the field
    /// only displays `text` and tracks focus, so it always returns false.
    pub fn text_input(&mut self, surface: &mut dyn DrawSurface, label: &str, text: &str) -> bool {
        let Some(cursor) = self.cursor_mut() else {
            return false;
        };
        let avail = cursor.avail_w();
        let row = cursor.place(avail, WIDGET_ROW_H);
        let rect = Rect::new(
            row.x + WIDGET_MARGIN,
            row.y,
            (avail - WIDGET_MARGIN).max(0.0),
            row.h,
        );

        let id = self.interaction.next_id();
        let hovered = self.interaction.report_hover(id, rect);
        if hovered && self.interaction.mouse.left_pressed {
            self.focused_input = Some(id);
        }

        surface.fill_rect(rect, theme::INPUT_BG);
        let outline = if self.focused_input == Some(id) {
            theme::INPUT_FOCUS
        } else {
            theme::OUTLINE
        };
        surface.stroke_rect(rect, outline);
        surface.text(rect.x + 8.0, rect.y + 4.0, text, theme::TEXT_DARK);
        surface.text(
            rect.right() - 8.0 - text_width(label),
            rect.y + 4.0,
            label,
            theme::TEXT_DIM,
        );

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::NullSurface;
    use crate::MouseState;

    const GLOBAL: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    const PANEL: Rect = Rect::new(0.0, 0.0, 300.0, 400.0);

    fn press(x: f32, y: f32) -> MouseState {
        MouseState {
            x,
            y,
            left_down: true,
            left_pressed: true,
            ..Default::default()
        }
    }

    fn release(x: f32, y: f32) -> MouseState {
        MouseState {
            x,
            y,
            left_released: true,
            ..Default::default()
        }
    }

    // first widget row starts at panel origin + body inset: (8, 32)

    #[test]
    fn test_button_fires_on_release_over_it() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;

        // button rect: (8, 32, 80, 30)
        gui.begin_frame(press(20.0, 40.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(!gui.button(&mut surface, "Go"));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);

        gui.begin_frame(release(20.0, 40.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(gui.button(&mut surface, "Go"));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
    }

    #[test]
    fn test_button_press_then_release_elsewhere_does_not_fire() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;

        gui.begin_frame(press(20.0, 40.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        gui.button(&mut surface, "Go");
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);

        gui.begin_frame(release(250.0, 350.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(!gui.button(&mut surface, "Go"));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
    }

    #[test]
    fn test_checkbox_toggles_on_click() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;
        let mut on = false;

        // checkbox box: (8, 32, 16, 16)
        gui.begin_frame(press(12.0, 36.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(!gui.checkbox(&mut surface, "Flag", &mut on));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
        assert!(!on);

        gui.begin_frame(release(12.0, 36.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(gui.checkbox(&mut surface, "Flag", &mut on));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
        assert!(on);
    }

    #[test]
    fn test_slider_captures_and_clamps() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;
        let mut v = 0.0f32;

        // slider rect: x 12..296, y 32..52, travel w - 16
        gui.begin_frame(press(150.0, 40.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(gui.slider(&mut surface, "V", &mut v, 0.0, 10.0));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
        assert!(v > 0.0 && v < 10.0);

        // still held, pointer way past the right end: clamps to max and
        // keeps tracking even though the pointer left the rect
        let held = MouseState {
            x: 700.0,
            y: 300.0,
            left_down: true,
            ..Default::default()
        };
        gui.begin_frame(held);
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        gui.slider(&mut surface, "V", &mut v, 0.0, 10.0);
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
        assert!((v - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_slider_degenerate_range_never_changes() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;
        let mut v = 5.0f32;

        gui.begin_frame(press(150.0, 40.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(!gui.slider(&mut surface, "V", &mut v, 5.0, 5.0));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
        assert!((v - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_widgets_without_panel_scope_are_noops() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;
        let mut on = true;
        let mut v = 1.0f32;

        gui.begin_frame(press(20.0, 40.0));
        // no begin_panel
        assert!(!gui.button(&mut surface, "Go"));
        assert!(!gui.checkbox(&mut surface, "Flag", &mut on));
        assert!(!gui.slider(&mut surface, "V", &mut v, 0.0, 10.0));
        assert!(!gui.text_input(&mut surface, "Name", "abc"));
        gui.label(&mut surface, "text");
        gui.end_frame(&mut surface, GLOBAL);
        assert!(on);
        assert!((v - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_text_input_takes_focus_on_click() {
        let mut gui = Gui::new();
        let mut surface = NullSurface;

        gui.begin_frame(press(150.0, 40.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(!gui.text_input(&mut surface, "Name", "abc"));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
        assert!(gui.focused_input.is_some());
    }

    #[test]
    fn test_widget_rows_do_not_overlap() {
        // declaration order fixes geometry: stack a few rows and check the
        // second button lands a full row below the first
        let mut gui = Gui::new();
        let mut surface = NullSurface;

        // press between the two buttons' rows must fire neither
        // button 1: y 32..62, button 2 after spacing: y 70..100
        gui.begin_frame(press(20.0, 65.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        gui.button(&mut surface, "A");
        gui.button(&mut surface, "B");
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);

        gui.begin_frame(release(20.0, 65.0));
        gui.begin_panel(&mut surface, "P", PANEL, 1.0);
        assert!(!gui.button(&mut surface, "A"));
        assert!(!gui.button(&mut surface, "B"));
        gui.end_panel();
        gui.end_frame(&mut surface, GLOBAL);
    }
}
