//! Draw backend seam
//!
//! The core emits every draw call through [`DrawSurface`] so the interaction
//! machinery stays independent of the renderer. [`MacroquadSurface`] is the
//! production backend; [`NullSurface`] drops everything, which is what headless
//! tests and benchmarks want.

use macroquad::prelude::{draw_rectangle, draw_rectangle_lines, Color};

use super::font::{self, GLYPH_ADVANCE};
use super::Rect;

/// Primitive sink for one frame's worth of UI drawing
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn glyph(&mut self, x: f32, y: f32, c: char, color: Color);

    /// Compose a text run out of glyphs at a fixed advance
    fn text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        let mut cx = x;
        for c in text.chars() {
            self.glyph(cx, y, c, color);
            cx += GLYPH_ADVANCE;
        }
    }
}

/// Renderer that draws to the current macroquad frame
pub struct MacroquadSurface;

impl DrawSurface for MacroquadSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, color);
    }

    fn glyph(&mut self, x: f32, y: f32, c: char, color: Color) {
        let Some(rows) = font::glyph_rows(c) else {
            return;
        };
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                if bits & (1 << col) != 0 {
                    draw_rectangle(x + col as f32, y + row as f32, 1.0, 1.0, color);
                }
            }
        }
    }
}

/// Renderer that discards everything; for headless hosts and tests
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: Rect, _color: Color) {}
    fn glyph(&mut self, _x: f32, _y: f32, _c: char, _color: Color) {}
}
