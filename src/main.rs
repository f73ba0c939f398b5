//! Demo host: a few dockable panels over a plain background
//!
//! Run it, drag panels by their title bars, drop them on the blue zones over
//! other panels or the strips along the screen edges, and pull them free
//! again. `RUST_LOG=paneldock=debug` traces every dock transition.

use macroquad::prelude::*;
use paneldock::{Gui, MacroquadSurface, MouseState, Rect, VERSION};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("paneldock v{VERSION}"),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // ignore a second init when the host embeds its own subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn sample_mouse() -> MouseState {
    let (x, y) = mouse_position();
    MouseState {
        x,
        y,
        left_down: is_mouse_button_down(MouseButton::Left),
        left_pressed: is_mouse_button_pressed(MouseButton::Left),
        left_released: is_mouse_button_released(MouseButton::Left),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let mut gui = Gui::new();
    let mut surface = MacroquadSurface;

    let mut wireframe = false;
    let mut grid = true;
    let mut zoom = 1.0f32;
    let mut speed = 0.5f32;
    let mut clicks = 0u32;

    loop {
        clear_background(Color::new(0.12, 0.12, 0.14, 1.0));

        gui.begin_frame(sample_mouse());

        if gui.begin_panel(&mut surface, "Tools", Rect::new(40.0, 40.0, 240.0, 280.0), 0.95) {
            gui.label(&mut surface, "Viewport");
            gui.checkbox(&mut surface, "Wireframe", &mut wireframe);
            gui.checkbox(&mut surface, "Grid", &mut grid);
            gui.slider(&mut surface, "Zoom", &mut zoom, 0.25, 4.0);
            if gui.button(&mut surface, "Reset") {
                zoom = 1.0;
                speed = 0.5;
            }
            gui.end_panel();
        }

        if gui.begin_panel(
            &mut surface,
            "Inspector",
            Rect::new(320.0, 60.0, 260.0, 240.0),
            0.95,
        ) {
            gui.label(&mut surface, &format!("Clicks: {clicks}"));
            gui.slider(&mut surface, "Speed", &mut speed, 0.0, 1.0);
            if gui.button(&mut surface, "Click me") {
                clicks += 1;
            }
            gui.text_input(&mut surface, "Name", "entity_01");
            gui.end_panel();
        }

        if gui.begin_panel(&mut surface, "Log", Rect::new(120.0, 380.0, 320.0, 180.0), 0.9) {
            gui.label(&mut surface, "drag panels by the title bar");
            gui.label(&mut surface, "drop on a zone to dock");
            gui.label(&mut surface, "drag a docked panel to pop it out");
            gui.end_panel();
        }

        gui.end_frame(&mut surface, Rect::screen(screen_width(), screen_height()));

        next_frame().await;
    }
}
