//! Fixed colors and metrics shared by panels and widgets

use macroquad::prelude::Color;

// =============================================================================
// Panel chrome
// =============================================================================

/// Panel body background (alpha is supplied per panel)
pub const PANEL_BG: Color = Color::new(0.30, 0.30, 0.30, 1.0);

/// Outline used for panels and most widgets
pub const OUTLINE: Color = Color::new(0.2, 0.2, 0.3, 1.0);

/// Title bar of the selected (frontmost) panel
pub const TITLE_BAR_SELECTED: Color = Color::new(0.07, 0.07, 0.07, 1.0);

/// Title bar of unselected panels
pub const TITLE_BAR_IDLE: Color = Color::new(0.13, 0.13, 0.13, 1.0);

/// Close button background
pub const CLOSE_BG: Color = Color::new(0.7, 0.3, 0.3, 1.0);

/// Close button background while hovered
pub const CLOSE_HOVER: Color = Color::new(0.8, 0.3, 0.3, 1.0);

/// Light text (titles, labels on dark ground)
pub const TEXT_LIGHT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Dark text (widget faces)
pub const TEXT_DARK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Dimmed text (input field labels)
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.4, 1.0);

// =============================================================================
// Widget faces
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.8, 0.8, 0.95, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.7, 0.7, 0.9, 1.0);
pub const BUTTON_PRESSED: Color = Color::new(0.6, 0.6, 0.8, 1.0);

pub const CHECKBOX_BG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const CHECKBOX_MARK: Color = Color::new(0.2, 0.8, 0.2, 1.0);

pub const SLIDER_BG: Color = Color::new(0.85, 0.85, 0.90, 1.0);
pub const SLIDER_HANDLE: Color = Color::new(0.4, 0.5, 0.8, 1.0);

pub const INPUT_BG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Focus ring around the active text input
pub const INPUT_FOCUS: Color = Color::new(0.0, 0.75, 0.9, 1.0);

// =============================================================================
// Docking overlays
// =============================================================================

pub const DOCK_ZONE: Color = Color::new(0.2, 0.5, 1.0, 0.3);
pub const DOCK_ZONE_HOVER: Color = Color::new(0.3, 0.5, 1.0, 0.5);
pub const DOCK_ZONE_GLOBAL: Color = Color::new(0.2, 0.7, 1.0, 0.3);
pub const DOCK_ZONE_GLOBAL_HOVER: Color = Color::new(0.3, 0.7, 1.0, 0.5);

// =============================================================================
// Metrics
// =============================================================================

/// Title bar height
pub const TITLE_BAR_H: f32 = 24.0;

/// Close button side length
pub const CLOSE_SIZE: f32 = 16.0;

/// Body cursor inset from the panel's left edge
pub const BODY_INSET_X: f32 = 8.0;

/// Body cursor inset from the panel's top edge (below the title bar)
pub const BODY_INSET_Y: f32 = 32.0;

/// Extra left margin applied by individual widgets
pub const WIDGET_MARGIN: f32 = 4.0;

/// Vertical spacing between stacked widgets
pub const WIDGET_SPACING: f32 = 8.0;

/// Standard row height for sliders, labels and inputs
pub const WIDGET_ROW_H: f32 = 20.0;

pub const BUTTON_W: f32 = 80.0;
pub const BUTTON_H: f32 = 30.0;
pub const CHECKBOX_SIZE: f32 = 16.0;
pub const SLIDER_HANDLE_W: f32 = 16.0;

/// Replace a color's alpha channel
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}
