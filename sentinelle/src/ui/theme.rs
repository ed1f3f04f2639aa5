//! # GUI Theme
//!
//! Dark community-green theme with an amber accent for the wheel and
//! highlights. High contrast, flat panels.

use egui::{Color32, Context, Stroke, Visuals};

/// Color palette used by every screen and widget.
#[derive(Clone)]
pub struct Theme {
    /// Near-black green background
    pub background: Color32,
    /// Panel fill
    pub panel: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text
    pub dim: Color32,
    /// Primary accent (buttons, active elements)
    pub accent: Color32,
    /// Darker accent for hover states
    pub accent_dark: Color32,
    /// Amber highlight (brand, headings, wheel pointer)
    pub selected: Color32,
    /// Success green
    pub success: Color32,
    /// Warning amber
    pub warning: Color32,
    /// Error red
    pub error: Color32,
    /// Info blue
    pub info: Color32,
    /// Panel borders
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(12, 17, 13),
            panel: Color32::from_rgb(22, 30, 24),
            text: Color32::from_rgb(235, 240, 235),
            dim: Color32::from_rgb(140, 150, 142),
            accent: Color32::from_rgb(46, 125, 50),
            accent_dark: Color32::from_rgb(27, 77, 31),
            selected: Color32::from_rgb(255, 179, 0),
            success: Color32::from_rgb(102, 187, 106),
            warning: Color32::from_rgb(255, 170, 0),
            error: Color32::from_rgb(229, 77, 66),
            info: Color32::from_rgb(100, 150, 255),
            border: Color32::from_rgb(45, 58, 48),
        }
    }
}

impl Theme {
    /// Install the palette into the egui context. Called once at startup.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(theme.text);
        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.panel;
        visuals.extreme_bg_color = Color32::from_rgb(8, 11, 9);
        visuals.selection.bg_fill = theme.accent_dark;

        visuals.widgets.noninteractive.bg_fill = theme.panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_fill = theme.panel;
        visuals.widgets.hovered.bg_fill = theme.accent_dark;
        visuals.widgets.active.bg_fill = theme.accent;

        ctx.set_visuals(visuals);
    }

    /// Segment colors for prize slices on the wheel.
    pub fn wheel_palette(&self) -> [Color32; 5] {
        [
            Color32::from_rgb(46, 125, 50),
            Color32::from_rgb(2, 119, 189),
            Color32::from_rgb(194, 107, 24),
            Color32::from_rgb(123, 31, 162),
            Color32::from_rgb(0, 121, 107),
        ]
    }
}
