//! Theme module for the egui application
//!
//! Resolves the accent-derived visual tokens from the current preferences
//! and applies them to the egui context. Tokens are recomputed on every
//! preference change and applied as a unit; nothing here is cached or read
//! back.

use egui::Color32;

use crate::models::preferences::{AccentColor, Theme};

/// The accent-derived token set. Every member except `hover` resolves to
/// the same primary color so the interactive surfaces never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Primary interactive color
    pub primary: Color32,

    /// Focus-ring color
    pub ring: Color32,

    /// Sidebar highlight color
    pub sidebar_primary: Color32,

    /// Border color for focused inputs
    pub border_focus: Color32,

    /// Hover color; the only theme-dependent token
    pub hover: Color32,
}

impl ThemeTokens {
    pub fn resolve(accent: AccentColor, theme: Theme) -> Self {
        let primary = accent_primary(accent);
        Self {
            primary,
            ring: primary,
            sidebar_primary: primary,
            border_focus: primary,
            hover: accent_hover(accent, theme),
        }
    }

    /// Apply the tokens to an egui context. The base visuals for `theme`
    /// are rebuilt from scratch first, so nothing from the previously
    /// applied theme survives the switch.
    pub fn apply_to_context(&self, theme: Theme, ctx: &egui::Context) {
        let mut visuals = match theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };

        visuals.hyperlink_color = self.primary;
        // Selected sidebar items render through the selection colors
        visuals.selection.bg_fill = self.sidebar_primary;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.ring);
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.hovered.weak_bg_fill = self.hover;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, self.border_focus);
        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.weak_bg_fill = self.primary;

        ctx.set_visuals(visuals);
    }
}

/// Primary color for each accent.
pub fn accent_primary(accent: AccentColor) -> Color32 {
    match accent {
        AccentColor::Blue => Color32::from_rgb(0x19, 0x76, 0xD2),
        AccentColor::Purple => Color32::from_rgb(0x62, 0x00, 0xEE),
        AccentColor::Green => Color32::from_rgb(0x16, 0xA3, 0x4A),
        AccentColor::Orange => Color32::from_rgb(0xEA, 0x58, 0x0C),
        AccentColor::Red => Color32::from_rgb(0xDC, 0x26, 0x26),
        AccentColor::Pink => Color32::from_rgb(0xDB, 0x27, 0x77),
    }
}

/// Hover color for each accent. The light and dark tables are separate;
/// only the active theme's table is ever applied.
pub fn accent_hover(accent: AccentColor, theme: Theme) -> Color32 {
    match theme {
        Theme::Light => match accent {
            AccentColor::Blue => Color32::from_rgb(0x15, 0x65, 0xC0),
            AccentColor::Purple => Color32::from_rgb(0x52, 0x00, 0xC6),
            AccentColor::Green => Color32::from_rgb(0x15, 0x80, 0x3D),
            AccentColor::Orange => Color32::from_rgb(0xC2, 0x41, 0x0C),
            AccentColor::Red => Color32::from_rgb(0xB9, 0x1C, 0x1C),
            AccentColor::Pink => Color32::from_rgb(0xBE, 0x18, 0x5D),
        },
        Theme::Dark => match accent {
            AccentColor::Blue => Color32::from_rgb(0x42, 0xA5, 0xF5),
            AccentColor::Purple => Color32::from_rgb(0x7C, 0x4D, 0xFF),
            AccentColor::Green => Color32::from_rgb(0x22, 0xC5, 0x5E),
            AccentColor::Orange => Color32::from_rgb(0xFB, 0x92, 0x3C),
            AccentColor::Red => Color32::from_rgb(0xEF, 0x44, 0x44),
            AccentColor::Pink => Color32::from_rgb(0xEC, 0x48, 0x99),
        },
    }
}

/// Convert Color32 to hex string for display
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}
