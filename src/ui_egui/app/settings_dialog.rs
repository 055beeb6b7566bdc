//! Appearance settings dialog.
//!
//! Every control applies and persists immediately; there is no save button.

use super::TeamPulseApp;
use crate::models::preferences::{AccentColor, SidebarStyle, Theme};
use crate::ui_egui::theme::{accent_primary, color_to_hex};
use egui::RichText;

impl TeamPulseApp {
    pub(super) fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_dialog;
        let mut appearance_changed = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.heading("Appearance");
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Theme:");
                    for theme in Theme::ALL {
                        if ui
                            .selectable_label(self.prefs.theme() == theme, theme.label())
                            .clicked()
                        {
                            self.prefs.set_theme(theme);
                            appearance_changed = true;
                        }
                    }
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Accent color:");
                    for accent in AccentColor::ALL {
                        let selected = self.prefs.accent_color() == accent;
                        let swatch = egui::Button::new(
                            RichText::new(accent.label()).color(egui::Color32::WHITE),
                        )
                        .fill(accent_primary(accent))
                        .selected(selected);

                        if ui
                            .add(swatch)
                            .on_hover_text(color_to_hex(accent_primary(accent)))
                            .clicked()
                        {
                            self.prefs.set_accent_color(accent);
                            appearance_changed = true;
                        }
                    }
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Sidebar:");
                    for style in SidebarStyle::ALL {
                        if ui
                            .selectable_label(self.prefs.sidebar_style() == style, style.label())
                            .clicked()
                        {
                            self.prefs.set_sidebar_style(style);
                        }
                    }
                });

                ui.add_space(12.0);
                ui.separator();

                if ui.button("Reset to defaults").clicked() {
                    self.prefs.reset_to_defaults();
                    appearance_changed = true;
                }
            });

        self.show_settings_dialog = open;

        if appearance_changed {
            self.apply_theme(ctx);
        }
    }
}
