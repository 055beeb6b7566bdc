//! Navigation sidebar, rendered compact or expanded per preference.

use super::{Page, TeamPulseApp};
use crate::models::preferences::SidebarStyle;

const COMPACT_WIDTH: f32 = 56.0;
const EXPANDED_WIDTH: f32 = 180.0;

impl TeamPulseApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let compact = self.prefs.sidebar_style() == SidebarStyle::Compact;
        let width = if compact { COMPACT_WIDTH } else { EXPANDED_WIDTH };

        egui::SidePanel::left("sidebar")
            .exact_width(width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.nav_button(ui, compact, Page::DailyWins, "📝", "Daily Wins");
                self.nav_button(ui, compact, Page::People, "👥", "People");

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(12.0);

                    let settings_label = if compact { "⚙".to_string() } else { "⚙ Settings".to_string() };
                    if ui.button(settings_label).clicked() {
                        self.show_settings_dialog = true;
                    }

                    let sign_out_label = if compact { "🚪".to_string() } else { "🚪 Sign Out".to_string() };
                    if ui.button(sign_out_label).clicked() {
                        self.sign_out();
                    }
                });
            });
    }

    fn nav_button(&mut self, ui: &mut egui::Ui, compact: bool, page: Page, icon: &str, label: &str) {
        let text = if compact {
            icon.to_string()
        } else {
            format!("{} {}", icon, label)
        };

        if ui.selectable_label(self.page == page, text).clicked() {
            self.page = page;
        }
        ui.add_space(4.0);
    }
}
