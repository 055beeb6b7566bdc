//! Daily-wins journal view: date navigation, month-grid picker, note form.

use super::super::TeamPulseApp;
use crate::utils::date::MonthCell;
use chrono::Datelike;
use egui::RichText;

impl TeamPulseApp {
    pub(in crate::ui_egui) fn render_daily_wins(&mut self, ui: &mut egui::Ui) {
        self.ensure_note_loaded();

        ui.heading("Daily Wins");
        ui.label("Track your daily progress and achievements");
        ui.add_space(8.0);

        if let Some(profile) = self.profile.clone() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&profile.initials).strong().size(22.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&profile.name).strong());
                        ui.label(&profile.team);
                        if !profile.badge.is_empty() {
                            ui.label(RichText::new(&profile.badge).small().weak());
                        }
                    });
                });
            });
            ui.add_space(8.0);
        }

        ui.horizontal(|ui| {
            if ui.button("◀ Previous Day").clicked() {
                self.cursor.previous_day();
            }

            if ui
                .button(RichText::new(self.cursor.label()).strong())
                .clicked()
            {
                self.show_calendar_popup = !self.show_calendar_popup;
            }

            // The journal never shows a future day
            if ui
                .add_enabled(self.cursor.can_advance(), egui::Button::new("Next Day ▶"))
                .clicked()
            {
                self.cursor.next_day();
            }
        });

        if self.show_calendar_popup {
            self.render_calendar_popup(ui.ctx());
        }

        ui.add_space(12.0);

        ui.group(|ui| {
            ui.heading("Record Your Progress");
            ui.label("Document your achievements and learnings for today");
            ui.add_space(8.0);

            ui.label(RichText::new("Today's Accomplishments").strong());
            ui.add(
                egui::TextEdit::multiline(&mut self.note.wins)
                    .hint_text("What did you accomplish today?")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);

            ui.label(RichText::new("Today's Learning").strong());
            ui.add(
                egui::TextEdit::multiline(&mut self.note.learnings)
                    .hint_text("What did you learn today?")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Submit Daily Wins").clicked() {
                    self.submit_note();
                }
                if let Some(ref status) = self.save_status {
                    ui.label(status);
                }
            });
        });
    }

    /// Refetch the note whenever the cursor moves to a different day.
    fn ensure_note_loaded(&mut self) {
        let selected = self.cursor.selected();
        if self.note_date != Some(selected) {
            self.note = self.api.daily_note(selected).unwrap_or_default();
            self.note_date = Some(selected);
            self.save_status = None;
        }
    }

    fn render_calendar_popup(&mut self, ctx: &egui::Context) {
        let mut open = self.show_calendar_popup;
        let selected = self.cursor.selected();

        egui::Window::new("📅 Go to Date")
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(selected.format("%B %Y").to_string()).strong());
                });
                ui.separator();

                let day_names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
                egui::Grid::new("journal_calendar_grid")
                    .num_columns(7)
                    .spacing([4.0, 2.0])
                    .min_col_width(32.0)
                    .show(ui, |ui| {
                        for name in &day_names {
                            ui.label(RichText::new(*name).small().strong());
                        }
                        ui.end_row();

                        let mut column = 0;
                        for cell in self.cursor.month_grid() {
                            match cell {
                                MonthCell::Placeholder => {
                                    ui.label("");
                                }
                                MonthCell::Day(day) => {
                                    let is_selected = day == selected.day();
                                    if ui
                                        .selectable_label(is_selected, day.to_string())
                                        .clicked()
                                    {
                                        if let Err(err) = self.cursor.jump_to_day(day) {
                                            log::warn!("Rejected day selection: {}", err);
                                        }
                                        self.show_calendar_popup = false;
                                    }
                                }
                            }
                            column += 1;
                            if column == 7 {
                                ui.end_row();
                                column = 0;
                            }
                        }
                    });

                ui.separator();
                if ui.button("Go to Today").clicked() {
                    self.cursor.go_to_today();
                    self.show_calendar_popup = false;
                }
            });

        if !open {
            self.show_calendar_popup = false;
        }
    }

    fn submit_note(&mut self) {
        let employee_id = self
            .profile
            .as_ref()
            .map(|profile| profile.badge.clone())
            .unwrap_or_default();

        let saved = self
            .api
            .save_daily_note(&employee_id, self.cursor.selected(), &self.note);

        self.save_status = Some(if saved {
            "Saved".to_string()
        } else {
            "Save failed, changes were not stored".to_string()
        });
    }
}
