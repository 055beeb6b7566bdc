//! People directory view with search and filter controls.

use super::super::TeamPulseApp;
use crate::models::people::EmployeeStatus;
use crate::services::people::distinct_values;
use egui::RichText;

impl TeamPulseApp {
    pub(in crate::ui_egui) fn render_people(&mut self, ui: &mut egui::Ui) {
        if !self.employees_loaded {
            self.employees = self.api.employees();
            self.employees_loaded = true;
            log::info!("Loaded {} employees", self.employees.len());
        }

        ui.horizontal(|ui| {
            ui.heading("People");
            if ui.button("⟳ Refresh").clicked() {
                self.employees = self.api.employees();
            }
        });
        ui.label("Browse and filter the employee directory");
        ui.add_space(8.0);

        let roles = distinct_values(&self.employees, |e| e.role.as_str());
        let departments = distinct_values(&self.employees, |e| e.department.as_str());
        let classifications = distinct_values(&self.employees, |e| e.classification.as_str());

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.filter.search)
                    .hint_text("Search name, email or code")
                    .desired_width(220.0),
            );

            egui::ComboBox::from_label("Status")
                .selected_text(match self.filter.status {
                    None => "All",
                    Some(EmployeeStatus::Active) => "Active",
                    Some(EmployeeStatus::Inactive) => "Inactive",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.status, None, "All");
                    ui.selectable_value(
                        &mut self.filter.status,
                        Some(EmployeeStatus::Active),
                        "Active",
                    );
                    ui.selectable_value(
                        &mut self.filter.status,
                        Some(EmployeeStatus::Inactive),
                        "Inactive",
                    );
                });

            option_combo(ui, "Role", &mut self.filter.role, &roles);
            option_combo(ui, "Department", &mut self.filter.department, &departments);
            option_combo(
                ui,
                "Classification",
                &mut self.filter.classification,
                &classifications,
            );
        });

        ui.add_space(8.0);

        let matched = self.filter.apply(&self.employees);

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("people_table")
                .striped(true)
                .num_columns(7)
                .min_col_width(80.0)
                .show(ui, |ui| {
                    for header in [
                        "Code",
                        "Name",
                        "Email",
                        "Role",
                        "Department",
                        "Classification",
                        "Status",
                    ] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for employee in &matched {
                        ui.label(employee.emp_code.as_str());
                        ui.label(employee.name.as_str());
                        ui.label(employee.email.as_str());
                        ui.label(employee.role.as_str());
                        ui.label(employee.department.as_str());
                        ui.label(employee.classification.as_str());
                        ui.label(employee.status.as_str());
                        ui.end_row();
                    }
                });

            if matched.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new("No matching people").weak());
            }
        });
    }
}

fn option_combo(ui: &mut egui::Ui, label: &str, slot: &mut Option<String>, values: &[String]) {
    egui::ComboBox::from_label(label)
        .selected_text(slot.clone().unwrap_or_else(|| "All".to_string()))
        .show_ui(ui, |ui| {
            ui.selectable_value(slot, None, "All");
            for value in values {
                ui.selectable_value(slot, Some(value.clone()), value.as_str());
            }
        });
}
