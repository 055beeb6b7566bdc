//! Sign-in screen shown until a session is established.

use super::super::TeamPulseApp;
use egui::RichText;

impl TeamPulseApp {
    pub(in crate::ui_egui) fn render_login(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.heading("TeamPulse");
                ui.label("Sign in to continue");
                ui.add_space(16.0);

                let field_width = 260.0;

                ui.add(
                    egui::TextEdit::singleline(&mut self.login.credentials.email)
                        .hint_text("Email")
                        .desired_width(field_width),
                );
                if let Some(error) = self.login.field_errors.email {
                    ui.label(RichText::new(error).color(ui.visuals().error_fg_color).small());
                }

                ui.add_space(6.0);

                ui.add(
                    egui::TextEdit::singleline(&mut self.login.credentials.password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(field_width),
                );
                if let Some(error) = self.login.field_errors.password {
                    ui.label(RichText::new(error).color(ui.visuals().error_fg_color).small());
                }

                ui.add_space(12.0);

                if let Some(ref message) = self.login.server_error {
                    ui.label(
                        RichText::new(message)
                            .color(ui.visuals().error_fg_color)
                            .strong(),
                    );
                    ui.add_space(6.0);
                }

                let submitted = ui.button("Sign In").clicked()
                    || ui.input(|input| input.key_pressed(egui::Key::Enter));
                if submitted {
                    self.submit_login();
                }
            });
        });
    }

    fn submit_login(&mut self) {
        self.login.server_error = None;
        self.login.field_errors = self.login.credentials.validate();
        if !self.login.field_errors.is_empty() {
            return;
        }

        let result = self
            .api
            .sign_in(&self.login.credentials.email, &self.login.credentials.password);

        if result.success {
            log::info!("Signed in as {}", self.login.credentials.email);
            self.session = Some(result.user.unwrap_or_default());
            self.profile = self.api.self_profile();
        } else {
            self.login.server_error = result.message;
        }
    }
}
