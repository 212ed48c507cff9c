//! Sign-in page.

use eframe::egui::{self, CornerRadius, Key, Margin, RichText, Ui};
use egui_phosphor::regular::SIGN_IN;

use super::app::App;
use super::components::{colors, primary_button_with_icon};
use crate::config::AuthConfig;

/// Login form input.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn is_filled(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

/// Whether the entered credentials are the configured operator's.
pub fn credentials_match(auth: &AuthConfig, username: &str, password: &str) -> bool {
    username.trim() == auth.username && password == auth.password
}

/// Show the login page.
pub fn show(app: &mut App, ui: &mut Ui) {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("Staffdesk").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Applicant tracking and employee management").size(14.0).weak());
        ui.add_space(30.0);

        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(20))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_width(320.0);

                egui::Grid::new("login_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Username:");
                        ui.add(egui::TextEdit::singleline(&mut app.login.username).desired_width(200.0));
                        ui.end_row();

                        ui.label("Password:");
                        let password =
                            ui.add(egui::TextEdit::singleline(&mut app.login.password).password(true).desired_width(200.0));
                        if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                            submit = true;
                        }
                        ui.end_row();
                    });

                if let Some(error) = &app.login.error {
                    ui.add_space(10.0);
                    ui.colored_label(colors::ERROR, error);
                }

                ui.add_space(15.0);
                if primary_button_with_icon(ui, app.login.is_filled(), SIGN_IN, "Sign in").clicked() {
                    submit = true;
                }
            });
    });

    if submit && app.login.is_filled() {
        app.try_login();
    }
}
