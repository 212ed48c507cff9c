//! First-run setup wizard for configuration.

use crate::client::ApiClient;
use crate::config::AppConfig;
use eframe::egui::{self, Color32, RichText};
use std::path::PathBuf;
use std::sync::mpsc;

/// Connection test state.
#[derive(Default, Clone)]
pub enum ConnectionTestState {
    #[default]
    NotTested,
    Testing,
    Success,
    Failed(String),
}

/// Setup wizard state.
pub struct SetupWizard {
    /// Current step (0-4).
    pub current_step: usize,
    /// Configuration being built.
    pub config: AppConfig,
    /// Backend connection test state.
    pub api_test_state: ConnectionTestState,
    /// Wizard completed flag.
    pub completed: bool,
    /// Timeout input as string for text editing.
    timeout_input: String,
    /// Toast duration input as string.
    toast_input: String,
    /// Password typed a second time.
    password_confirm: String,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    pub fn new() -> Self {
        let config = AppConfig::default();
        Self {
            current_step: 0,
            timeout_input: config.api.timeout_secs.to_string(),
            toast_input: config.ui.toast_duration_secs.to_string(),
            password_confirm: config.auth.password.clone(),
            config,
            api_test_state: ConnectionTestState::NotTested,
            completed: false,
        }
    }

    /// Check if user can proceed to next step.
    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            0 => true, // Welcome - always can proceed
            1 => self.validate_api_step().is_ok(),
            2 => self.validate_operator_step().is_ok(),
            3 => self.validate_preferences_step().is_ok(),
            4 => self.config.validate().is_ok(),
            _ => false,
        }
    }

    /// Validate backend step inputs. The connection test is optional.
    fn validate_api_step(&self) -> Result<(), String> {
        let url = self.config.api.base_url.trim();
        if url.is_empty() {
            return Err("API URL cannot be empty".to_string());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err("API URL must start with http:// or https://".to_string());
        }
        if self.config.api.timeout_secs < 1 {
            return Err("Timeout must be at least 1 second".to_string());
        }
        Ok(())
    }

    /// Validate operator step inputs.
    fn validate_operator_step(&self) -> Result<(), String> {
        if self.config.auth.username.trim().is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if self.config.auth.password.is_empty() {
            return Err("Password cannot be empty".to_string());
        }
        if self.config.auth.password != self.password_confirm {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }

    /// Validate preferences step inputs.
    fn validate_preferences_step(&self) -> Result<(), String> {
        if !(1..=60).contains(&self.config.ui.toast_duration_secs) {
            return Err("Notification time must be between 1 and 60 seconds".to_string());
        }
        Ok(())
    }

    /// Get step title.
    fn step_title(&self) -> &'static str {
        match self.current_step {
            0 => "Welcome",
            1 => "Backend Connection",
            2 => "Operator Account",
            3 => "Preferences",
            4 => "Confirmation",
            _ => "Setup",
        }
    }

    /// Total number of steps.
    const TOTAL_STEPS: usize = 5;
}

/// Setup wizard application.
pub struct SetupApp {
    pub wizard: SetupWizard,
    pub initial_error: Option<String>,
    pub rt: tokio::runtime::Runtime,
    config_path: PathBuf,
    api_test_rx: Option<mpsc::Receiver<Result<(), String>>>,
}

impl SetupApp {
    pub fn new(
        wizard: SetupWizard,
        initial_error: Option<String>,
        rt: tokio::runtime::Runtime,
        config_path: PathBuf,
    ) -> Self {
        Self {
            wizard,
            initial_error,
            rt,
            config_path,
            api_test_rx: None,
        }
    }

    /// Test the backend connection asynchronously.
    fn start_api_test(&mut self) {
        let api = self.wizard.config.api.clone();
        let (tx, rx) = mpsc::channel();
        self.api_test_rx = Some(rx);
        self.wizard.api_test_state = ConnectionTestState::Testing;

        self.rt.spawn(async move {
            let result = match ApiClient::new(&api) {
                Ok(client) => match client.test_connection().await {
                    Ok(true) => Ok(()),
                    Ok(false) => Err("No HR backend found at this URL".to_string()),
                    Err(e) => Err(e.to_string()),
                },
                Err(e) => Err(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for async test results.
    fn poll_test_results(&mut self) {
        if let Some(rx) = &self.api_test_rx
            && let Ok(result) = rx.try_recv()
        {
            self.wizard.api_test_state = match result {
                Ok(()) => ConnectionTestState::Success,
                Err(e) => ConnectionTestState::Failed(e),
            };
            self.api_test_rx = None;
        }
    }
}

impl eframe::App for SetupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async test results
        self.poll_test_results();

        // Request repaint while testing
        if matches!(self.wizard.api_test_state, ConnectionTestState::Testing) {
            ctx.request_repaint();
        }

        // Show initial error dialog
        if let Some(err) = self.initial_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(Color32::from_rgb(255, 100, 100), &err);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.initial_error = None;
                    }
                });
            return;
        }

        // Main wizard panel
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Staffdesk Setup").size(24.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "Step {} of {}",
                            self.wizard.current_step + 1,
                            SetupWizard::TOTAL_STEPS
                        ));
                    });
                });

                ui.separator();
                ui.add_space(10.0);

                // Step title
                ui.heading(self.wizard.step_title());
                ui.add_space(20.0);

                // Step content
                let needs_api_test = match self.wizard.current_step {
                    0 => {
                        show_welcome_step(ui);
                        false
                    }
                    1 => show_api_step(ui, &mut self.wizard),
                    2 => {
                        show_operator_step(ui, &mut self.wizard);
                        false
                    }
                    3 => {
                        show_preferences_step(ui, &mut self.wizard);
                        false
                    }
                    4 => {
                        show_confirmation_step(ui, &self.wizard, &self.config_path);
                        false
                    }
                    _ => false,
                };

                if needs_api_test {
                    self.start_api_test();
                }

                ui.add_space(30.0);
                ui.separator();

                // Navigation buttons
                ui.horizontal(|ui| {
                    if self.wizard.current_step > 0 && ui.button("< Back").clicked() {
                        self.wizard.current_step -= 1;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let enabled = self.wizard.can_proceed();
                        if self.wizard.current_step < SetupWizard::TOTAL_STEPS - 1 {
                            let btn_text = if self.wizard.current_step == 0 {
                                "Get Started >"
                            } else {
                                "Next >"
                            };
                            if ui.add_enabled(enabled, egui::Button::new(btn_text)).clicked() {
                                self.wizard.current_step += 1;
                            }
                        } else if ui.add_enabled(enabled, egui::Button::new("Save & Exit")).clicked() {
                            self.wizard.completed = true;
                        }
                    });
                });
            });
        });

        // Handle completion
        if self.wizard.completed {
            match self.wizard.config.save(&self.config_path) {
                Ok(()) => {
                    tracing::info!("Config saved to {:?}", self.config_path);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    tracing::error!("Failed to save config: {}", e);
                    self.initial_error = Some(format!("Failed to save config: {}", e));
                    self.wizard.completed = false;
                }
            }
        }
    }
}

fn show_welcome_step(ui: &mut egui::Ui) {
    ui.label("Welcome to Staffdesk!");
    ui.add_space(10.0);
    ui.label("This wizard will help you configure the application.");
    ui.add_space(20.0);
    ui.label("You will need:");
    ui.add_space(5.0);
    ui.label("  - The address of the HR backend API");
    ui.label("  - A username and password for the operator account");
}

fn show_api_step(ui: &mut egui::Ui, wizard: &mut SetupWizard) -> bool {
    let mut needs_test = false;

    egui::Grid::new("api_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("API URL:");
            if ui.text_edit_singleline(&mut wizard.config.api.base_url).changed() {
                wizard.api_test_state = ConnectionTestState::NotTested;
            }
            ui.end_row();

            ui.label("Timeout (seconds):");
            if ui.text_edit_singleline(&mut wizard.timeout_input).changed()
                && let Ok(t) = wizard.timeout_input.parse()
            {
                wizard.config.api.timeout_secs = t;
            }
            ui.end_row();

            ui.label("Certificates:");
            ui.checkbox(
                &mut wizard.config.api.accept_invalid_certs,
                "Accept self-signed certificates",
            );
            ui.end_row();
        });

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        let testing = matches!(wizard.api_test_state, ConnectionTestState::Testing);
        let valid = wizard.validate_api_step().is_ok();
        if ui
            .add_enabled(!testing && valid, egui::Button::new("Test Connection"))
            .clicked()
        {
            needs_test = true;
        }

        ui.add_space(10.0);

        match &wizard.api_test_state {
            ConnectionTestState::NotTested => {
                ui.label("Not tested");
            }
            ConnectionTestState::Testing => {
                ui.spinner();
                ui.label("Testing...");
            }
            ConnectionTestState::Success => {
                ui.colored_label(Color32::from_rgb(100, 200, 100), "Connection successful!");
            }
            ConnectionTestState::Failed(e) => {
                ui.colored_label(
                    Color32::from_rgb(255, 200, 100),
                    format!("Backend not reachable: {} (you can still continue)", e),
                );
            }
        }
    });

    // Validation feedback
    if let Err(e) = wizard.validate_api_step() {
        ui.add_space(10.0);
        ui.colored_label(Color32::from_rgb(255, 100, 100), e);
    }

    needs_test
}

fn show_operator_step(ui: &mut egui::Ui, wizard: &mut SetupWizard) {
    ui.label("These credentials unlock the application on this computer.");
    ui.add_space(10.0);

    egui::Grid::new("operator_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Username:");
            ui.text_edit_singleline(&mut wizard.config.auth.username);
            ui.end_row();

            ui.label("Password:");
            ui.add(egui::TextEdit::singleline(&mut wizard.config.auth.password).password(true));
            ui.end_row();

            ui.label("Confirm password:");
            ui.add(egui::TextEdit::singleline(&mut wizard.password_confirm).password(true));
            ui.end_row();
        });

    if let Err(e) = wizard.validate_operator_step() {
        ui.add_space(10.0);
        ui.colored_label(Color32::from_rgb(255, 100, 100), e);
    }
}

fn show_preferences_step(ui: &mut egui::Ui, wizard: &mut SetupWizard) {
    egui::Grid::new("preferences_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Notification time (seconds):");
            if ui.text_edit_singleline(&mut wizard.toast_input).changed()
                && let Ok(s) = wizard.toast_input.parse()
            {
                wizard.config.ui.toast_duration_secs = s;
            }
            ui.end_row();

            ui.label("Theme:");
            ui.checkbox(&mut wizard.config.ui.dark_mode, "Dark mode");
            ui.end_row();
        });

    if let Err(e) = wizard.validate_preferences_step() {
        ui.add_space(10.0);
        ui.colored_label(Color32::from_rgb(255, 100, 100), e);
    }
}

fn show_confirmation_step(ui: &mut egui::Ui, wizard: &SetupWizard, path: &std::path::Path) {
    ui.label("Review your configuration:");
    ui.add_space(10.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Backend");
        ui.label(format!("  {}", wizard.config.api.base_url));
        ui.label(format!("  Timeout: {} seconds", wizard.config.api.timeout_secs));
        if wizard.config.api.accept_invalid_certs {
            ui.label("  Self-signed certificates accepted");
        }
    });

    ui.add_space(10.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Operator");
        ui.label(format!("  {}", wizard.config.auth.username));
    });

    ui.add_space(10.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Preferences");
        ui.label(format!(
            "  Notifications: {} seconds",
            wizard.config.ui.toast_duration_secs
        ));
        ui.label(format!(
            "  Theme: {}",
            if wizard.config.ui.dark_mode { "Dark" } else { "Light" }
        ));
    });

    ui.add_space(20.0);
    ui.label(format!("Click 'Save & Exit' to write {}.", path.display()));
    ui.label("You will need to restart the application after setup.");
}
