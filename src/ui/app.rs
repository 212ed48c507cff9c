//! Main application UI.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate};
use eframe::egui::{self, Align, Align2, Layout, RichText};
use tokio::sync::mpsc;

use crate::client::{ApiClient, Mutation};
use crate::config::AppConfig;
use crate::display::Module;
use crate::error::Result;
use crate::export;
use crate::forms::{ApplicantForm, EmployeeForm};
use crate::models::{Applicant, Employee};
use crate::router::{Route, RouteGuard, resolve, resolve_route};
use crate::store::{
    ApplicantStore, AuthStore, ConfirmAction, ConfirmDialog, ConfirmDialogStore, EmployeeStore, ToastState, ToastStore,
};

use super::components::colors;
use super::login::{LoginForm, credentials_match};
use super::{applicant_panel, dashboard, employee_panel, login, table_view};

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    // Data loading
    ApplicantsLoaded(Vec<Applicant>),
    EmployeesLoaded(Vec<Employee>),
    LoadFailed(Module, String),

    // Mutations
    MutationSucceeded(Mutation),
    MutationFailed { mutation: Mutation, error: String },
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Main application state.
pub struct App {
    // Runtime and backend
    pub rt: tokio::runtime::Runtime,
    pub client: ApiClient,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub route: Route,
    /// Protected page requested before signing in.
    pub after_login: Option<Route>,

    // Stores
    pub auth: AuthStore,
    pub toasts: ToastStore,
    pub confirm: ConfirmDialogStore,
    pub applicants: ApplicantStore,
    pub employees: EmployeeStore,

    // Forms
    pub login: LoginForm,
    pub applicant_form: Option<ApplicantForm>,
    pub employee_form: Option<EmployeeForm>,
    pub is_submitting: bool,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = ApiClient::new(&config.api)?;
        let toast_duration = Duration::from_secs(config.ui.toast_duration_secs);

        Ok(Self {
            rt,
            client,
            tx,
            rx,
            route: Route::default(),
            after_login: None,
            auth: AuthStore::default(),
            toasts: ToastStore::new(toast_duration),
            confirm: ConfirmDialogStore::default(),
            applicants: ApplicantStore::new(Module::Applicant),
            employees: EmployeeStore::new(Module::Employee),
            login: LoginForm::default(),
            applicant_form: None,
            employee_form: None,
            is_submitting: false,
            log_messages: Vec::new(),
            config,
        })
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard {
            is_logged_in: self.auth.is_logged_in,
            has_selected_applicant: self.applicants.selected().is_some(),
            has_selected_employee: self.employees.selected().is_some(),
        }
    }

    /// Go to a page after auth and selection redirects.
    ///
    /// Entering a form page builds a fresh form; entering a list page
    /// reloads its records.
    pub fn navigate(&mut self, route: Route) {
        let resolved = resolve_route(route, self.guard());
        if resolved != route {
            tracing::debug!("Redirected {} to {}", route.path(), resolved.path());
        }

        let today = today();
        match resolved {
            Route::Dashboard => {
                self.load_applicants();
                self.load_employees();
            }
            Route::Applicants => self.load_applicants(),
            Route::Employees => self.load_employees(),
            Route::CreateApplicant => self.applicant_form = Some(ApplicantForm::create(today)),
            Route::UpdateApplicant => self.applicant_form = self.applicants.selected().map(ApplicantForm::update),
            Route::EmployApplicant => {
                self.employee_form = self.applicants.selected().map(|a| EmployeeForm::employ(a, today));
            }
            Route::CreateEmployee => self.employee_form = Some(EmployeeForm::create(today)),
            Route::UpdateEmployee => self.employee_form = self.employees.selected().map(EmployeeForm::update),
            Route::Login => {}
        }

        self.route = resolved;
    }

    /// Go to a page by path; unknown paths land on the home page.
    pub fn navigate_path(&mut self, path: &str) {
        if let Some(requested) = Route::from_path(path)
            && requested.is_protected()
            && !self.auth.is_logged_in
        {
            self.after_login = Some(requested);
        }
        let route = resolve(path, self.guard());
        self.navigate(route);
    }

    /// Check the login form against the configured operator credentials.
    pub fn try_login(&mut self) {
        let username = self.login.username.trim().to_string();
        if !credentials_match(&self.config.auth, &username, &self.login.password) {
            tracing::warn!("Failed sign-in attempt for '{}'", username);
            self.login.error = Some("Invalid username or password".to_string());
            self.login.password.clear();
            return;
        }

        tracing::info!("Operator '{}' signed in", username);
        self.log_info(format!("Signed in as {username}"));
        self.auth.login(username);
        self.login = LoginForm::default();
        let route = self.after_login.take().unwrap_or(Route::Dashboard);
        self.navigate(route);
    }

    /// Ask before signing out.
    pub fn request_logout(&mut self) {
        self.confirm.open_confirm_dialog(ConfirmDialog {
            title: Some("Sign out".to_string()),
            message: "Do you want to sign out?".to_string(),
            is_closable: true,
            action: ConfirmAction::Logout,
        });
    }

    pub fn logout(&mut self) {
        tracing::info!("Operator signed out");
        self.auth.logout();
        self.applicants.clear_selection();
        self.employees.clear_selection();
        self.applicant_form = None;
        self.employee_form = None;
        self.navigate(Route::Login);
    }

    /// Load applicants from the backend.
    pub fn load_applicants(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.applicants.is_loading = true;

        self.rt.spawn(async move {
            match client.list_applicants().await {
                Ok(records) => {
                    let _ = tx.send(UiMessage::ApplicantsLoaded(records));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadFailed(Module::Applicant, e.to_string()));
                }
            }
        });
    }

    /// Load employees from the backend.
    pub fn load_employees(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.employees.is_loading = true;

        self.rt.spawn(async move {
            match client.list_employees().await {
                Ok(records) => {
                    let _ = tx.send(UiMessage::EmployeesLoaded(records));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadFailed(Module::Employee, e.to_string()));
                }
            }
        });
    }

    /// Send a mutation in the background.
    pub fn submit(&mut self, mutation: Mutation) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.is_submitting = true;
        self.log_info(format!("Sending {}", mutation.describe()));

        self.rt.spawn(async move {
            match client.send(&mutation).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::MutationSucceeded(mutation));
                }
                Err(e) => {
                    match e.status_code() {
                        Some(status) => tracing::warn!("{} rejected with {}", mutation.describe(), status),
                        None => tracing::error!("{} failed: {}", mutation.describe(), e),
                    }
                    let _ = tx.send(UiMessage::MutationFailed {
                        mutation,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Validate the applicant form and send it.
    pub fn submit_applicant_form(&mut self) {
        let mutation = match self.applicant_form.as_mut() {
            Some(form) => form.submit(&self.applicants.display_configs, today()),
            None => return,
        };

        match mutation {
            Some(mutation) => self.submit(mutation),
            None => {
                self.toasts.show_toast(ToastState::Warning, Instant::now());
                self.log_warning("Applicant form has invalid fields");
            }
        }
    }

    /// Validate the employee form and send it. Employing goes through a
    /// confirm dialog and returns to the applicant list.
    pub fn submit_employee_form(&mut self) {
        let (mutation, confirm) = match self.employee_form.as_mut() {
            Some(form) => (
                form.submit(&self.employees.display_configs, today()),
                form.needs_confirmation(),
            ),
            None => return,
        };

        let Some(mutation) = mutation else {
            self.toasts.show_toast(ToastState::Warning, Instant::now());
            self.log_warning("Employee form has invalid fields");
            return;
        };

        if confirm {
            let name = match &mutation {
                Mutation::EmployApplicant { employee, .. } => employee.full_name.clone(),
                _ => String::new(),
            };
            self.confirm.open_confirm_dialog(ConfirmDialog {
                title: Some("Employ applicant".to_string()),
                message: format!("Employ {name} and move them to the employee list?"),
                is_closable: true,
                action: ConfirmAction::Submit {
                    mutation,
                    then: Some(Route::Applicants),
                },
            });
        } else {
            self.submit(mutation);
        }
    }

    /// Export the currently listed records of a module to Excel.
    pub fn export_list(&mut self, module: Module) {
        let prefix = module.plural().to_lowercase();
        let Some(path) = export::show_save_dialog(&export::generate_export_filename(&prefix)) else {
            return;
        };

        let result = match module {
            Module::Applicant => {
                let records = table_view::visible_records(module, &self.applicants);
                export::export_records_to_excel(module, &records, &self.applicants.display_configs, &path)
            }
            Module::Employee => {
                let records = table_view::visible_records(module, &self.employees);
                export::export_records_to_excel(module, &records, &self.employees.display_configs, &path)
            }
        };

        let now = Instant::now();
        match result {
            Ok(()) => {
                let message = format!("Exported to {}", path.display());
                tracing::info!("{}", message);
                self.toasts.show_message(ToastState::Success, message.clone(), now);
                self.log_success(message);
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.toasts.show_message(ToastState::Error, format!("Export failed: {e}"), now);
                self.log_error(format!("Export failed: {e}"));
            }
        }
    }

    fn is_busy(&self) -> bool {
        self.is_submitting || self.applicants.is_loading || self.employees.is_loading
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::ApplicantsLoaded(records) => {
                    self.applicants.set_records(records);
                }
                UiMessage::EmployeesLoaded(records) => {
                    self.employees.set_records(records);
                }
                UiMessage::LoadFailed(module, e) => {
                    match module {
                        Module::Applicant => self.applicants.is_loading = false,
                        Module::Employee => self.employees.is_loading = false,
                    }
                    tracing::error!("Loading {} failed: {}", module.plural(), e);
                    self.toasts
                        .show_message(ToastState::Error, format!("Could not load {}", module.plural()), Instant::now());
                    self.log_error(format!("Loading {} failed: {}", module.plural(), e));
                }
                UiMessage::MutationSucceeded(mutation) => {
                    self.is_submitting = false;
                    self.toasts.show_toast(ToastState::Success, Instant::now());
                    self.log_success(format!("{} succeeded", mutation.describe()));
                    self.after_mutation(&mutation);
                }
                UiMessage::MutationFailed { mutation, error } => {
                    self.is_submitting = false;
                    self.toasts.show_toast(ToastState::Error, Instant::now());
                    self.log_error(format!("{} failed: {}", mutation.describe(), error));
                }
            }
        }
    }

    /// Reload the lists a mutation touched and reset the form it came from.
    fn after_mutation(&mut self, mutation: &Mutation) {
        let today = today();
        match mutation {
            Mutation::CreateApplicant(_) if self.route == Route::CreateApplicant => {
                self.applicant_form = Some(ApplicantForm::create(today));
            }
            Mutation::UpdateApplicant { applicant, .. } => {
                // Keep editing the record under its new id
                self.applicants.select(applicant.clone());
                if self.route == Route::UpdateApplicant {
                    self.applicant_form = Some(ApplicantForm::update(applicant));
                }
            }
            Mutation::CreateEmployee(_) if self.route == Route::CreateEmployee => {
                self.employee_form = Some(EmployeeForm::create(today));
            }
            Mutation::UpdateEmployee { employee, .. } => {
                self.employees.select(employee.clone());
                if self.route == Route::UpdateEmployee {
                    self.employee_form = Some(EmployeeForm::update(employee));
                }
            }
            _ => {}
        }

        let (applicants, employees) = mutation.invalidates();
        if applicants {
            self.load_applicants();
        }
        if employees {
            self.load_employees();
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Go", |ui| {
                    for route in [Route::Dashboard, Route::Applicants, Route::Employees] {
                        if ui.button(route.title()).clicked() {
                            self.navigate(route);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("New", |ui| {
                    for route in [Route::CreateApplicant, Route::CreateEmployee] {
                        if ui.button(route.title()).clicked() {
                            self.navigate(route);
                            ui.close();
                        }
                    }
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Sign out").clicked() {
                        self.request_logout();
                    }
                    if let Some(name) = &self.auth.username {
                        ui.label(RichText::new(name).weak());
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    ui.label(format!("API: {}", self.client.base_url()));
                    ui.separator();
                    ui.label(self.route.path());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.is_submitting {
                            ui.label("Saving...");
                            ui.spinner();
                        } else if self.applicants.is_loading || self.employees.is_loading {
                            ui.label("Loading...");
                            ui.spinner();
                        }
                    });
                });
            });
    }

    /// Run the action of the open confirm dialog. Submitting sends the
    /// request and opens the follow-up page right away.
    pub fn accept_confirm(&mut self) {
        match self.confirm.confirm() {
            Some(ConfirmAction::Submit { mutation, then }) => {
                self.submit(mutation);
                if let Some(route) = then {
                    self.navigate(route);
                }
            }
            Some(ConfirmAction::Logout) => self.logout(),
            None => {}
        }
    }

    /// Render the pending confirm dialog.
    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.confirm.dialog().cloned() else {
            return;
        };

        let mut open = true;
        let mut accepted = None;
        let title = dialog.title.clone().unwrap_or_else(|| "Confirm".to_string());

        let mut window = egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0]);
        if dialog.is_closable {
            window = window.open(&mut open);
        }

        window.show(ctx, |ui| {
            ui.label(&dialog.message);
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    accepted = Some(false);
                }
                if ui.button("Confirm").clicked() {
                    accepted = Some(true);
                }
            });
        });

        match accepted {
            Some(true) => self.accept_confirm(),
            Some(false) => self.confirm.cancel(),
            None if !open => self.confirm.cancel(),
            None => {}
        }
    }

    /// Render toasts stacked in the bottom-right corner.
    fn show_toasts(&mut self, ctx: &egui::Context) {
        let mut dismissed = None;

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -40.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in self.toasts.toasts() {
                    let color = match toast.state {
                        ToastState::Success => colors::SUCCESS,
                        ToastState::Error => colors::ERROR,
                        ToastState::Warning => colors::WARNING,
                    };
                    let response = egui::Frame::new()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .stroke(egui::Stroke::new(1.5, color))
                        .inner_margin(egui::Margin::same(10))
                        .corner_radius(egui::CornerRadius::same(6))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.colored_label(color, &toast.message);
                        })
                        .response
                        .interact(egui::Sense::click());
                    if response.clicked() {
                        dismissed = Some(toast.id);
                    }
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = dismissed {
            self.toasts.dismiss(id);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();
        self.toasts.prune(Instant::now());

        // Request repaint during async operations and while toasts are up
        if self.is_busy() || !self.toasts.toasts().is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if self.auth.is_logged_in {
            self.show_menu_bar(ctx);
        }
        self.show_status_bar(ctx);
        self.show_confirm_dialog(ctx);
        self.show_toasts(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            let next = match self.route {
                Route::Login => {
                    login::show(self, ui);
                    None
                }
                Route::Dashboard => dashboard::show(self, ui),
                Route::Applicants => applicant_panel::show_list(self, ui),
                Route::CreateApplicant | Route::UpdateApplicant => applicant_panel::show_form(self, ui),
                Route::Employees => employee_panel::show_list(self, ui),
                Route::EmployApplicant | Route::CreateEmployee | Route::UpdateEmployee => {
                    employee_panel::show_form(self, ui)
                }
            };
            if let Some(route) = next {
                self.navigate(route);
            }
        });
    }
}
