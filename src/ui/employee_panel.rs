//! Employee list and the create, update, and employ forms.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, EYE, FILE_XLS, FLOPPY_DISK, PENCIL, PLUS, X};

use super::app::{App, today};
use super::components::{back_button, panel_header, primary_button_with_icon, styled_button, styled_button_with_icon};
use super::inputs::{InputProps, InputWidth, multi_select_input, schema_fields};
use super::table_view;
use crate::display::Module;
use crate::forms::EmployeeFormMode;
use crate::router::Route;
use crate::validation::GENDER_OPTIONS;

/// Show the employee list.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show_list(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;

    if back_button(ui, "Dashboard") {
        next = Some(Route::Dashboard);
    }

    panel_header(ui, "Employees");

    // Toolbar row 1: Action buttons
    let has_selection = app.employees.selected().is_some();
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, true, PLUS, "Create").clicked() {
            next = Some(Route::CreateEmployee);
        }

        ui.add_space(10.0);

        if primary_button_with_icon(ui, has_selection, PENCIL, "Update").clicked() {
            next = Some(Route::UpdateEmployee);
        }

        ui.add_space(20.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_employees();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_list(Module::Employee);
        }

        if app.employees.is_loading {
            ui.add_space(10.0);
            ui.spinner();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter
    let store = &mut app.employees;
    ui.horizontal(|ui| {
        egui::Grid::new("employee_filters")
            .num_columns(4)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Search:");
                ui.add(
                    egui::TextEdit::singleline(&mut store.search)
                        .desired_width(200.0)
                        .hint_text("ID, name, position..."),
                );
                let props = InputProps {
                    field: "Gender",
                    placeholder: "All",
                    width: InputWidth::Medium,
                    required: false,
                    disabled: false,
                    display: &store.display_configs,
                    error: None,
                };
                multi_select_input(ui, &props, GENDER_OPTIONS, &mut store.gender_filter);
            });

        if (!store.search.is_empty() || !store.gender_filter.is_empty()) && styled_button(ui, "Clear").clicked() {
            store.search.clear();
            store.gender_filter.clear();
        }
    });

    ui.add_space(15.0);

    if let Some(record) = table_view::show(ui, Module::Employee, &app.employees) {
        tracing::debug!("Selected employee {}", record.national_id);
        app.employees.select(record);
    }

    next
}

/// Show the create employee, update employee, or employ applicant form.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show_form(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;
    let mut submit = false;

    let Some(form) = app.employee_form.as_mut() else {
        return Some(list_route(app.route));
    };
    let exit_route = match form.mode {
        EmployeeFormMode::Employ { .. } => Route::Applicants,
        _ => Route::Employees,
    };

    if back_button(ui, exit_route.title()) {
        next = Some(exit_route);
    }

    panel_header(ui, form.title());

    // Locked fields are fixed for the life of the form
    let locked: Vec<&'static str> = form
        .schema()
        .fields
        .iter()
        .map(|f| f.field)
        .filter(|field| form.is_read_only(field))
        .collect();
    if !locked.is_empty() {
        ui.label(RichText::new("Personal details come from the application and cannot be changed here.").weak());
        ui.add_space(10.0);
    }

    let display = &app.employees.display_configs;
    ScrollArea::vertical().id_salt("employee_form_scroll").show(ui, |ui| {
        let (schema, values, errors) = form.editor();
        let read_only = |field: &str| locked.iter().any(|l| *l == field);
        schema_fields(ui, "employee_form", schema, values, errors, display, &read_only, today());

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            if primary_button_with_icon(ui, !app.is_submitting, FLOPPY_DISK, "Submit").clicked() {
                submit = true;
            }

            ui.add_space(10.0);

            if styled_button_with_icon(ui, EYE, "Preview").clicked() {
                form.preview();
            }

            ui.add_space(10.0);

            if styled_button_with_icon(ui, X, "Exit").clicked() {
                next = Some(exit_route);
            }
        });
    });

    if submit {
        app.submit_employee_form();
    }

    next
}

fn list_route(route: Route) -> Route {
    match route {
        Route::EmployApplicant => Route::Applicants,
        _ => Route::Employees,
    }
}
