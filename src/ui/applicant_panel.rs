//! Applicant list and applicant create/update pages.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, EYE, FILE_XLS, FLOPPY_DISK, PENCIL, PLUS, USER_PLUS, X};

use super::app::{App, today};
use super::components::{back_button, panel_header, primary_button_with_icon, styled_button, styled_button_with_icon};
use super::inputs::{InputProps, InputWidth, multi_select_input, schema_fields};
use super::table_view;
use crate::display::Module;
use crate::router::Route;
use crate::validation::GENDER_OPTIONS;

/// Show the applicant list.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show_list(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;

    if back_button(ui, "Dashboard") {
        next = Some(Route::Dashboard);
    }

    panel_header(ui, "Applicants");

    // Toolbar row 1: Action buttons
    let has_selection = app.applicants.selected().is_some();
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, true, PLUS, "Create").clicked() {
            next = Some(Route::CreateApplicant);
        }

        ui.add_space(10.0);

        if primary_button_with_icon(ui, has_selection, PENCIL, "Update").clicked() {
            next = Some(Route::UpdateApplicant);
        }

        ui.add_space(10.0);

        if primary_button_with_icon(ui, has_selection, USER_PLUS, "Employ").clicked() {
            next = Some(Route::EmployApplicant);
        }

        ui.add_space(20.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_applicants();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_list(Module::Applicant);
        }

        if app.applicants.is_loading {
            ui.add_space(10.0);
            ui.spinner();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter
    let store = &mut app.applicants;
    ui.horizontal(|ui| {
        egui::Grid::new("applicant_filters")
            .num_columns(4)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Search:");
                ui.add(
                    egui::TextEdit::singleline(&mut store.search)
                        .desired_width(200.0)
                        .hint_text("ID, name, phone..."),
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

    if let Some(record) = table_view::show(ui, Module::Applicant, &app.applicants) {
        tracing::debug!("Selected applicant {}", record.national_id);
        app.applicants.select(record);
    }

    next
}

/// Show the create or update applicant form.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show_form(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;
    let mut submit = false;

    if back_button(ui, "Applicants") {
        next = Some(Route::Applicants);
    }

    let Some(form) = app.applicant_form.as_mut() else {
        return Some(Route::Applicants);
    };

    panel_header(ui, form.title());

    let display = &app.applicants.display_configs;
    ScrollArea::vertical().id_salt("applicant_form_scroll").show(ui, |ui| {
        let (schema, values, errors) = form.editor();
        schema_fields(ui, "applicant_form", schema, values, errors, display, &|_: &str| false, today());

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
                next = Some(Route::Applicants);
            }
        });
    });

    if submit {
        app.submit_applicant_form();
    }

    next
}
