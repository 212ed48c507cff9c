//! Generic form inputs: text, select, date, and hour pickers.
//!
//! Every input renders as one row of a two-column grid (label, widget) and
//! takes its label and option texts from the module's display configs.

use chrono::NaiveDate;
use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::X;

use super::components::colors;
use crate::display::DisplayConfigs;
use crate::forms::{FieldValues, format_date};
use crate::models::wire_date;
use crate::table::format_hour;
use crate::validation::{FieldKind, FormSchema, ValidationErrors};

const MEDIUM_WIDTH: f32 = 280.0;

/// Widget width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputWidth {
    Full,
    #[default]
    Medium,
}

impl InputWidth {
    fn px(&self, ui: &Ui) -> f32 {
        match self {
            InputWidth::Full => ui.available_width(),
            InputWidth::Medium => MEDIUM_WIDTH,
        }
    }
}

/// Properties shared by all inputs.
pub struct InputProps<'a> {
    pub field: &'static str,
    pub placeholder: &'a str,
    pub width: InputWidth,
    pub required: bool,
    pub disabled: bool,
    pub display: &'a DisplayConfigs,
    pub error: Option<&'a str>,
}

fn field_label(ui: &mut Ui, props: &InputProps<'_>) {
    ui.horizontal(|ui| {
        ui.label(props.display.label_for_field(props.field));
        if props.required {
            ui.colored_label(colors::ERROR, "*");
        }
    });
}

fn field_error(ui: &mut Ui, error: Option<&str>) {
    if let Some(message) = error {
        ui.colored_label(colors::ERROR, RichText::new(message).small());
    }
}

/// Single-line text input.
pub fn text_input(ui: &mut Ui, props: &InputProps<'_>, value: &mut String) {
    field_label(ui, props);
    ui.vertical(|ui| {
        let width = props.width.px(ui);
        let mut edit = egui::TextEdit::singleline(value)
            .desired_width(width)
            .hint_text(props.placeholder);
        if props.error.is_some() {
            edit = edit.text_color(colors::ERROR);
        }
        ui.add_enabled(!props.disabled, edit);
        field_error(ui, props.error);
    });
    ui.end_row();
}

/// Single-choice select. The closed box shows the placeholder until a
/// value is picked.
pub fn select_input(ui: &mut Ui, props: &InputProps<'_>, options: &[&str], value: &mut String) {
    field_label(ui, props);
    ui.vertical(|ui| {
        let width = props.width.px(ui);
        let selected_text = if value.is_empty() {
            props.placeholder.to_string()
        } else {
            props.display.display_for_field_value(props.field, value)
        };

        ui.add_enabled_ui(!props.disabled, |ui| {
            egui::ComboBox::from_id_salt(("select", props.field))
                .width(width)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for option in options {
                        let display = props.display.display_for_field_value(props.field, option);
                        if ui.selectable_label(value.as_str() == *option, display).clicked() {
                            *value = option.to_string();
                        }
                    }
                });
        });
        field_error(ui, props.error);
    });
    ui.end_row();
}

/// Text shown in the closed multi-select box.
pub fn multi_select_summary(props: &InputProps<'_>, values: &[String]) -> String {
    match values {
        [] => props.placeholder.to_string(),
        [one] => props.display.display_for_field_value(props.field, one),
        _ => "Multiple...".to_string(),
    }
}

/// Multi-choice select with checkboxes.
pub fn multi_select_input(ui: &mut Ui, props: &InputProps<'_>, options: &[&str], values: &mut Vec<String>) {
    field_label(ui, props);
    ui.vertical(|ui| {
        let width = props.width.px(ui);
        ui.add_enabled_ui(!props.disabled, |ui| {
            egui::ComboBox::from_id_salt(("multi_select", props.field))
                .width(width)
                .selected_text(multi_select_summary(props, values))
                .show_ui(ui, |ui| {
                    for option in options {
                        let mut checked = values.iter().any(|v| v == option);
                        let display = props.display.display_for_field_value(props.field, option);
                        if ui.checkbox(&mut checked, display).changed() {
                            if checked {
                                values.push(option.to_string());
                            } else {
                                values.retain(|v| v != option);
                            }
                        }
                    }
                });
        });
        field_error(ui, props.error);
    });
    ui.end_row();
}

/// Date picker storing `YYYY-MM-DD` text; empty text means no date.
pub fn date_input(ui: &mut Ui, props: &InputProps<'_>, clearable: bool, value: &mut String, today: NaiveDate) {
    field_label(ui, props);
    ui.vertical(|ui| {
        ui.add_enabled_ui(!props.disabled, |ui| {
            ui.horizontal(|ui| match wire_date::parse(value) {
                Some(mut date) => {
                    let before = date;
                    ui.add(DatePickerButton::new(&mut date).id_salt(props.field));
                    if date != before {
                        *value = format_date(date);
                    }
                    if clearable && ui.small_button(X).on_hover_text("Clear").clicked() {
                        value.clear();
                    }
                }
                None => {
                    if ui.button(props.placeholder).clicked() {
                        *value = format_date(today);
                    }
                }
            });
        });
        field_error(ui, props.error);
    });
    ui.end_row();
}

/// Hour-of-day picker storing the hour as text.
pub fn time_input(ui: &mut Ui, props: &InputProps<'_>, value: &mut String) {
    field_label(ui, props);
    ui.vertical(|ui| {
        let selected_text = if value.is_empty() {
            props.placeholder.to_string()
        } else {
            format_hour(value)
        };
        ui.add_enabled_ui(!props.disabled, |ui| {
            egui::ComboBox::from_id_salt(("time", props.field))
                .width(120.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for hour in 0..24u32 {
                        let raw = hour.to_string();
                        if ui.selectable_label(*value == raw, format_hour(&raw)).clicked() {
                            *value = raw;
                        }
                    }
                });
        });
        field_error(ui, props.error);
    });
    ui.end_row();
}

/// Placeholder text for a record field.
pub fn placeholder(field: &str) -> &'static str {
    match field {
        "NationalId" => "9 or 12 digits",
        "FullName" => "Full name",
        "Gender" => "Choose one",
        "BirthDate" => "Pick birth date",
        "Address" => "House no., street, ward, city",
        "Phone" => "Phone number",
        "Email" => "Email address",
        "ExperienceYears" => "Years of experience",
        "AppliedPosition" => "Position applied for",
        "AppliedDate" => "Pick application date",
        "AskingSalary" => "Expected salary",
        "Position" => "Position",
        "EmployedDate" => "Pick start date",
        "Salary" => "Salary",
        "StartHour" => "Shift start",
        "EndHour" => "Shift end",
        _ => "",
    }
}

/// Render every field of a schema with the input matching its kind.
#[allow(clippy::too_many_arguments)]
pub fn schema_fields(
    ui: &mut Ui,
    id: &str,
    schema: &FormSchema,
    values: &mut FieldValues,
    errors: &ValidationErrors,
    display: &DisplayConfigs,
    read_only: &dyn Fn(&str) -> bool,
    today: NaiveDate,
) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([20.0, 10.0])
        .show(ui, |ui| {
            for field in &schema.fields {
                let props = InputProps {
                    field: field.field,
                    placeholder: placeholder(field.field),
                    width: InputWidth::Medium,
                    required: field.required && !field.locked,
                    disabled: read_only(field.field),
                    display,
                    error: errors.get(field.field),
                };
                let value = values.get_mut(field.field);
                match field.kind {
                    FieldKind::Choice(options) => select_input(ui, &props, options, value),
                    FieldKind::Date { .. } => date_input(ui, &props, !field.required, value, today),
                    FieldKind::Hour => time_input(ui, &props, value),
                    _ => text_input(ui, &props, value),
                }
            }
        });
}
