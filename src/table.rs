//! Table and column configuration for record lists.

use chrono::NaiveDate;

use crate::display::{DisplayConfigs, Module};
use crate::models::{Applicant, Employee};

/// Placeholder for absent cell values.
pub const EMPTY_CELL: &str = "-";

/// Overall table width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableWidth {
    Full,
    Fixed(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub width: TableWidth,
}

/// How a cell value is turned into display text.
#[derive(Debug, Clone, Copy)]
pub enum DisplayType {
    /// Raw value.
    Normal,
    /// Through the module's display value mapping.
    Mapped,
    /// Through a formatter function.
    Formatted(fn(&str) -> String),
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnConfig {
    pub field: &'static str,
    pub header: &'static str,
    pub width: Option<f32>,
    pub display_type: DisplayType,
}

impl ColumnConfig {
    const fn new(field: &'static str, header: &'static str, width: f32) -> Self {
        Self {
            field,
            header,
            width: Some(width),
            display_type: DisplayType::Normal,
        }
    }

    fn mapped(mut self) -> Self {
        self.display_type = DisplayType::Mapped;
        self
    }

    fn formatted(mut self, formatter: fn(&str) -> String) -> Self {
        self.display_type = DisplayType::Formatted(formatter);
        self
    }
}

/// Ordered column configs; columns render in this order.
pub type ColumnConfigs = Vec<ColumnConfig>;

/// A record that can be shown as a table row.
pub trait TableRecord {
    /// Raw value of a field, `None` when absent.
    fn field(&self, name: &str) -> Option<String>;

    /// Key identifying the record (its national ID).
    fn key(&self) -> &str;
}

fn date_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl TableRecord for Applicant {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "NationalId" => Some(self.national_id.clone()),
            "FullName" => Some(self.full_name.clone()),
            "Gender" => Some(self.gender.as_str().to_string()),
            "BirthDate" => self.birth_date.map(date_text),
            "Address" => self.address.clone(),
            "Phone" => Some(self.phone.clone()),
            "Email" => self.email.clone(),
            "ExperienceYears" => Some(self.experience_years.to_string()),
            "AppliedPosition" => Some(self.applied_position.clone()),
            "AppliedDate" => Some(date_text(self.applied_date)),
            "AskingSalary" => Some(self.asking_salary.to_string()),
            _ => None,
        }
    }

    fn key(&self) -> &str {
        &self.national_id
    }
}

impl TableRecord for Employee {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "NationalId" => Some(self.national_id.clone()),
            "FullName" => Some(self.full_name.clone()),
            "Gender" => Some(self.gender.as_str().to_string()),
            "BirthDate" => self.birth_date.map(date_text),
            "Address" => self.address.clone(),
            "Phone" => Some(self.phone.clone()),
            "Email" => self.email.clone(),
            "ExperienceYears" => Some(self.experience_years.to_string()),
            "Position" => Some(self.position.clone()),
            "EmployedDate" => Some(date_text(self.employed_date)),
            "Salary" => Some(self.salary.to_string()),
            "StartHour" => Some(self.start_hour.to_string()),
            "EndHour" => Some(self.end_hour.to_string()),
            _ => None,
        }
    }

    fn key(&self) -> &str {
        &self.national_id
    }
}

/// Group digits in threes: `15000000` → `15,000,000`.
pub fn format_money(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}

/// Hour of day as `HH:00`.
pub fn format_hour(raw: &str) -> String {
    match raw.parse::<u32>() {
        Ok(h) if h <= 23 => format!("{h:02}:00"),
        _ => raw.to_string(),
    }
}

/// Display text of one cell.
pub fn cell_text(record: &dyn TableRecord, column: &ColumnConfig, display: &DisplayConfigs) -> String {
    let Some(raw) = record.field(column.field).filter(|v| !v.is_empty()) else {
        return EMPTY_CELL.to_string();
    };
    match column.display_type {
        DisplayType::Normal => raw,
        DisplayType::Mapped => display.display_for_field_value(column.field, &raw),
        DisplayType::Formatted(formatter) => formatter(&raw),
    }
}

/// Case-insensitive match of `query` against any displayed cell.
pub fn row_matches(record: &dyn TableRecord, columns: &[ColumnConfig], display: &DisplayConfigs, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    columns
        .iter()
        .any(|c| cell_text(record, c, display).to_lowercase().contains(&query))
}

/// Table config for a module.
pub fn table_config(module: Module) -> TableConfig {
    match module {
        Module::Applicant => TableConfig {
            width: TableWidth::Fixed(1300.0),
        },
        Module::Employee => TableConfig {
            width: TableWidth::Fixed(1450.0),
        },
    }
}

/// Column configs for a module.
pub fn column_configs(module: Module) -> ColumnConfigs {
    let mut columns = vec![
        ColumnConfig::new("NationalId", "National ID", 140.0),
        ColumnConfig::new("FullName", "Full Name", 280.0),
        ColumnConfig::new("Gender", "Gender", 100.0).mapped(),
        ColumnConfig::new("BirthDate", "Birth Date", 120.0),
        ColumnConfig::new("Address", "Address", 300.0),
        ColumnConfig::new("Phone", "Phone", 120.0),
        ColumnConfig::new("Email", "Email", 140.0),
    ];
    match module {
        Module::Applicant => columns.extend([
            ColumnConfig::new("AppliedPosition", "Applied Position", 140.0),
            ColumnConfig::new("AppliedDate", "Applied Date", 150.0),
            ColumnConfig::new("AskingSalary", "Asking Salary", 150.0).formatted(format_money),
        ]),
        Module::Employee => columns.extend([
            ColumnConfig::new("Position", "Position", 140.0),
            ColumnConfig::new("EmployedDate", "Employed Date", 120.0),
            ColumnConfig::new("Salary", "Salary", 130.0).formatted(format_money),
            ColumnConfig::new("StartHour", "Shift Start", 80.0).formatted(format_hour),
            ColumnConfig::new("EndHour", "Shift End", 80.0).formatted(format_hour),
        ]),
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn applicant() -> Applicant {
        Applicant {
            national_id: "123456789".to_string(),
            full_name: "Dang Quoc Huy".to_string(),
            gender: Gender::Male,
            birth_date: None,
            address: None,
            phone: "0901234567".to_string(),
            email: Some("huy@example.com".to_string()),
            applied_position: "Chef".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            asking_salary: 15_000_000,
            experience_years: 5,
        }
    }

    fn column(module: Module, field: &str) -> ColumnConfig {
        column_configs(module)
            .into_iter()
            .find(|c| c.field == field)
            .unwrap()
    }

    #[test]
    fn test_applicant_column_order_and_widths() {
        let columns = column_configs(Module::Applicant);
        let fields: Vec<_> = columns.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            [
                "NationalId",
                "FullName",
                "Gender",
                "BirthDate",
                "Address",
                "Phone",
                "Email",
                "AppliedPosition",
                "AppliedDate",
                "AskingSalary"
            ]
        );
        assert_eq!(columns[1].width, Some(280.0));
        assert_eq!(table_config(Module::Applicant).width, TableWidth::Fixed(1300.0));
    }

    #[test]
    fn test_cell_display_types() {
        let display = DisplayConfigs::for_module(Module::Applicant);
        let a = applicant();

        assert_eq!(cell_text(&a, &column(Module::Applicant, "Gender"), &display), "Male");
        assert_eq!(
            cell_text(&a, &column(Module::Applicant, "AskingSalary"), &display),
            "15,000,000"
        );
        assert_eq!(cell_text(&a, &column(Module::Applicant, "AppliedDate"), &display), "2024-07-01");
        assert_eq!(cell_text(&a, &column(Module::Applicant, "Address"), &display), EMPTY_CELL);
    }

    #[test]
    fn test_employee_hours_formatted() {
        let display = DisplayConfigs::for_module(Module::Employee);
        let emp = Employee::draft_from(&applicant(), NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());

        assert_eq!(cell_text(&emp, &column(Module::Employee, "StartHour"), &display), "09:00");
        assert_eq!(cell_text(&emp, &column(Module::Employee, "EndHour"), &display), "18:00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("0"), "0");
        assert_eq!(format_money("999"), "999");
        assert_eq!(format_money("1000"), "1,000");
        assert_eq!(format_money("-1234567"), "-1,234,567");
        assert_eq!(format_money("n/a"), "n/a");
    }

    #[test]
    fn test_row_search() {
        let display = DisplayConfigs::for_module(Module::Applicant);
        let columns = column_configs(Module::Applicant);
        let a = applicant();

        assert!(row_matches(&a, &columns, &display, ""));
        assert!(row_matches(&a, &columns, &display, "quoc"));
        assert!(row_matches(&a, &columns, &display, "CHEF"));
        // Mapped display text is searchable too
        assert!(row_matches(&a, &columns, &display, "male"));
        assert!(!row_matches(&a, &columns, &display, "accountant"));
    }
}
