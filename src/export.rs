//! Excel export functionality.

use crate::display::{DisplayConfigs, Module};
use crate::table::{ColumnConfig, TableRecord, cell_text, column_configs};
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// Export records to an Excel file using the module's table columns.
/// Cells hold the same text the table shows.
pub fn export_records_to_excel<T: TableRecord>(
    module: Module,
    records: &[T],
    display: &DisplayConfigs,
    path: &Path,
) -> Result<(), XlsxError> {
    let columns = column_configs(module);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(module.plural())?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, column) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.header, &header_format)?;
        worksheet.set_column_width(col as u16, excel_width(column))?;
    }

    // Data rows
    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, column) in columns.iter().enumerate() {
            worksheet.write_string(row, col as u16, cell_text(record, column, display))?;
        }
    }

    // Autofilter
    if !records.is_empty() {
        let last_row = records.len() as u32;
        worksheet.autofilter(0, 0, last_row, (columns.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Pixel widths from the table config mapped to Excel character widths.
fn excel_width(column: &ColumnConfig) -> f64 {
    column.width.map(|w| f64::from(w) / 7.0).unwrap_or(15.0).max(8.0)
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Applicant, Employee, Gender};
    use chrono::NaiveDate;

    fn applicant() -> Applicant {
        Applicant {
            national_id: "123456789".to_string(),
            full_name: "Ngo Bao Chau".to_string(),
            gender: Gender::Male,
            birth_date: None,
            address: Some("Ha Noi".to_string()),
            phone: "0901234567".to_string(),
            email: None,
            applied_position: "Analyst".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            asking_salary: 20_000_000,
            experience_years: 6,
        }
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("applicants");
        assert!(name.starts_with("applicants_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_export_applicants_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applicants.xlsx");
        let display = DisplayConfigs::for_module(Module::Applicant);

        export_records_to_excel(Module::Applicant, &[applicant()], &display, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_export_empty_employee_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.xlsx");
        let display = DisplayConfigs::for_module(Module::Employee);

        export_records_to_excel::<Employee>(Module::Employee, &[], &display, &path).unwrap();
        assert!(path.exists());
    }
}
