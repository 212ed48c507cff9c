//! Record table rendered from table and column configs.

use eframe::egui::{self, Align, Layout, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::display::{DisplayConfigs, Module};
use crate::store::RecordStore;
use crate::table::{ColumnConfig, TableRecord, TableWidth, cell_text, column_configs, row_matches, table_config};

const ROW_HEIGHT: f32 = 24.0;

/// Whether a record passes the search box and gender filter.
pub fn record_visible<T: TableRecord>(
    record: &T,
    columns: &[ColumnConfig],
    display: &DisplayConfigs,
    search: &str,
    genders: &[String],
) -> bool {
    let gender_match = genders.is_empty()
        || record
            .field("Gender")
            .is_some_and(|g| genders.iter().any(|wanted| *wanted == g));
    gender_match && row_matches(record, columns, display, search)
}

/// Clones of the records that pass the store's search and filter.
pub fn visible_records<T: TableRecord + Clone>(module: Module, store: &RecordStore<T>) -> Vec<T> {
    let columns = column_configs(module);
    store
        .records
        .iter()
        .filter(|r| record_visible(*r, &columns, &store.display_configs, &store.search, &store.gender_filter))
        .cloned()
        .collect()
}

/// Show the filtered records of a store.
///
/// Returns the record whose row was clicked.
pub fn show<T: TableRecord + Clone>(ui: &mut Ui, module: Module, store: &RecordStore<T>) -> Option<T> {
    let columns = column_configs(module);
    let config = table_config(module);

    let visible: Vec<&T> = store
        .records
        .iter()
        .filter(|r| record_visible(*r, &columns, &store.display_configs, &store.search, &store.gender_filter))
        .collect();

    ui.label(format!(
        "Showing {} of {} {}",
        visible.len(),
        store.records.len(),
        module.plural().to_lowercase()
    ));
    ui.add_space(10.0);

    let mut clicked = None;

    ScrollArea::horizontal().id_salt(("table_scroll", module.plural())).show(ui, |ui| {
        if let TableWidth::Fixed(width) = config.width {
            ui.set_min_width(width);
        }

        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .cell_layout(Layout::left_to_right(Align::Center));

        for (idx, column) in columns.iter().enumerate() {
            let is_last = idx + 1 == columns.len();
            builder = builder.column(match column.width {
                Some(w) if !(is_last && config.width == TableWidth::Full) => Column::initial(w).at_least(40.0),
                _ => Column::remainder(),
            });
        }

        builder
            .header(ROW_HEIGHT, |mut header| {
                for column in &columns {
                    header.col(|ui| {
                        ui.strong(column.header);
                    });
                }
            })
            .body(|mut body| {
                for record in &visible {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(store.is_selected(record.key()));
                        for column in &columns {
                            row.col(|ui| {
                                ui.label(cell_text(*record, column, &store.display_configs));
                            });
                        }
                        if row.response().clicked() {
                            clicked = Some((*record).clone());
                        }
                    });
                }
            });
    });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Applicant, Gender};
    use chrono::NaiveDate;

    fn applicant(name: &str, gender: Gender) -> Applicant {
        Applicant {
            national_id: "123456789".to_string(),
            full_name: name.to_string(),
            gender,
            birth_date: None,
            address: None,
            phone: "0901234567".to_string(),
            email: None,
            applied_position: "Tester".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            asking_salary: 1,
            experience_years: 0,
        }
    }

    #[test]
    fn test_gender_filter() {
        let display = DisplayConfigs::for_module(Module::Applicant);
        let columns = column_configs(Module::Applicant);
        let a = applicant("Mai", Gender::Female);

        assert!(record_visible(&a, &columns, &display, "", &[]));
        assert!(record_visible(&a, &columns, &display, "", &["female".to_string()]));
        assert!(!record_visible(&a, &columns, &display, "", &["male".to_string(), "other".to_string()]));
    }

    #[test]
    fn test_visible_records_follow_store_filters() {
        let mut store = RecordStore::new(Module::Applicant);
        store.set_records(vec![applicant("Mai", Gender::Female), applicant("Long", Gender::Male)]);
        assert_eq!(visible_records(Module::Applicant, &store).len(), 2);

        store.gender_filter = vec!["male".to_string()];
        let visible = visible_records(Module::Applicant, &store);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].full_name, "Long");

        store.search = "mai".to_string();
        assert!(visible_records(Module::Applicant, &store).is_empty());
    }

    #[test]
    fn test_filter_and_search_combine() {
        let display = DisplayConfigs::for_module(Module::Applicant);
        let columns = column_configs(Module::Applicant);
        let a = applicant("Mai", Gender::Female);

        assert!(record_visible(&a, &columns, &display, "mai", &["female".to_string()]));
        assert!(!record_visible(&a, &columns, &display, "lan", &["female".to_string()]));
    }
}
