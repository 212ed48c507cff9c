//! Record forms: raw input values, schema validation, and conversion into
//! the mutation that gets submitted.

pub mod applicant;
pub mod employee;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::wire_date;
use crate::validation::{FormValues, compact_phone};

pub use applicant::{ApplicantForm, ApplicantFormMode};
pub use employee::{EmployeeForm, EmployeeFormMode};

/// Raw text values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues(HashMap<&'static str, String>);

impl FieldValues {
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Mutable text for an input widget, created empty on first use.
    pub fn get_mut(&mut self, field: &'static str) -> &mut String {
        self.0.entry(field).or_default()
    }

    /// Trimmed text, `None` when blank.
    pub fn text(&self, field: &str) -> Option<String> {
        let value = self.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn integer<T: std::str::FromStr>(&self, field: &str) -> Option<T> {
        self.get(field).trim().parse().ok()
    }

    /// Phone number without separators, `None` when blank.
    pub fn phone(&self, field: &str) -> Option<String> {
        let compact = compact_phone(self.get(field));
        (!compact.is_empty()).then_some(compact)
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        wire_date::parse(self.get(field))
    }

    /// Sorted `field=value` pairs for debug output.
    pub fn snapshot(&self) -> Vec<(&'static str, &str)> {
        let mut pairs: Vec<_> = self.0.iter().map(|(k, v)| (*k, v.as_str())).collect();
        pairs.sort_by_key(|(k, _)| *k);
        pairs
    }
}

impl FormValues for FieldValues {
    fn value(&self, field: &str) -> &str {
        self.get(field)
    }
}

/// Date text as stored by the date input.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims_and_blanks_to_none() {
        let mut values = FieldValues::default();
        values.set("Email", "  a@b.co ");
        values.set("Address", "   ");

        assert_eq!(values.text("Email").as_deref(), Some("a@b.co"));
        assert_eq!(values.text("Address"), None);
        assert_eq!(values.text("Missing"), None);
    }

    #[test]
    fn test_get_mut_creates_entry() {
        let mut values = FieldValues::default();
        values.get_mut("Phone").push_str("0901");
        assert_eq!(values.get("Phone"), "0901");
    }

    #[test]
    fn test_typed_accessors() {
        let mut values = FieldValues::default();
        values.set("Salary", " 1200 ");
        values.set("EmployedDate", "2024-02-29");

        assert_eq!(values.integer::<i64>("Salary"), Some(1200));
        assert_eq!(values.date("EmployedDate"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(values.integer::<i64>("EmployedDate"), None);
    }

    #[test]
    fn test_phone_drops_separators() {
        let mut values = FieldValues::default();
        values.set("Phone", "090-123-4567");
        values.set("Blank", "  ");

        assert_eq!(values.phone("Phone").as_deref(), Some("0901234567"));
        assert_eq!(values.phone("Blank"), None);
    }
}
