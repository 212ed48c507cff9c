//! Field labels and value display strings shared by inputs and tables.

use std::collections::HashMap;

use crate::models::Gender;

/// Record module a form or table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Applicant,
    Employee,
}

impl Module {
    /// Plural name used in headings and file names.
    pub fn plural(&self) -> &'static str {
        match self {
            Module::Applicant => "Applicants",
            Module::Employee => "Employees",
        }
    }
}

/// Per-field label and value lookups.
#[derive(Debug, Clone, Default)]
pub struct DisplayConfigs {
    pub labellers: HashMap<&'static str, &'static str>,
    pub values: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

const IDENTITY_LABELS: &[(&str, &str)] = &[
    ("NationalId", "National ID"),
    ("FullName", "Full Name"),
    ("Gender", "Gender"),
    ("BirthDate", "Birth Date"),
    ("Address", "Address"),
    ("Phone", "Phone"),
    ("Email", "Email"),
    ("ExperienceYears", "Years of Experience"),
];

const APPLICANT_LABELS: &[(&str, &str)] = &[
    ("AppliedPosition", "Applied Position"),
    ("AppliedDate", "Applied Date"),
    ("AskingSalary", "Asking Salary"),
];

const EMPLOYEE_LABELS: &[(&str, &str)] = &[
    ("Position", "Position"),
    ("EmployedDate", "Employed Date"),
    ("Salary", "Salary"),
    ("StartHour", "Shift Start"),
    ("EndHour", "Shift End"),
];

impl DisplayConfigs {
    /// Built-in configs for a module.
    pub fn for_module(module: Module) -> Self {
        let extra = match module {
            Module::Applicant => APPLICANT_LABELS,
            Module::Employee => EMPLOYEE_LABELS,
        };

        let labellers = IDENTITY_LABELS.iter().chain(extra).copied().collect();

        let genders = Gender::ALL
            .iter()
            .map(|g| {
                let display = match g {
                    Gender::Male => "Male",
                    Gender::Female => "Female",
                    Gender::Other => "Other",
                };
                (g.as_str(), display)
            })
            .collect();

        let mut values = HashMap::new();
        values.insert("Gender", genders);

        Self { labellers, values }
    }

    /// Label for a field, falling back to the field name.
    pub fn label_for_field(&self, field: &str) -> String {
        self.labellers
            .get(field)
            .map(|l| l.to_string())
            .unwrap_or_else(|| field.to_string())
    }

    /// Display string for a field value, falling back to the raw value.
    pub fn display_for_field_value(&self, field: &str, value: &str) -> String {
        self.values
            .get(field)
            .and_then(|mapping| mapping.get(value))
            .map(|d| d.to_string())
            .unwrap_or_else(|| value.to_string())
    }

    /// Whether a field has a value mapping.
    pub fn is_mapped(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_module() {
        let applicant = DisplayConfigs::for_module(Module::Applicant);
        let employee = DisplayConfigs::for_module(Module::Employee);

        assert_eq!(applicant.label_for_field("AskingSalary"), "Asking Salary");
        assert_eq!(employee.label_for_field("StartHour"), "Shift Start");
        assert_eq!(employee.label_for_field("NationalId"), "National ID");

        // Applicant configs know nothing about employment fields
        assert_eq!(applicant.label_for_field("Salary"), "Salary");
        assert!(!applicant.labellers.contains_key("Salary"));
    }

    #[test]
    fn test_unknown_field_falls_back_to_name() {
        let configs = DisplayConfigs::for_module(Module::Applicant);
        assert_eq!(configs.label_for_field("Nickname"), "Nickname");
    }

    #[test]
    fn test_value_display() {
        let configs = DisplayConfigs::for_module(Module::Employee);
        assert_eq!(configs.display_for_field_value("Gender", "female"), "Female");
        assert_eq!(configs.display_for_field_value("Gender", "unknown"), "unknown");
        assert_eq!(configs.display_for_field_value("Phone", "0901"), "0901");
        assert!(configs.is_mapped("Gender"));
        assert!(!configs.is_mapped("Phone"));
    }
}
