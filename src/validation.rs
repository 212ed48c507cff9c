//! Declarative field-validation schemas for the record forms.
//!
//! A schema lists the fields of a form in display order together with the
//! rule for each one. Forms hand their raw text values to
//! [`FormSchema::validate`], which reports every failing field at once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::display::DisplayConfigs;
use crate::models::wire_date;

static NATIONAL_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{9}|\d{12})$").expect("valid regex"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\+\d{9,11}|0\d{8,10})$").expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("valid regex"));

/// Gender choices accepted by every form.
pub const GENDER_OPTIONS: &[&str] = &["male", "female", "other"];

/// Rule applied to a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text with character bounds.
    Text { min: usize, max: usize },
    /// 9 or 12 digit national identity number.
    NationalId,
    Phone,
    Email,
    /// Base-10 integer with inclusive bounds.
    Integer { min: i64, max: i64 },
    Date { not_after_today: bool },
    /// Hour of day, 0-23.
    Hour,
    Choice(&'static [&'static str]),
}

/// One field of a form schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub field: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    /// Shown read-only and never checked; the value comes from an existing record.
    pub locked: bool,
}

impl FieldSchema {
    pub const fn required(field: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            required: true,
            kind,
            locked: false,
        }
    }

    pub const fn optional(field: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            required: false,
            kind,
            locked: false,
        }
    }

    pub const fn locked(self) -> Self {
        Self { locked: true, ..self }
    }
}

/// Rule spanning two fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossRule {
    /// `later` must be strictly greater than `earlier` (hours).
    HourAfter { earlier: &'static str, later: &'static str },
}

/// Raw text values of a form, looked up by field name.
pub trait FormValues {
    fn value(&self, field: &str) -> &str;
}

/// Failing fields mapped to their messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: String) {
        self.0.entry(field).or_insert(message);
    }

    fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Ordered field rules plus cross-field rules.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
    pub rules: Vec<CrossRule>,
}

impl FormSchema {
    /// Look up the rule for a field.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// Whether a field is marked required.
    pub fn is_required(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.required)
    }

    /// Whether a field is locked against editing.
    pub fn is_locked(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.locked)
    }

    /// Validate all fields against `today` for date bounds.
    pub fn validate(
        &self,
        values: &dyn FormValues,
        labels: &DisplayConfigs,
        today: NaiveDate,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for schema in self.fields.iter().filter(|f| !f.locked) {
            let raw = values.value(schema.field).trim();
            let label = labels.label_for_field(schema.field);

            if raw.is_empty() {
                if schema.required {
                    errors.insert(schema.field, format!("{label} is required"));
                }
                continue;
            }

            if let Err(message) = check_value(schema.kind, raw, &label, today) {
                errors.insert(schema.field, message);
            }
        }

        for rule in &self.rules {
            match *rule {
                CrossRule::HourAfter { earlier, later } => {
                    if errors.contains(earlier) || errors.contains(later) {
                        continue;
                    }
                    let start = values.value(earlier).trim().parse::<u32>();
                    let end = values.value(later).trim().parse::<u32>();
                    if let (Ok(start), Ok(end)) = (start, end)
                        && end <= start
                    {
                        errors.insert(
                            later,
                            format!(
                                "{} must be after {}",
                                labels.label_for_field(later),
                                labels.label_for_field(earlier)
                            ),
                        );
                    }
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Check a non-empty trimmed value against a field rule.
fn check_value(kind: FieldKind, raw: &str, label: &str, today: NaiveDate) -> Result<(), String> {
    match kind {
        FieldKind::Text { min, max } => {
            let len = raw.chars().count();
            if len < min {
                return Err(format!("{label} must be at least {min} characters"));
            }
            if len > max {
                return Err(format!("{label} must be at most {max} characters"));
            }
        }
        FieldKind::NationalId => {
            if !NATIONAL_ID_RE.is_match(raw) {
                return Err(format!("{label} must be 9 or 12 digits"));
            }
        }
        FieldKind::Phone => {
            if !PHONE_RE.is_match(&compact_phone(raw)) {
                return Err(format!("{label} is not a valid phone number"));
            }
        }
        FieldKind::Email => {
            if !EMAIL_RE.is_match(raw) {
                return Err(format!("{label} is not a valid email address"));
            }
        }
        FieldKind::Integer { min, max } => {
            let n: i64 = raw.parse().map_err(|_| format!("{label} must be a whole number"))?;
            if n < min {
                return Err(format!("{label} must be at least {min}"));
            }
            if n > max {
                return Err(format!("{label} must be at most {max}"));
            }
        }
        FieldKind::Date { not_after_today } => {
            let date = wire_date::parse(raw).ok_or_else(|| format!("{label} is not a valid date"))?;
            if not_after_today && date > today {
                return Err(format!("{label} cannot be in the future"));
            }
        }
        FieldKind::Hour => match raw.parse::<u32>() {
            Ok(h) if h <= 23 => {}
            _ => return Err(format!("{label} must be an hour between 0 and 23")),
        },
        FieldKind::Choice(options) => {
            if !options.contains(&raw) {
                return Err(format!("{label} must be one of: {}", options.join(", ")));
            }
        }
    }
    Ok(())
}

/// Phone number with spaces, dots and dashes removed.
pub fn compact_phone(raw: &str) -> String {
    raw.trim().chars().filter(|c| !matches!(c, ' ' | '.' | '-')).collect()
}

const NAME: FieldKind = FieldKind::Text { min: 2, max: 100 };
const ADDRESS: FieldKind = FieldKind::Text { min: 5, max: 200 };
const POSITION: FieldKind = FieldKind::Text { min: 2, max: 100 };
const EXPERIENCE: FieldKind = FieldKind::Integer { min: 0, max: 60 };
const MONEY: FieldKind = FieldKind::Integer {
    min: 0,
    max: 1_000_000_000_000,
};

fn identity_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::required("NationalId", FieldKind::NationalId),
        FieldSchema::required("FullName", NAME),
        FieldSchema::required("Gender", FieldKind::Choice(GENDER_OPTIONS)),
        FieldSchema::optional("BirthDate", FieldKind::Date { not_after_today: true }),
        FieldSchema::required("Address", ADDRESS),
        FieldSchema::required("Phone", FieldKind::Phone),
        FieldSchema::optional("Email", FieldKind::Email),
        FieldSchema::required("ExperienceYears", EXPERIENCE),
    ]
}

/// Schema shared by the create and update applicant forms.
pub fn applicant_schema() -> FormSchema {
    let mut fields = identity_fields();
    fields.extend([
        FieldSchema::required("AppliedPosition", POSITION),
        FieldSchema::required("AppliedDate", FieldKind::Date { not_after_today: false }),
        FieldSchema::required("AskingSalary", MONEY),
    ]);
    FormSchema {
        fields,
        rules: Vec::new(),
    }
}

fn employment_fields() -> [FieldSchema; 5] {
    [
        FieldSchema::required("Position", POSITION),
        FieldSchema::required("EmployedDate", FieldKind::Date { not_after_today: false }),
        FieldSchema::required("Salary", MONEY),
        FieldSchema::required("StartHour", FieldKind::Hour),
        FieldSchema::required("EndHour", FieldKind::Hour),
    ]
}

fn shift_rules() -> Vec<CrossRule> {
    vec![CrossRule::HourAfter {
        earlier: "StartHour",
        later: "EndHour",
    }]
}

/// Schema shared by the create and update employee forms.
pub fn employee_schema() -> FormSchema {
    let mut fields = identity_fields();
    fields.extend(employment_fields());
    FormSchema {
        fields,
        rules: shift_rules(),
    }
}

/// Schema of the employ form: identity fields come from the applicant
/// record and are locked, only the employment terms are checked.
pub fn employ_schema() -> FormSchema {
    let mut fields: Vec<FieldSchema> = identity_fields().into_iter().map(FieldSchema::locked).collect();
    fields.extend(employment_fields());
    FormSchema {
        fields,
        rules: shift_rules(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Module;
    use std::collections::HashMap;

    struct Values(HashMap<&'static str, &'static str>);

    impl FormValues for Values {
        fn value(&self, field: &str) -> &str {
            self.0.get(field).copied().unwrap_or("")
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_applicant() -> Values {
        Values(HashMap::from([
            ("NationalId", "012345678901"),
            ("FullName", "Nguyen Van An"),
            ("Gender", "male"),
            ("BirthDate", ""),
            ("Address", "12 Le Loi, District 1"),
            ("Phone", "090 123 4567"),
            ("Email", ""),
            ("ExperienceYears", "3"),
            ("AppliedPosition", "Accountant"),
            ("AppliedDate", "2024-06-01"),
            ("AskingSalary", "15000000"),
        ]))
    }

    fn valid_employee() -> Values {
        Values(HashMap::from([
            ("NationalId", "123456789"),
            ("FullName", "Tran Thi Binh"),
            ("Gender", "female"),
            ("Address", "45 Tran Hung Dao"),
            ("Phone", "+84912345678"),
            ("Email", "binh@example.com"),
            ("ExperienceYears", "0"),
            ("Position", "Cashier"),
            ("EmployedDate", "2024-06-15"),
            ("Salary", "9000000"),
            ("StartHour", "9"),
            ("EndHour", "18"),
        ]))
    }

    fn labels(module: Module) -> DisplayConfigs {
        DisplayConfigs::for_module(module)
    }

    #[test]
    fn test_valid_applicant_passes() {
        let result = applicant_schema().validate(&valid_applicant(), &labels(Module::Applicant), today());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_valid_employee_passes() {
        let result = employee_schema().validate(&valid_employee(), &labels(Module::Employee), today());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_empty_required_field_reports_label() {
        let mut values = valid_applicant();
        values.0.insert("FullName", "   ");

        let errors = applicant_schema()
            .validate(&values, &labels(Module::Applicant), today())
            .unwrap_err();
        assert_eq!(errors.get("FullName"), Some("Full Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_reports_every_failing_field() {
        let mut values = valid_applicant();
        values.0.insert("NationalId", "12345");
        values.0.insert("Phone", "12345");
        values.0.insert("AskingSalary", "a lot");

        let errors = applicant_schema()
            .validate(&values, &labels(Module::Applicant), today())
            .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("NationalId"), Some("National ID must be 9 or 12 digits"));
        assert_eq!(errors.get("Phone"), Some("Phone is not a valid phone number"));
        assert_eq!(errors.get("AskingSalary"), Some("Asking Salary must be a whole number"));
    }

    #[test]
    fn test_optional_fields_checked_when_present() {
        let mut values = valid_applicant();
        values.0.insert("Email", "not-an-email");
        values.0.insert("BirthDate", "2030-01-01");

        let errors = applicant_schema()
            .validate(&values, &labels(Module::Applicant), today())
            .unwrap_err();
        assert_eq!(errors.get("Email"), Some("Email is not a valid email address"));
        assert_eq!(errors.get("BirthDate"), Some("Birth Date cannot be in the future"));
    }

    #[test]
    fn test_national_id_lengths() {
        let labels = labels(Module::Applicant);
        for (raw, ok) in [
            ("123456789", true),
            ("123456789012", true),
            ("1234567890", false),
            ("12345678a", false),
        ] {
            let result = check_value(FieldKind::NationalId, raw, "National ID", today());
            assert_eq!(result.is_ok(), ok, "{raw}");
        }
        assert_eq!(labels.label_for_field("NationalId"), "National ID");
    }

    #[test]
    fn test_phone_formats() {
        for (raw, ok) in [
            ("0901234567", true),
            ("090-123-4567", true),
            ("+84 90 123 4567", true),
            ("901234567", false),
            ("09012", false),
        ] {
            let result = check_value(FieldKind::Phone, raw, "Phone", today());
            assert_eq!(result.is_ok(), ok, "{raw}");
        }
    }

    #[test]
    fn test_negative_experience_rejected() {
        let mut values = valid_applicant();
        values.0.insert("ExperienceYears", "-1");

        let errors = applicant_schema()
            .validate(&values, &labels(Module::Applicant), today())
            .unwrap_err();
        assert_eq!(errors.get("ExperienceYears"), Some("Years of Experience must be at least 0"));
    }

    #[test]
    fn test_gender_choice() {
        let mut values = valid_applicant();
        values.0.insert("Gender", "robot");

        let errors = applicant_schema()
            .validate(&values, &labels(Module::Applicant), today())
            .unwrap_err();
        assert_eq!(errors.get("Gender"), Some("Gender must be one of: male, female, other"));
    }

    #[test]
    fn test_end_hour_must_follow_start() {
        let mut values = valid_employee();
        values.0.insert("EndHour", "9");

        let errors = employee_schema()
            .validate(&values, &labels(Module::Employee), today())
            .unwrap_err();
        assert_eq!(errors.get("EndHour"), Some("Shift End must be after Shift Start"));
    }

    #[test]
    fn test_hour_out_of_range_skips_cross_rule() {
        let mut values = valid_employee();
        values.0.insert("StartHour", "24");

        let errors = employee_schema()
            .validate(&values, &labels(Module::Employee), today())
            .unwrap_err();
        assert_eq!(
            errors.get("StartHour"),
            Some("Shift Start must be an hour between 0 and 23")
        );
        assert_eq!(errors.get("EndHour"), None);
    }

    #[test]
    fn test_address_required_by_forms() {
        assert!(applicant_schema().is_required("Address"));
        assert!(employee_schema().is_required("Address"));
        assert!(!employee_schema().is_required("Email"));
    }

    #[test]
    fn test_employ_schema_skips_locked_identity() {
        let mut values = valid_employee();
        values.0.insert("Address", "");
        values.0.insert("NationalId", "1234567890");
        values.0.insert("Phone", "12");

        let schema = employ_schema();
        assert!(schema.is_locked("Address"));
        assert!(!schema.is_locked("Salary"));
        assert_eq!(schema.validate(&values, &labels(Module::Employee), today()), Ok(()));

        let errors = employee_schema()
            .validate(&values, &labels(Module::Employee), today())
            .unwrap_err();
        assert_eq!(errors.get("Address"), Some("Address is required"));
    }

    #[test]
    fn test_employ_schema_checks_employment_terms() {
        let mut values = valid_employee();
        values.0.insert("Salary", "");
        values.0.insert("EndHour", "8");

        let errors = employ_schema()
            .validate(&values, &labels(Module::Employee), today())
            .unwrap_err();
        assert_eq!(errors.get("Salary"), Some("Salary is required"));
        assert_eq!(errors.get("EndHour"), Some("Shift End must be after Shift Start"));
    }

    #[test]
    fn test_compact_phone() {
        assert_eq!(compact_phone(" 090-123.45 67 "), "0901234567");
        assert_eq!(compact_phone("+84 90 123 4567"), "+84901234567");
    }
}
