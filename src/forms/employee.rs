//! Create employee, update employee, and employ applicant forms.

use chrono::NaiveDate;

use super::{FieldValues, format_date};
use crate::client::Mutation;
use crate::display::DisplayConfigs;
use crate::models::employee::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use crate::models::{Applicant, Employee, Gender};
use crate::validation::{FormSchema, ValidationErrors, employ_schema, employee_schema};

/// Fields describing the person rather than the job.
const IDENTITY_FIELDS: &[&str] = &[
    "NationalId",
    "FullName",
    "Gender",
    "BirthDate",
    "Address",
    "Phone",
    "Email",
    "ExperienceYears",
];

/// Which backend operation the form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFormMode {
    Create,
    /// Editing the employee identified by `original_id`.
    Update { original_id: String },
    /// Hiring the applicant identified by `applicant_id`.
    Employ { applicant_id: String },
}

/// Employee form state.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    pub mode: EmployeeFormMode,
    pub values: FieldValues,
    pub errors: ValidationErrors,
    schema: FormSchema,
}

impl EmployeeForm {
    /// Blank form with a 09:00-18:00 shift starting today.
    pub fn create(today: NaiveDate) -> Self {
        let mut values = FieldValues::default();
        for field in IDENTITY_FIELDS.iter().copied().chain(["Position", "Salary"]) {
            values.set(field, "");
        }
        values.set("Gender", Gender::Male.as_str());
        values.set("EmployedDate", format_date(today));
        values.set("StartHour", DEFAULT_START_HOUR.to_string());
        values.set("EndHour", DEFAULT_END_HOUR.to_string());

        Self::with_mode(EmployeeFormMode::Create, values)
    }

    /// Form pre-filled from an existing employee.
    pub fn update(employee: &Employee) -> Self {
        Self::with_mode(
            EmployeeFormMode::Update {
                original_id: employee.national_id.clone(),
            },
            values_from(employee),
        )
    }

    /// Hiring form for an applicant: position and salary come from the
    /// application, employment starts today on the default shift.
    pub fn employ(applicant: &Applicant, today: NaiveDate) -> Self {
        let draft = Employee::draft_from(applicant, today);
        Self::with_mode(
            EmployeeFormMode::Employ {
                applicant_id: applicant.national_id.clone(),
            },
            values_from(&draft),
        )
    }

    fn with_mode(mode: EmployeeFormMode, values: FieldValues) -> Self {
        let schema = match mode {
            EmployeeFormMode::Employ { .. } => employ_schema(),
            _ => employee_schema(),
        };
        Self {
            mode,
            values,
            errors: ValidationErrors::default(),
            schema,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EmployeeFormMode::Create => "New Employee",
            EmployeeFormMode::Update { .. } => "Edit Employee",
            EmployeeFormMode::Employ { .. } => "Employ Applicant",
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Schema, editable values, and current errors, borrowed together for rendering.
    pub fn editor(&mut self) -> (&FormSchema, &mut FieldValues, &ValidationErrors) {
        (&self.schema, &mut self.values, &self.errors)
    }

    /// Identity fields are locked when employing an applicant.
    pub fn is_read_only(&self, field: &str) -> bool {
        self.schema.is_locked(field)
    }

    /// Employing asks for confirmation before the request goes out.
    pub fn needs_confirmation(&self) -> bool {
        matches!(self.mode, EmployeeFormMode::Employ { .. })
    }

    /// Validate and build the mutation. Errors are kept on the form.
    pub fn submit(&mut self, labels: &DisplayConfigs, today: NaiveDate) -> Option<Mutation> {
        if let Err(errors) = self.schema.validate(&self.values, labels, today) {
            tracing::debug!("Employee form rejected: {}", errors);
            self.errors = errors;
            return None;
        }
        self.errors = ValidationErrors::default();

        let Some(employee) = self.to_employee() else {
            tracing::error!("Validated employee form failed to convert");
            return None;
        };

        Some(match &self.mode {
            EmployeeFormMode::Create => Mutation::CreateEmployee(employee),
            EmployeeFormMode::Update { original_id } => Mutation::UpdateEmployee {
                national_id: original_id.clone(),
                employee,
            },
            EmployeeFormMode::Employ { applicant_id } => Mutation::EmployApplicant {
                national_id: applicant_id.clone(),
                employee,
            },
        })
    }

    /// Log the current raw values.
    pub fn preview(&self) {
        tracing::debug!("Employee form values: {:?}", self.values.snapshot());
    }

    fn to_employee(&self) -> Option<Employee> {
        let v = &self.values;
        Some(Employee {
            national_id: v.text("NationalId")?,
            full_name: v.text("FullName")?,
            gender: Gender::parse(v.get("Gender"))?,
            birth_date: v.date("BirthDate"),
            address: v.text("Address"),
            phone: v.phone("Phone")?,
            email: v.text("Email"),
            experience_years: v.integer("ExperienceYears")?,
            position: v.text("Position")?,
            employed_date: v.date("EmployedDate")?,
            salary: v.integer("Salary")?,
            start_hour: v.integer("StartHour")?,
            end_hour: v.integer("EndHour")?,
        })
    }
}

fn values_from(employee: &Employee) -> FieldValues {
    let mut values = FieldValues::default();
    values.set("NationalId", employee.national_id.as_str());
    values.set("FullName", employee.full_name.as_str());
    values.set("Gender", employee.gender.as_str());
    values.set("BirthDate", employee.birth_date.map(format_date).unwrap_or_default());
    values.set("Address", employee.address.clone().unwrap_or_default());
    values.set("Phone", employee.phone.as_str());
    values.set("Email", employee.email.clone().unwrap_or_default());
    values.set("ExperienceYears", employee.experience_years.to_string());
    values.set("Position", employee.position.as_str());
    values.set("EmployedDate", format_date(employee.employed_date));
    values.set("Salary", employee.salary.to_string());
    values.set("StartHour", employee.start_hour.to_string());
    values.set("EndHour", employee.end_hour.to_string());
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Module;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn labels() -> DisplayConfigs {
        DisplayConfigs::for_module(Module::Employee)
    }

    fn applicant() -> Applicant {
        Applicant {
            national_id: "123456789".to_string(),
            full_name: "Hoang Thi Lan".to_string(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1998, 8, 8),
            address: Some("22 Hai Ba Trung, Ha Noi".to_string()),
            phone: "0987654321".to_string(),
            email: Some("lan@example.com".to_string()),
            applied_position: "Sales".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            asking_salary: 10_000_000,
            experience_years: 2,
        }
    }

    #[test]
    fn test_create_defaults() {
        let form = EmployeeForm::create(today());
        assert_eq!(form.values.get("EmployedDate"), "2024-06-15");
        assert_eq!(form.values.get("StartHour"), "9");
        assert_eq!(form.values.get("EndHour"), "18");
        assert_eq!(form.values.get("Gender"), "male");
        assert!(!form.is_read_only("NationalId"));
        assert!(!form.needs_confirmation());
    }

    #[test]
    fn test_employ_prefills_from_applicant() {
        let form = EmployeeForm::employ(&applicant(), today());

        assert_eq!(form.values.get("Position"), "Sales");
        assert_eq!(form.values.get("Salary"), "10000000");
        assert_eq!(form.values.get("EmployedDate"), "2024-06-15");
        assert_eq!(form.values.get("BirthDate"), "1998-08-08");
        assert_eq!(form.title(), "Employ Applicant");
        assert!(form.is_read_only("FullName"));
        assert!(!form.is_read_only("Salary"));
        assert!(form.needs_confirmation());
    }

    #[test]
    fn test_employ_submit() {
        let mut form = EmployeeForm::employ(&applicant(), today());
        form.values.set("Salary", "11000000");

        match form.submit(&labels(), today()) {
            Some(Mutation::EmployApplicant { national_id, employee }) => {
                assert_eq!(national_id, "123456789");
                assert_eq!(employee.salary, 11_000_000);
                assert_eq!(employee.position, "Sales");
                assert_eq!((employee.start_hour, employee.end_hour), (9, 18));
            }
            other => panic!("unexpected mutation: {other:?}"),
        }
    }

    #[test]
    fn test_employ_applicant_without_address() {
        let applicant = Applicant {
            address: None,
            phone: "0987.654.321".to_string(),
            ..applicant()
        };
        let mut form = EmployeeForm::employ(&applicant, today());
        assert!(form.is_read_only("Address"));

        match form.submit(&labels(), today()) {
            Some(Mutation::EmployApplicant { employee, .. }) => {
                assert_eq!(employee.address, None);
                assert_eq!(employee.phone, "0987654321");
            }
            other => panic!("employ rejected: {other:?} {}", form.errors),
        }
    }

    #[test]
    fn test_update_sends_compact_phone() {
        let mut form = EmployeeForm::update(&Employee::draft_from(&applicant(), today()));
        form.values.set("Phone", "098-765-4321");

        match form.submit(&labels(), today()) {
            Some(Mutation::UpdateEmployee { employee, .. }) => assert_eq!(employee.phone, "0987654321"),
            other => panic!("unexpected mutation: {other:?}"),
        }
    }

    #[test]
    fn test_update_keeps_end_hour() {
        let mut employee = Employee::draft_from(&applicant(), today());
        employee.start_hour = 13;
        employee.end_hour = 22;

        let mut form = EmployeeForm::update(&employee);
        match form.submit(&labels(), today()) {
            Some(Mutation::UpdateEmployee { employee, .. }) => {
                assert_eq!(employee.start_hour, 13);
                assert_eq!(employee.end_hour, 22);
            }
            other => panic!("unexpected mutation: {other:?}"),
        }
    }

    #[test]
    fn test_submit_rejects_inverted_shift() {
        let mut form = EmployeeForm::employ(&applicant(), today());
        form.values.set("StartHour", "18");
        form.values.set("EndHour", "9");

        assert!(form.submit(&labels(), today()).is_none());
        assert_eq!(form.errors.get("EndHour"), Some("Shift End must be after Shift Start"));
    }

    #[test]
    fn test_create_empty_submit() {
        let mut form = EmployeeForm::create(today());
        assert!(form.submit(&labels(), today()).is_none());
        assert_eq!(form.errors.get("Position"), Some("Position is required"));
        assert_eq!(form.errors.get("Salary"), Some("Salary is required"));
        assert_eq!(form.errors.get("StartHour"), None);
    }
}
