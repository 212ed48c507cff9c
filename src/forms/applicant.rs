//! Create and update applicant forms.

use chrono::NaiveDate;

use super::{FieldValues, format_date};
use crate::client::Mutation;
use crate::display::DisplayConfigs;
use crate::models::{Applicant, Gender};
use crate::validation::{FormSchema, ValidationErrors, applicant_schema};

/// Which backend operation the form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicantFormMode {
    Create,
    /// Editing the applicant identified by `original_id`.
    Update { original_id: String },
}

/// Applicant form state.
#[derive(Debug, Clone)]
pub struct ApplicantForm {
    pub mode: ApplicantFormMode,
    pub values: FieldValues,
    pub errors: ValidationErrors,
    schema: FormSchema,
}

impl ApplicantForm {
    /// Blank form with gender `male` and today's application date.
    pub fn create(today: NaiveDate) -> Self {
        let mut values = FieldValues::default();
        for field in [
            "NationalId",
            "FullName",
            "BirthDate",
            "Address",
            "Phone",
            "Email",
            "ExperienceYears",
            "AppliedPosition",
            "AskingSalary",
        ] {
            values.set(field, "");
        }
        values.set("Gender", Gender::Male.as_str());
        values.set("AppliedDate", format_date(today));

        Self {
            mode: ApplicantFormMode::Create,
            values,
            errors: ValidationErrors::default(),
            schema: applicant_schema(),
        }
    }

    /// Form pre-filled from an existing applicant.
    pub fn update(applicant: &Applicant) -> Self {
        let mut values = FieldValues::default();
        values.set("NationalId", applicant.national_id.as_str());
        values.set("FullName", applicant.full_name.as_str());
        values.set("Gender", applicant.gender.as_str());
        values.set("BirthDate", applicant.birth_date.map(format_date).unwrap_or_default());
        values.set("Address", applicant.address.clone().unwrap_or_default());
        values.set("Phone", applicant.phone.as_str());
        values.set("Email", applicant.email.clone().unwrap_or_default());
        values.set("ExperienceYears", applicant.experience_years.to_string());
        values.set("AppliedPosition", applicant.applied_position.as_str());
        values.set("AppliedDate", format_date(applicant.applied_date));
        values.set("AskingSalary", applicant.asking_salary.to_string());

        Self {
            mode: ApplicantFormMode::Update {
                original_id: applicant.national_id.clone(),
            },
            values,
            errors: ValidationErrors::default(),
            schema: applicant_schema(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ApplicantFormMode::Create => "New Applicant",
            ApplicantFormMode::Update { .. } => "Edit Applicant",
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Schema, editable values, and current errors, borrowed together for rendering.
    pub fn editor(&mut self) -> (&FormSchema, &mut FieldValues, &ValidationErrors) {
        (&self.schema, &mut self.values, &self.errors)
    }

    /// Validate and build the mutation. Errors are kept on the form.
    pub fn submit(&mut self, labels: &DisplayConfigs, today: NaiveDate) -> Option<Mutation> {
        if let Err(errors) = self.schema.validate(&self.values, labels, today) {
            tracing::debug!("Applicant form rejected: {}", errors);
            self.errors = errors;
            return None;
        }
        self.errors = ValidationErrors::default();

        let Some(applicant) = self.to_applicant() else {
            tracing::error!("Validated applicant form failed to convert");
            return None;
        };

        Some(match &self.mode {
            ApplicantFormMode::Create => Mutation::CreateApplicant(applicant),
            ApplicantFormMode::Update { original_id } => Mutation::UpdateApplicant {
                national_id: original_id.clone(),
                applicant,
            },
        })
    }

    /// Log the current raw values.
    pub fn preview(&self) {
        tracing::debug!("Applicant form values: {:?}", self.values.snapshot());
    }

    fn to_applicant(&self) -> Option<Applicant> {
        let v = &self.values;
        Some(Applicant {
            national_id: v.text("NationalId")?,
            full_name: v.text("FullName")?,
            gender: Gender::parse(v.get("Gender"))?,
            birth_date: v.date("BirthDate"),
            address: v.text("Address"),
            phone: v.phone("Phone")?,
            email: v.text("Email"),
            experience_years: v.integer("ExperienceYears")?,
            applied_position: v.text("AppliedPosition")?,
            applied_date: v.date("AppliedDate")?,
            asking_salary: v.integer("AskingSalary")?,
        })
    }
}
