//! Employee transfer object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Applicant, Gender, wire_date};

/// A hired staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub national_id: String,
    pub full_name: String,
    pub gender: Gender,
    #[serde(default, with = "wire_date::option", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub experience_years: i32,
    pub position: String,
    #[serde(with = "wire_date")]
    pub employed_date: NaiveDate,
    pub salary: i64,
    /// Shift start, hour of day (0-23).
    pub start_hour: u32,
    /// Shift end, hour of day (0-23).
    pub end_hour: u32,
}

/// Default shift used when hiring an applicant.
pub const DEFAULT_START_HOUR: u32 = 9;
pub const DEFAULT_END_HOUR: u32 = 18;

impl Employee {
    /// Draft an employee from an applicant, carrying over identity fields and
    /// the applied position and asking salary.
    pub fn draft_from(applicant: &Applicant, employed_date: NaiveDate) -> Self {
        Self {
            national_id: applicant.national_id.clone(),
            full_name: applicant.full_name.clone(),
            gender: applicant.gender,
            birth_date: applicant.birth_date,
            address: applicant.address.clone(),
            phone: applicant.phone.clone(),
            email: applicant.email.clone(),
            experience_years: applicant.experience_years,
            position: applicant.applied_position.clone(),
            employed_date,
            salary: applicant.asking_salary,
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn applicant() -> Applicant {
        Applicant {
            national_id: "123456789".to_string(),
            full_name: "Le Van Cuong".to_string(),
            gender: Gender::Other,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
            address: Some("Hue".to_string()),
            phone: "0987654321".to_string(),
            email: Some("cuong@example.com".to_string()),
            applied_position: "Driver".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            asking_salary: 8_000_000,
            experience_years: 7,
        }
    }

    #[test]
    fn test_draft_from_applicant() {
        let hired = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let emp = Employee::draft_from(&applicant(), hired);

        assert_eq!(emp.national_id, "123456789");
        assert_eq!(emp.position, "Driver");
        assert_eq!(emp.salary, 8_000_000);
        assert_eq!(emp.experience_years, 7);
        assert_eq!(emp.employed_date, hired);
        assert_eq!((emp.start_hour, emp.end_hour), (9, 18));
    }

    #[test]
    fn test_wire_shape() {
        let emp = Employee::draft_from(&applicant(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let value = serde_json::to_value(&emp).unwrap();

        assert_eq!(value["Position"], json!("Driver"));
        assert_eq!(value["EmployedDate"], json!("2024-02-01T00:00:00"));
        assert_eq!(value["BirthDate"], json!("1990-01-01T00:00:00"));
        assert_eq!(value["StartHour"], json!(9));
        assert_eq!(value["EndHour"], json!(18));
        assert!(value.get("AppliedPosition").is_none());
    }
}
