//! Applicant transfer object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Gender, wire_date};

/// A job candidate pending a hiring decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Applicant {
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
    pub applied_position: String,
    #[serde(with = "wire_date")]
    pub applied_date: NaiveDate,
    pub asking_salary: i64,
    #[serde(default)]
    pub experience_years: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Applicant {
        Applicant {
            national_id: "012345678901".to_string(),
            full_name: "Nguyen Van An".to_string(),
            gender: Gender::Male,
            birth_date: None,
            address: Some("12 Le Loi, District 1, HCMC".to_string()),
            phone: "0901234567".to_string(),
            email: None,
            applied_position: "Accountant".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            asking_salary: 15_000_000,
            experience_years: 3,
        }
    }

    #[test]
    fn test_serializes_pascal_case_and_skips_absent() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "NationalId": "012345678901",
                "FullName": "Nguyen Van An",
                "Gender": "male",
                "Address": "12 Le Loi, District 1, HCMC",
                "Phone": "0901234567",
                "AppliedPosition": "Accountant",
                "AppliedDate": "2024-05-20T00:00:00",
                "AskingSalary": 15000000,
                "ExperienceYears": 3
            })
        );
    }

    #[test]
    fn test_deserializes_backend_row() {
        let row = json!({
            "NationalId": "123456789",
            "FullName": "Tran Thi Binh",
            "Gender": "female",
            "BirthDate": "1995-02-14T00:00:00",
            "Address": null,
            "Phone": "0912345678",
            "Email": "binh@example.com",
            "AppliedPosition": "Cashier",
            "AppliedDate": "2024-06-01",
            "AskingSalary": 9000000
        });
        let applicant: Applicant = serde_json::from_value(row).unwrap();
        assert_eq!(applicant.gender, Gender::Female);
        assert_eq!(applicant.birth_date, NaiveDate::from_ymd_opt(1995, 2, 14));
        assert_eq!(applicant.address, None);
        assert_eq!(applicant.experience_years, 0);
    }

    #[test]
    fn test_rejects_unknown_gender() {
        let row = json!({
            "NationalId": "123456789",
            "FullName": "X",
            "Gender": "robot",
            "Phone": "0912345678",
            "AppliedPosition": "Cashier",
            "AppliedDate": "2024-06-01",
            "AskingSalary": 1
        });
        assert!(serde_json::from_value::<Applicant>(row).is_err());
    }
}
