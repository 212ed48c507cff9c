//! REST client for the HR backend.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{Applicant, Employee};

/// A record mutation submitted by one of the forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateApplicant(Applicant),
    UpdateApplicant { national_id: String, applicant: Applicant },
    EmployApplicant { national_id: String, employee: Employee },
    CreateEmployee(Employee),
    UpdateEmployee { national_id: String, employee: Employee },
}

impl Mutation {
    pub fn method(&self) -> Method {
        match self {
            Mutation::UpdateApplicant { .. } | Mutation::UpdateEmployee { .. } => Method::PUT,
            _ => Method::POST,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Mutation::CreateApplicant(_) => "/api/Applicants/Create",
            Mutation::UpdateApplicant { .. } => "/api/Applicants/Update",
            Mutation::EmployApplicant { .. } => "/api/Applicants/Employ",
            Mutation::CreateEmployee(_) => "/api/Employees/Create",
            Mutation::UpdateEmployee { .. } => "/api/Employees/Update",
        }
    }

    /// `NationalId` of the record being changed, sent as a query parameter.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Mutation::CreateApplicant(_) | Mutation::CreateEmployee(_) => None,
            Mutation::UpdateApplicant { national_id, .. }
            | Mutation::EmployApplicant { national_id, .. }
            | Mutation::UpdateEmployee { national_id, .. } => Some(national_id),
        }
    }

    /// JSON request body.
    pub fn body(&self) -> Result<serde_json::Value> {
        let value = match self {
            Mutation::CreateApplicant(applicant) | Mutation::UpdateApplicant { applicant, .. } => {
                serde_json::to_value(applicant)?
            }
            Mutation::EmployApplicant { employee, .. }
            | Mutation::CreateEmployee(employee)
            | Mutation::UpdateEmployee { employee, .. } => serde_json::to_value(employee)?,
        };
        Ok(value)
    }

    /// Whether a success changes the applicant list, the employee list, or both.
    pub fn invalidates(&self) -> (bool, bool) {
        match self {
            Mutation::CreateApplicant(_) | Mutation::UpdateApplicant { .. } => (true, false),
            Mutation::EmployApplicant { .. } => (true, true),
            Mutation::CreateEmployee(_) | Mutation::UpdateEmployee { .. } => (false, true),
        }
    }

    /// Short description for logs, e.g. `PUT /api/Employees/Update`.
    pub fn describe(&self) -> String {
        format!("{} {}", self.method(), self.path())
    }
}

/// HR backend HTTP client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{base}{path}", base = self.base_url)
    }

    /// Assemble the HTTP request for a mutation without sending it.
    pub fn build(&self, mutation: &Mutation) -> Result<Request> {
        let body = mutation.body()?;

        let mut request = self
            .client
            .request(mutation.method(), self.url(mutation.path()))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(id) = mutation.target_id() {
            request = request.query(&[("NationalId", id)]);
        }

        Ok(request.build()?)
    }

    /// Submit a mutation. Any non-2xx status is an error.
    pub async fn send(&self, mutation: &Mutation) -> Result<()> {
        let request = self.build(mutation)?;
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} failed with {}", mutation.describe(), status);
            return Err(AppError::status(status.as_u16(), mutation.describe()));
        }

        tracing::info!("{} succeeded", mutation.describe());
        Ok(())
    }

    /// Fetch all applicants.
    pub async fn list_applicants(&self) -> Result<Vec<Applicant>> {
        self.get_json("/api/Applicants").await
    }

    /// Fetch all employees.
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.get_json("/api/Employees").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(status.as_u16(), format!("GET {path}")));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Test that the backend answers on the applicant list endpoint.
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self.client.get(self.url("/api/Applicants")).send().await?;
        let status = response.status();
        tracing::info!("Connection test answered {}", status);
        Ok(backend_reachable(status))
    }
}

/// A reply proves the backend is there unless it is a server error or a
/// client error other than an auth challenge (a 404 means a wrong base URL).
fn backend_reachable(status: StatusCode) -> bool {
    if status.is_server_error() {
        return false;
    }
    if status.is_client_error() {
        return matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN);
    }
    true
}
