//! Error types and handling.

use thiserror::Error;

/// Errors raised while talking to the HR backend.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("{endpoint} returned {status}")]
    Status { status: u16, endpoint: String },

    /// Request body could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a status error for an endpoint
    pub fn status(status: u16, endpoint: impl Into<String>) -> Self {
        Self::Status {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Status code when the backend rejected the request.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = AppError::status(400, "POST /api/Applicants/Create");
        assert_eq!(err.to_string(), "POST /api/Applicants/Create returned 400");
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn test_json_error_has_no_status() {
        let err = AppError::from(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(err.to_string().starts_with("JSON error"));
        assert_eq!(err.status_code(), None);
    }
}
