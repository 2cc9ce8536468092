use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Employees service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum EmployeesServiceError {
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("department not found")]
    DepartmentNotFound,
    #[error("photo not found")]
    PhotoNotFound,
    #[error("no seats left in the selected department")]
    NoSeatsLeft,
    #[error("access denied")]
    AccessDenied,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("invalid email")]
    InvalidEmail,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("storage failure")]
    Storage(#[from] std::io::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EmployeesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::DepartmentNotFound => "DEPARTMENT_NOT_FOUND",
            Self::PhotoNotFound => "PHOTO_NOT_FOUND",
            Self::NoSeatsLeft => "NO_SEATS_LEFT",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::Storage(_) => "STORAGE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmployeeNotFound | Self::DepartmentNotFound | Self::PhotoNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::NoSeatsLeft => StatusCode::CONFLICT,
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::EmailAlreadyExists
            | Self::InvalidEmail
            | Self::MissingField(_)
            | Self::InvalidField(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EmployeesServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Only server-side failures are logged here.
        match &self {
            Self::Storage(e) => tracing::error!(error = %e, kind = "STORAGE", "storage failure"),
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
