//! Multipart form decoding for employee create/update requests.

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;

use hrportal_domain::id::DepartmentId;

use crate::domain::types::{PhotoUpdate, PhotoUpload};
use crate::error::EmployeesServiceError;
use crate::usecase::employee::EmployeeFields;

/// Decoded `multipart/form-data` body shared by add and update.
#[derive(Debug)]
pub struct EmployeeForm {
    pub fields: EmployeeFields,
    pub department_id: Option<DepartmentId>,
    /// `None` when the request carried no `photograph` part at all.
    pub photograph: Option<PhotoUpload>,
}

impl EmployeeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, EmployeesServiceError> {
        let mut first_name = None;
        let mut last_name = None;
        let mut email = None;
        let mut title = None;
        let mut department_id = None;
        let mut photograph = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "multipart"))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "first_name" => first_name = Some(text(field, "first_name").await?),
                "last_name" => last_name = Some(text(field, "last_name").await?),
                "email" => email = Some(text(field, "email").await?),
                "title" => title = Some(text(field, "title").await?),
                "departmentId" => {
                    department_id = parse_department_id(&text(field, "departmentId").await?)?;
                }
                "photograph" => {
                    let file_name = field.file_name().map(str::to_owned);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e, "photograph"))?;
                    photograph = Some(PhotoUpload { bytes, file_name });
                }
                _ => {}
            }
        }

        Ok(Self {
            fields: EmployeeFields {
                first_name: first_name.ok_or(EmployeesServiceError::MissingField("first_name"))?,
                last_name: last_name.ok_or(EmployeesServiceError::MissingField("last_name"))?,
                email: email.ok_or(EmployeesServiceError::MissingField("email"))?,
                title: title.ok_or(EmployeesServiceError::MissingField("title"))?,
            },
            department_id,
            photograph,
        })
    }

    /// Absent part keeps the current photo, an empty part clears it.
    pub fn photo_update(photograph: Option<PhotoUpload>) -> PhotoUpdate {
        match photograph {
            None => PhotoUpdate::Keep,
            Some(upload) if upload.is_empty() => PhotoUpdate::Clear,
            Some(upload) => PhotoUpdate::Replace(upload),
        }
    }
}

async fn text(field: Field<'_>, name: &'static str) -> Result<String, EmployeesServiceError> {
    field
        .text()
        .await
        .map_err(|e| multipart_error(e, name))
}

/// Body-limit overruns keep their 413; anything else blames the field.
fn multipart_error(err: MultipartError, field: &'static str) -> EmployeesServiceError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        EmployeesServiceError::PayloadTooLarge
    } else {
        EmployeesServiceError::InvalidField(field)
    }
}

/// Empty and `0` both mean "no department".
fn parse_department_id(raw: &str) -> Result<Option<DepartmentId>, EmployeesServiceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let id: i32 = raw
        .parse()
        .map_err(|_| EmployeesServiceError::InvalidField("departmentId"))?;
    Ok(DepartmentId::from_wire(id))
}
