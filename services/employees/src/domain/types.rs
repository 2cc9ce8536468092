use bytes::Bytes;

use hrportal_domain::id::{DepartmentId, EmployeeId};

/// Employee record owned by the employees service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    /// Store-relative photograph path (`/uploads/employee_photos/emp_1.png`).
    pub photograph_path: Option<String>,
    pub department_id: Option<DepartmentId>,
    /// Read-only; populated from the department row on reads.
    pub department_name: Option<String>,
}

impl Employee {
    pub fn has_photo(&self) -> bool {
        self.photograph_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Field values for a row that has not been inserted yet.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub department_id: Option<DepartmentId>,
}

/// Department with seat capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub capacity: Option<i32>,
    /// `None` means capacity is not tracked for this department.
    pub seats_left: Option<i32>,
}

impl Department {
    /// Only an explicit zero blocks assignment; untracked capacity always admits.
    pub fn has_seat(&self) -> bool {
        self.seats_left != Some(0)
    }

    /// `0 <= seats_left <= capacity`, for whichever side is tracked.
    pub fn is_consistent(&self) -> bool {
        match (self.seats_left, self.capacity) {
            (Some(left), Some(cap)) => (0..=cap).contains(&left),
            (Some(left), None) => left >= 0,
            (None, _) => true,
        }
    }
}

/// Raw photograph upload as received from the client.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub bytes: Bytes,
    /// Client-side file name; only its extension is kept.
    pub file_name: Option<String>,
}

impl PhotoUpload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// What an update should do with the employee's photograph.
#[derive(Debug, Clone, Default)]
pub enum PhotoUpdate {
    /// No photo part was sent; leave the reference untouched.
    #[default]
    Keep,
    /// The client explicitly sent an empty photo; detach it.
    Clear,
    /// Store a new photo, replacing any previous one.
    Replace(PhotoUpload),
}

/// Photograph bytes ready to be served.
#[derive(Debug, Clone)]
pub struct PhotoContent {
    pub bytes: Bytes,
    pub content_type: &'static str,
}

/// Media type for a stored photo path, by extension (case-insensitive).
pub fn content_type_for(path: &str) -> &'static str {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else {
        "application/octet-stream"
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
