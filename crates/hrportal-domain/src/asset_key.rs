//! Logical keys and file-name rules for stored assets.

use std::fmt;

use crate::id::EmployeeId;

/// Sanitized logical key naming a stored asset file (without extension).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    /// Build a key from arbitrary input. Every character outside
    /// `[A-Za-z0-9.-]` is replaced with `_`.
    pub fn new(raw: &str) -> Self {
        Self(sanitize_file_component(raw))
    }

    /// Photograph key for an employee: `emp_<id>`.
    pub fn for_employee(id: EmployeeId) -> Self {
        Self::new(&format!("emp_{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
pub fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Extension of an uploaded file name, including the leading dot.
///
/// Only the last path segment is considered (clients may send full paths),
/// and the result is sanitized like a key. Returns an empty string when the
/// name has no dot.
pub fn extension_of(original_file_name: &str) -> String {
    let base = original_file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_file_name);
    match base.rfind('.') {
        Some(idx) => sanitize_file_component(&base[idx..]),
        None => String::new(),
    }
}
