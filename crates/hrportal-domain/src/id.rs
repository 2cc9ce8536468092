//! Newtype wrappers for domain identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies an employee record. Assigned by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Identifies a department.
///
/// The wire value `0` is the legacy "no department" marker; use
/// [`DepartmentId::from_wire`] when reading client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(pub i32);

impl DepartmentId {
    /// Interpret a client-supplied id, mapping `0` to "unassigned".
    pub fn from_wire(raw: i32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    /// Wire value, `0` when unassigned.
    pub fn to_wire(id: Option<Self>) -> i32 {
        id.map_or(0, |d| d.0)
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DepartmentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i32> for DepartmentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
