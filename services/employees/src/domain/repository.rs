#![allow(async_fn_in_trait)]

use bytes::Bytes;

use hrportal_domain::asset_key::AssetKey;
use hrportal_domain::id::{DepartmentId, EmployeeId};

use crate::domain::types::{Department, Employee, NewEmployee};
use crate::error::EmployeesServiceError;

/// Repository for employee records.
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeesServiceError>;

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeesServiceError>;

    /// Insert a row and return it with the generated id.
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, EmployeesServiceError>;

    /// Overwrite every mutable column of an existing row and return the stored state.
    async fn update(&self, employee: &Employee) -> Result<Employee, EmployeesServiceError>;

    /// Delete a row. Returns `true` if a row was deleted.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeesServiceError>;
}

/// Read-only access to departments and their seat counters.
pub trait DepartmentRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, EmployeesServiceError>;

    async fn find_all(&self) -> Result<Vec<Department>, EmployeesServiceError>;
}

/// Root-scoped store for employee photographs.
///
/// Every path is resolved against a single root directory; anything that
/// escapes it fails with `AccessDenied`.
pub trait AssetStore: Send + Sync {
    /// Write `payload` under `key` plus the extension of `original_file_name`,
    /// overwriting any existing file. Returns the store-relative path, or
    /// `None` when the payload is empty.
    async fn save(
        &self,
        key: &AssetKey,
        payload: &[u8],
        original_file_name: Option<&str>,
    ) -> Result<Option<String>, EmployeesServiceError>;

    /// Read a stored file. Fails with `PhotoNotFound` when absent.
    async fn load(&self, stored_path: &str) -> Result<Bytes, EmployeesServiceError>;

    /// Remove a stored file. Returns `false` if there was nothing to delete.
    async fn delete(&self, stored_path: &str) -> Result<bool, EmployeesServiceError>;

    /// Whether a stored path currently refers to a file.
    async fn exists(&self, stored_path: &str) -> Result<bool, EmployeesServiceError>;
}
