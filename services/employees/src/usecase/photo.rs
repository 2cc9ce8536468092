use hrportal_domain::id::EmployeeId;

use crate::domain::repository::{AssetStore, EmployeeRepository};
use crate::domain::types::{PhotoContent, content_type_for};
use crate::error::EmployeesServiceError;

// ── GetEmployeePhoto ─────────────────────────────────────────────────────────

pub struct GetEmployeePhotoUseCase<E: EmployeeRepository, A: AssetStore> {
    pub employees: E,
    pub assets: A,
}

impl<E: EmployeeRepository, A: AssetStore> GetEmployeePhotoUseCase<E, A> {
    pub async fn execute(&self, id: EmployeeId) -> Result<PhotoContent, EmployeesServiceError> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound)?;
        if !employee.has_photo() {
            return Err(EmployeesServiceError::PhotoNotFound);
        }
        let path = employee
            .photograph_path
            .ok_or(EmployeesServiceError::PhotoNotFound)?;
        let bytes = self.assets.load(&path).await?;
        Ok(PhotoContent {
            bytes,
            content_type: content_type_for(&path),
        })
    }
}
