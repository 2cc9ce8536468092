use tracing::warn;

use hrportal_domain::id::DepartmentId;

use crate::domain::repository::DepartmentRepository;
use crate::domain::types::Department;
use crate::error::EmployeesServiceError;

// ── CapacityTracker ──────────────────────────────────────────────────────────

/// Read-only view of department seat state, consulted before every assignment.
///
/// The tracker never decrements `seats_left`; seat accounting belongs to
/// whatever process manages departments.
pub struct CapacityTracker<D: DepartmentRepository> {
    pub departments: D,
}

impl<D: DepartmentRepository> CapacityTracker<D> {
    pub async fn get(&self, id: DepartmentId) -> Result<Department, EmployeesServiceError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or(EmployeesServiceError::DepartmentNotFound)
    }

    pub async fn has_seat(&self, id: DepartmentId) -> Result<bool, EmployeesServiceError> {
        Ok(self.get(id).await?.has_seat())
    }

    /// Resolve a department an employee is about to join. Fails with
    /// `DepartmentNotFound` or `NoSeatsLeft`.
    pub async fn check_assignment(
        &self,
        id: DepartmentId,
    ) -> Result<Department, EmployeesServiceError> {
        let department = self.get(id).await?;
        if !department.is_consistent() {
            warn!(
                department_id = %department.id,
                capacity = ?department.capacity,
                seats_left = ?department.seats_left,
                "department seat counter out of bounds"
            );
        }
        if !department.has_seat() {
            return Err(EmployeesServiceError::NoSeatsLeft);
        }
        Ok(department)
    }
}

// ── ListDepartments ──────────────────────────────────────────────────────────

pub struct ListDepartmentsUseCase<D: DepartmentRepository> {
    pub repo: D,
}

impl<D: DepartmentRepository> ListDepartmentsUseCase<D> {
    pub async fn execute(&self) -> Result<Vec<Department>, EmployeesServiceError> {
        self.repo.find_all().await
    }
}
