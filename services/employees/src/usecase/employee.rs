use tracing::{debug, info, warn};

use hrportal_domain::asset_key::AssetKey;
use hrportal_domain::id::{DepartmentId, EmployeeId};

use crate::domain::repository::{AssetStore, DepartmentRepository, EmployeeRepository};
use crate::domain::types::{Employee, NewEmployee, PhotoUpdate, PhotoUpload, validate_email};
use crate::error::EmployeesServiceError;
use crate::usecase::capacity::CapacityTracker;

/// Scalar fields supplied on create and update.
#[derive(Debug, Clone)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
}

impl EmployeeFields {
    /// Every field is required and must not be blank.
    fn validate(&self) -> Result<(), EmployeesServiceError> {
        for (name, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("title", &self.title),
        ] {
            if value.trim().is_empty() {
                return Err(EmployeesServiceError::MissingField(name));
            }
        }
        if !validate_email(&self.email) {
            return Err(EmployeesServiceError::InvalidEmail);
        }
        Ok(())
    }
}

/// Resolve a requested department, treating id `0` as "none".
async fn assign_department<D: DepartmentRepository>(
    capacity: &CapacityTracker<D>,
    requested: Option<DepartmentId>,
) -> Result<Option<DepartmentId>, EmployeesServiceError> {
    match requested.filter(|id| id.0 != 0) {
        Some(id) => Ok(Some(capacity.check_assignment(id).await?.id)),
        None => Ok(None),
    }
}

/// Best-effort removal of an employee's current photo file.
async fn discard_photo<A: AssetStore>(assets: &A, employee: &Employee) {
    if !employee.has_photo() {
        return;
    }
    if let Some(path) = employee.photograph_path.as_deref() {
        discard_file(assets, employee.id, path).await;
    }
}

async fn discard_file<A: AssetStore>(assets: &A, id: EmployeeId, path: &str) {
    match assets.delete(path).await {
        Ok(true) => debug!(employee_id = %id, path, "photo removed"),
        Ok(false) => debug!(employee_id = %id, path, "photo already gone"),
        Err(e) => warn!(
            employee_id = %id,
            path,
            error = %e,
            "failed to remove photo; continuing"
        ),
    }
}

// ── CreateEmployee ───────────────────────────────────────────────────────────

pub struct CreateEmployeeInput {
    pub fields: EmployeeFields,
    pub department_id: Option<DepartmentId>,
    pub photo: Option<PhotoUpload>,
}

pub struct CreateEmployeeUseCase<E, D, A>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    A: AssetStore,
{
    pub employees: E,
    pub capacity: CapacityTracker<D>,
    pub assets: A,
}

impl<E, D, A> CreateEmployeeUseCase<E, D, A>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    A: AssetStore,
{
    /// Insert the row, then attach the photo as a separate best-effort step.
    ///
    /// The photo file name derives from the generated id, so it can only be
    /// written after the insert. Failures after the insert leave the employee
    /// in place without a photo.
    pub async fn execute(
        &self,
        input: CreateEmployeeInput,
    ) -> Result<Employee, EmployeesServiceError> {
        input.fields.validate()?;
        let department_id = assign_department(&self.capacity, input.department_id).await?;

        let EmployeeFields {
            first_name,
            last_name,
            email,
            title,
        } = input.fields;
        let employee = self
            .employees
            .create(&NewEmployee {
                first_name,
                last_name,
                email,
                title,
                department_id,
            })
            .await?;
        info!(employee_id = %employee.id, "employee created");

        match input.photo.filter(|p| !p.is_empty()) {
            Some(photo) => Ok(self.attach_photo(employee, photo).await),
            None => Ok(employee),
        }
    }

    /// Save the photo, then patch the row with its path.
    ///
    /// Compensations: a failed save leaves the row untouched; a failed patch
    /// removes the saved file again. Either way the caller gets the employee
    /// as inserted.
    async fn attach_photo(&self, employee: Employee, photo: PhotoUpload) -> Employee {
        let key = AssetKey::for_employee(employee.id);
        let path = match self
            .assets
            .save(&key, &photo.bytes, photo.file_name.as_deref())
            .await
        {
            Ok(Some(path)) => path,
            Ok(None) => return employee,
            Err(e) => {
                warn!(employee_id = %employee.id, error = %e, "photo save failed; employee kept without photo");
                return employee;
            }
        };

        let mut with_photo = employee.clone();
        with_photo.photograph_path = Some(path.clone());
        match self.employees.update(&with_photo).await {
            Ok(updated) => {
                info!(employee_id = %updated.id, path = %path, "photo attached");
                updated
            }
            Err(e) => {
                warn!(employee_id = %employee.id, error = %e, "photo attach failed; removing stored file");
                if let Err(e) = self.assets.delete(&path).await {
                    warn!(employee_id = %employee.id, path = %path, error = %e, "failed to remove unattached photo");
                }
                employee
            }
        }
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<E: EmployeeRepository> {
    pub repo: E,
}

impl<E: EmployeeRepository> GetEmployeeUseCase<E> {
    pub async fn execute(&self, id: EmployeeId) -> Result<Employee, EmployeesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound)
    }
}

// ── ListEmployees ────────────────────────────────────────────────────────────

pub struct ListEmployeesUseCase<E: EmployeeRepository> {
    pub repo: E,
}

impl<E: EmployeeRepository> ListEmployeesUseCase<E> {
    pub async fn execute(&self) -> Result<Vec<Employee>, EmployeesServiceError> {
        self.repo.find_all().await
    }
}

// ── UpdateEmployee ───────────────────────────────────────────────────────────

pub struct UpdateEmployeeInput {
    pub fields: EmployeeFields,
    /// `None` (or `0`) keeps the current department.
    pub department_id: Option<DepartmentId>,
    pub photo: PhotoUpdate,
}

pub struct UpdateEmployeeUseCase<E, D, A>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    A: AssetStore,
{
    pub employees: E,
    pub capacity: CapacityTracker<D>,
    pub assets: A,
}

impl<E, D, A> UpdateEmployeeUseCase<E, D, A>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    A: AssetStore,
{
    pub async fn execute(
        &self,
        id: EmployeeId,
        input: UpdateEmployeeInput,
    ) -> Result<Employee, EmployeesServiceError> {
        input.fields.validate()?;
        let current = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound)?;

        let department_id = match assign_department(&self.capacity, input.department_id).await? {
            Some(department_id) => Some(department_id),
            None => current.department_id,
        };

        let EmployeeFields {
            first_name,
            last_name,
            email,
            title,
        } = input.fields;
        let mut next = Employee {
            id,
            first_name,
            last_name,
            email,
            title,
            photograph_path: current.photograph_path.clone(),
            department_id,
            department_name: None,
        };

        match input.photo {
            PhotoUpdate::Replace(upload) if !upload.is_empty() => {
                self.replace_photo(&current, next, upload).await
            }
            PhotoUpdate::Keep => self.write(&next).await,
            PhotoUpdate::Clear | PhotoUpdate::Replace(_) => {
                next.photograph_path = None;
                let updated = self.write(&next).await?;
                discard_photo(&self.assets, &current).await;
                Ok(updated)
            }
        }
    }

    async fn write(&self, employee: &Employee) -> Result<Employee, EmployeesServiceError> {
        let updated = self.employees.update(employee).await?;
        info!(employee_id = %updated.id, "employee updated");
        Ok(updated)
    }

    /// Store the new file, point the row at it, then drop the old file.
    ///
    /// The old file is only removed once the row no longer references it.
    /// A failed row write removes the new file unless it overwrote the old
    /// one in place.
    async fn replace_photo(
        &self,
        current: &Employee,
        mut next: Employee,
        upload: PhotoUpload,
    ) -> Result<Employee, EmployeesServiceError> {
        let old_path = current.photograph_path.clone().filter(|_| current.has_photo());
        let saved = self
            .assets
            .save(
                &AssetKey::for_employee(current.id),
                &upload.bytes,
                upload.file_name.as_deref(),
            )
            .await;
        let new_path = match saved {
            Ok(path) => path,
            Err(e) => {
                self.drop_lost_reference(current, old_path.as_deref()).await;
                return Err(e);
            }
        };

        next.photograph_path = new_path.clone();
        let updated = match self.write(&next).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(path) = new_path.as_deref().filter(|p| Some(*p) != old_path.as_deref()) {
                    discard_file(&self.assets, current.id, path).await;
                }
                return Err(e);
            }
        };

        if let Some(old) = old_path.as_deref().filter(|p| Some(*p) != new_path.as_deref()) {
            discard_file(&self.assets, current.id, old).await;
        }
        Ok(updated)
    }

    /// A failed save may have destroyed a file stored under the same name.
    /// Detach it so the row never references a missing file.
    async fn drop_lost_reference(&self, current: &Employee, old_path: Option<&str>) {
        let Some(old) = old_path else {
            return;
        };
        if !matches!(self.assets.exists(old).await, Ok(false)) {
            return;
        }
        let detached = Employee {
            photograph_path: None,
            ..current.clone()
        };
        match self.employees.update(&detached).await {
            Ok(_) => warn!(
                employee_id = %current.id,
                path = old,
                "photo lost during replace; reference cleared"
            ),
            Err(e) => warn!(
                employee_id = %current.id,
                path = old,
                error = %e,
                "failed to clear lost photo reference"
            ),
        }
    }
}

// ── DeleteEmployee ───────────────────────────────────────────────────────────

pub struct DeleteEmployeeUseCase<E: EmployeeRepository, A: AssetStore> {
    pub employees: E,
    pub assets: A,
}

impl<E: EmployeeRepository, A: AssetStore> DeleteEmployeeUseCase<E, A> {
    /// Remove the row, then its photo file (best-effort). Returns the deleted record.
    pub async fn execute(&self, id: EmployeeId) -> Result<Employee, EmployeesServiceError> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound)?;
        if !self.employees.delete(id).await? {
            return Err(EmployeesServiceError::EmployeeNotFound);
        }
        info!(employee_id = %id, "employee deleted");
        discard_photo(&self.assets, &employee).await;
        Ok(employee)
    }
}
