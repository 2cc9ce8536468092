use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, SqlErr,
};

use hrportal_domain::id::{DepartmentId, EmployeeId};
use hrportal_employees_schema::{departments, employees};

use crate::domain::repository::{DepartmentRepository, EmployeeRepository};
use crate::domain::types::{Department, Employee, NewEmployee};
use crate::error::EmployeesServiceError;

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl DbEmployeeRepository {
    async fn reload(&self, id: i32) -> Result<Employee, EmployeesServiceError> {
        self.find_by_id(EmployeeId(id))
            .await?
            .ok_or_else(|| anyhow!("employee {id} missing right after write").into())
    }
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeesServiceError> {
        let row = employees::Entity::find_by_id(id.0)
            .find_also_related(departments::Entity)
            .one(&self.db)
            .await
            .context("find employee by id")?;
        Ok(row.map(employee_from_models))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeesServiceError> {
        let rows = employees::Entity::find()
            .find_also_related(departments::Entity)
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
            .context("list employees")?;
        Ok(rows.into_iter().map(employee_from_models).collect())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, EmployeesServiceError> {
        let model = employees::ActiveModel {
            id: NotSet,
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
            title: Set(employee.title.clone()),
            photograph_path: Set(None),
            department_id: Set(employee.department_id.map(|d| d.0)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "create employee"))?;
        self.reload(model.id).await
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, EmployeesServiceError> {
        let model = employees::ActiveModel {
            id: Set(employee.id.0),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
            title: Set(employee.title.clone()),
            photograph_path: Set(employee.photograph_path.clone()),
            department_id: Set(employee.department_id.map(|d| d.0)),
        }
        .update(&self.db)
        .await
        .map_err(|e| write_error(e, "update employee"))?;
        self.reload(model.id).await
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeesServiceError> {
        let result = employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete employee")?;
        Ok(result.rows_affected > 0)
    }
}

/// Classify write failures: unique index on email, FK on department, missing row.
fn write_error(err: DbErr, context: &'static str) -> EmployeesServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EmployeesServiceError::EmailAlreadyExists,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => EmployeesServiceError::DepartmentNotFound,
        _ if matches!(err, DbErr::RecordNotUpdated) => EmployeesServiceError::EmployeeNotFound,
        _ => anyhow::Error::new(err).context(context).into(),
    }
}

fn employee_from_models(
    (model, department): (employees::Model, Option<departments::Model>),
) -> Employee {
    Employee {
        id: EmployeeId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        title: model.title,
        photograph_path: model.photograph_path,
        department_id: model.department_id.map(DepartmentId),
        department_name: department.map(|d| d.name),
    }
}

// ── Department repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDepartmentRepository {
    pub db: DatabaseConnection,
}

impl DepartmentRepository for DbDepartmentRepository {
    async fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, EmployeesServiceError> {
        let model = departments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find department by id")?;
        Ok(model.map(department_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Department>, EmployeesServiceError> {
        let models = departments::Entity::find()
            .order_by_asc(departments::Column::Id)
            .all(&self.db)
            .await
            .context("list departments")?;
        Ok(models.into_iter().map(department_from_model).collect())
    }
}

fn department_from_model(model: departments::Model) -> Department {
    Department {
        id: DepartmentId(model.id),
        name: model.name,
        capacity: model.capacity,
        seats_left: model.seats_left,
    }
}
