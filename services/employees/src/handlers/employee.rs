use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use hrportal_domain::id::{DepartmentId, EmployeeId};

use crate::domain::types::Employee;
use crate::error::EmployeesServiceError;
use crate::handlers::form::EmployeeForm;
use crate::state::AppState;
use crate::usecase::employee::{
    CreateEmployeeInput, CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase,
    ListEmployeesUseCase, UpdateEmployeeInput, UpdateEmployeeUseCase,
};
use crate::usecase::photo::GetEmployeePhotoUseCase;

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub photograph_path: Option<String>,
    /// `0` when the employee has no department.
    pub department_id: i32,
    pub department_name: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.id.0,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            title: e.title,
            photograph_path: e.photograph_path,
            department_id: DepartmentId::to_wire(e.department_id),
            department_name: e.department_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── GET /api/employee/get ────────────────────────────────────────────────────

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, EmployeesServiceError> {
    let usecase = ListEmployeesUseCase {
        repo: state.employee_repo(),
    };
    let employees = usecase.execute().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

// ── GET /api/employee/get-by-id/{emp_id} ─────────────────────────────────────

pub async fn get_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<i32>,
) -> Result<Json<EmployeeResponse>, EmployeesServiceError> {
    let usecase = GetEmployeeUseCase {
        repo: state.employee_repo(),
    };
    let employee = usecase.execute(EmployeeId(emp_id)).await?;
    Ok(Json(employee.into()))
}

// ── POST /api/employee/add ───────────────────────────────────────────────────

pub async fn create_employee(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<EmployeeResponse>), EmployeesServiceError> {
    let form = EmployeeForm::from_multipart(multipart).await?;
    let usecase = CreateEmployeeUseCase {
        employees: state.employee_repo(),
        capacity: state.capacity(),
        assets: state.asset_store(),
    };
    let employee = usecase
        .execute(CreateEmployeeInput {
            fields: form.fields,
            department_id: form.department_id,
            photo: form.photograph,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

// ── PUT /api/employee/update/{emp_id} ────────────────────────────────────────

pub async fn update_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<EmployeeResponse>, EmployeesServiceError> {
    let form = EmployeeForm::from_multipart(multipart).await?;
    let usecase = UpdateEmployeeUseCase {
        employees: state.employee_repo(),
        capacity: state.capacity(),
        assets: state.asset_store(),
    };
    let employee = usecase
        .execute(
            EmployeeId(emp_id),
            UpdateEmployeeInput {
                fields: form.fields,
                department_id: form.department_id,
                photo: EmployeeForm::photo_update(form.photograph),
            },
        )
        .await?;
    Ok(Json(employee.into()))
}

// ── DELETE /api/employee/delete/{emp_id} ─────────────────────────────────────

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<i32>,
) -> Result<Json<MessageResponse>, EmployeesServiceError> {
    let usecase = DeleteEmployeeUseCase {
        employees: state.employee_repo(),
        assets: state.asset_store(),
    };
    usecase.execute(EmployeeId(emp_id)).await?;
    Ok(Json(MessageResponse { message: "Deleted" }))
}

// ── GET /api/employee/image/{emp_id} ─────────────────────────────────────────

pub async fn get_employee_image(
    State(state): State<AppState>,
    Path(emp_id): Path<i32>,
) -> Result<Response, EmployeesServiceError> {
    let usecase = GetEmployeePhotoUseCase {
        employees: state.employee_repo(),
        assets: state.asset_store(),
    };
    let photo = usecase.execute(EmployeeId(emp_id)).await?;
    Ok(([(header::CONTENT_TYPE, photo.content_type)], photo.bytes).into_response())
}
