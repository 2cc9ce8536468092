use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::capacity::ListDepartmentsUseCase;

// ── GET /api/department/seats-left ───────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DepartmentSeatsResponse {
    pub department_id: i32,
    pub name: String,
    pub seats_left: Option<i32>,
}

pub async fn get_department_seats(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentSeatsResponse>>, EmployeesServiceError> {
    let usecase = ListDepartmentsUseCase {
        repo: state.department_repo(),
    };
    let departments = usecase.execute().await?;
    Ok(Json(
        departments
            .into_iter()
            .map(|d| DepartmentSeatsResponse {
                department_id: d.id.0,
                name: d.name,
                seats_left: d.seats_left,
            })
            .collect(),
    ))
}

// ── GET /api/department/names ────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DepartmentNameResponse {
    pub department_id: i32,
    pub name: String,
}

pub async fn get_department_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentNameResponse>>, EmployeesServiceError> {
    let usecase = ListDepartmentsUseCase {
        repo: state.department_repo(),
    };
    let departments = usecase.execute().await?;
    Ok(Json(
        departments
            .into_iter()
            .map(|d| DepartmentNameResponse {
                department_id: d.id.0,
                name: d.name,
            })
            .collect(),
    ))
}
