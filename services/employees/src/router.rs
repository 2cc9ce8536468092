use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};

use hrportal_core::health::healthz;
use hrportal_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    department::{get_department_names, get_department_seats},
    employee::{
        create_employee, delete_employee, get_employee, get_employee_image, list_employees,
        update_employee,
    },
    health::readyz,
};
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Employees
        .route("/api/employee/get", get(list_employees))
        .route("/api/employee/get-by-id/{emp_id}", get(get_employee))
        .route("/api/employee/add", post(create_employee))
        .route("/api/employee/update/{emp_id}", put(update_employee))
        .route("/api/employee/delete/{emp_id}", delete(delete_employee))
        .route("/api/employee/image/{emp_id}", get(get_employee_image))
        // Departments
        .route("/api/department/seats-left", get(get_department_seats))
        .route("/api/department/names", get(get_department_names))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
