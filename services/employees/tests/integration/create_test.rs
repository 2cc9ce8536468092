use hrportal_domain::id::{DepartmentId, EmployeeId};
use hrportal_employees::error::EmployeesServiceError;
use hrportal_employees::usecase::employee::CreateEmployeeInput;

use crate::helpers::{
    FULL_DEPT, Fixture, OPEN_DEPT, UNTRACKED_DEPT, ana, fields, upload,
};

#[tokio::test]
async fn should_create_employee_without_department_or_photo() {
    let fx = Fixture::new().await;
    let ana = fx.create_ana().await;

    assert_eq!(ana.id, EmployeeId(1));
    assert_eq!(ana.first_name, "Ana");
    assert_eq!(ana.department_id, None);
    assert_eq!(ana.photograph_path, None);
    assert_eq!(fx.employees.row(ana.id), Some(ana));
}

#[tokio::test]
async fn should_store_photo_named_after_generated_id() {
    let fx = Fixture::new().await;
    let created = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: None,
            photo: Some(upload("pic.png", b"PNGDATA")),
        })
        .await
        .unwrap();

    let path = created.photograph_path.clone().unwrap();
    assert_eq!(path, "/uploads/employee_photos/emp_1.png");
    assert!(fx.stored_file_exists(&path));
    assert_eq!(
        fx.employees.row(created.id).unwrap().photograph_path,
        Some(path)
    );
}

#[tokio::test]
async fn should_keep_only_last_segment_of_client_file_name() {
    let fx = Fixture::new().await;
    let created = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: None,
            photo: Some(upload("../../../etc/passwd.png", b"PNGDATA")),
        })
        .await
        .unwrap();

    assert_eq!(
        created.photograph_path.as_deref(),
        Some("/uploads/employee_photos/emp_1.png")
    );
}

#[tokio::test]
async fn should_ignore_empty_photo_on_create() {
    let fx = Fixture::new().await;
    let created = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: None,
            photo: Some(upload("pic.png", b"")),
        })
        .await
        .unwrap();

    assert_eq!(created.photograph_path, None);
}

#[tokio::test]
async fn should_keep_employee_when_photo_save_fails() {
    let fx = Fixture::new().await;
    let created = fx
        .create_uc_with(fx.flaky(true, false))
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: None,
            photo: Some(upload("pic.png", b"PNGDATA")),
        })
        .await
        .unwrap();

    assert_eq!(created.photograph_path, None);
    assert!(fx.employees.row(created.id).is_some());
    assert!(!fx.stored_file_exists("emp_1.png"));
}

#[tokio::test]
async fn should_remove_saved_file_when_attach_fails() {
    let fx = Fixture::new().await;
    *fx.employees.fail_updates.lock().unwrap() = true;

    let created = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: None,
            photo: Some(upload("pic.png", b"PNGDATA")),
        })
        .await
        .unwrap();

    assert_eq!(created.photograph_path, None);
    assert_eq!(fx.employees.row(created.id).unwrap().photograph_path, None);
    assert!(!fx.stored_file_exists("/uploads/employee_photos/emp_1.png"));
}

#[tokio::test]
async fn should_reject_full_department() {
    let fx = Fixture::new().await;
    let result = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: Some(FULL_DEPT),
            photo: Some(upload("pic.png", b"PNGDATA")),
        })
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::NoSeatsLeft)));
    assert!(fx.employees.rows.lock().unwrap().is_empty());
    assert!(!fx.stored_file_exists("emp_1.png"));
}

#[tokio::test]
async fn should_admit_departments_with_seats_or_no_counter() {
    let fx = Fixture::new().await;
    let create = fx.create_uc();

    let open = create
        .execute(CreateEmployeeInput {
            fields: fields("Bo", "bo@x.com"),
            department_id: Some(OPEN_DEPT),
            photo: None,
        })
        .await
        .unwrap();
    assert_eq!(open.department_id, Some(OPEN_DEPT));
    assert_eq!(open.department_name.as_deref(), Some("Engineering"));

    let untracked = create
        .execute(CreateEmployeeInput {
            fields: fields("Cy", "cy@x.com"),
            department_id: Some(UNTRACKED_DEPT),
            photo: None,
        })
        .await
        .unwrap();
    assert_eq!(untracked.department_id, Some(UNTRACKED_DEPT));
}

#[tokio::test]
async fn should_reject_unknown_department() {
    let fx = Fixture::new().await;
    let result = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: Some(DepartmentId(99)),
            photo: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(EmployeesServiceError::DepartmentNotFound)
    ));
}

#[tokio::test]
async fn should_treat_department_zero_as_none() {
    let fx = Fixture::new().await;
    let created = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: ana(),
            department_id: Some(DepartmentId(0)),
            photo: None,
        })
        .await
        .unwrap();

    assert_eq!(created.department_id, None);
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let fx = Fixture::new().await;
    fx.create_ana().await;

    let result = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: fields("Other", "ana@x.com"),
            department_id: None,
            photo: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(EmployeesServiceError::EmailAlreadyExists)
    ));
}

#[tokio::test]
async fn should_reject_invalid_email_before_insert() {
    let fx = Fixture::new().await;
    let result = fx
        .create_uc()
        .execute(CreateEmployeeInput {
            fields: fields("Ana", "ana-at-x"),
            department_id: None,
            photo: None,
        })
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::InvalidEmail)));
    assert!(fx.employees.rows.lock().unwrap().is_empty());
}
