use hrportal_domain::id::{DepartmentId, EmployeeId};
use hrportal_employees::domain::types::PhotoUpdate;
use hrportal_employees::error::EmployeesServiceError;
use hrportal_employees::usecase::employee::{CreateEmployeeInput, UpdateEmployeeInput};

use crate::helpers::{FULL_DEPT, Fixture, OPEN_DEPT, UNTRACKED_DEPT, ana, fields, upload};

fn replace(file_name: &str, bytes: &'static [u8]) -> UpdateEmployeeInput {
    UpdateEmployeeInput {
        fields: ana(),
        department_id: None,
        photo: PhotoUpdate::Replace(upload(file_name, bytes)),
    }
}

#[tokio::test]
async fn should_replace_photo_and_remove_previous_file() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();

    let first = update.execute(emp.id, replace("pic.png", b"PNG")).await.unwrap();
    let png = first.photograph_path.clone().unwrap();
    assert!(png.ends_with(&format!("emp_{}.png", emp.id)));
    assert!(fx.stored_file_exists(&png));

    let second = update.execute(emp.id, replace("pic2.jpg", b"JPG")).await.unwrap();
    let jpg = second.photograph_path.clone().unwrap();
    assert!(jpg.ends_with(&format!("emp_{}.jpg", emp.id)));
    assert!(fx.stored_file_exists(&jpg));
    assert!(!fx.stored_file_exists(&png));
}

#[tokio::test]
async fn should_keep_photo_when_no_part_sent() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();
    let with_photo = update.execute(emp.id, replace("pic.png", b"PNG")).await.unwrap();

    let mut fields = ana();
    fields.title = "Lead".to_owned();
    let kept = update
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields,
                department_id: None,
                photo: PhotoUpdate::Keep,
            },
        )
        .await
        .unwrap();

    assert_eq!(kept.title, "Lead");
    assert_eq!(kept.photograph_path, with_photo.photograph_path);
    assert!(fx.stored_file_exists(kept.photograph_path.as_deref().unwrap()));
}

#[tokio::test]
async fn should_clear_photo_and_remove_file() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();
    let with_photo = update.execute(emp.id, replace("pic.png", b"PNG")).await.unwrap();
    let path = with_photo.photograph_path.unwrap();

    let cleared = update
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: None,
                photo: PhotoUpdate::Clear,
            },
        )
        .await
        .unwrap();

    assert_eq!(cleared.photograph_path, None);
    assert!(!fx.stored_file_exists(&path));
}

#[tokio::test]
async fn should_treat_empty_replacement_as_clear() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();
    update.execute(emp.id, replace("pic.png", b"PNG")).await.unwrap();

    let cleared = update.execute(emp.id, replace("pic.png", b"")).await.unwrap();
    assert_eq!(cleared.photograph_path, None);
}

#[tokio::test]
async fn should_continue_when_old_photo_cannot_be_removed() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    fx.update_uc()
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await
        .unwrap();

    let updated = fx
        .update_uc_with(fx.flaky(false, true))
        .execute(emp.id, replace("pic2.jpg", b"JPG"))
        .await
        .unwrap();

    assert!(updated.photograph_path.unwrap().ends_with(".jpg"));
}

#[tokio::test]
async fn should_fail_update_when_new_photo_cannot_be_saved() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;

    let result = fx
        .update_uc_with(fx.flaky(true, false))
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::Storage(_))));
    assert_eq!(fx.employees.row(emp.id).unwrap().photograph_path, None);
}

#[tokio::test]
async fn should_keep_department_when_none_or_zero_requested() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();

    let moved = update
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: Some(OPEN_DEPT),
                photo: PhotoUpdate::Keep,
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.department_id, Some(OPEN_DEPT));

    for requested in [None, Some(DepartmentId(0))] {
        let kept = update
            .execute(
                emp.id,
                UpdateEmployeeInput {
                    fields: ana(),
                    department_id: requested,
                    photo: PhotoUpdate::Keep,
                },
            )
            .await
            .unwrap();
        assert_eq!(kept.department_id, Some(OPEN_DEPT));
        assert_eq!(kept.department_name.as_deref(), Some("Engineering"));
    }
}

#[tokio::test]
async fn should_reject_move_into_full_department() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;

    let result = fx
        .update_uc()
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: Some(FULL_DEPT),
                photo: PhotoUpdate::Keep,
            },
        )
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::NoSeatsLeft)));
    assert_eq!(fx.employees.row(emp.id).unwrap().department_id, None);
}

#[tokio::test]
async fn should_return_not_found_for_missing_employee() {
    let fx = Fixture::new().await;
    let result = fx
        .update_uc()
        .execute(EmployeeId(42), replace("pic.png", b"PNG"))
        .await;

    assert!(matches!(
        result,
        Err(EmployeesServiceError::EmployeeNotFound)
    ));
    assert!(!fx.stored_file_exists("emp_42.png"));
}

#[tokio::test]
async fn should_keep_old_photo_when_row_write_is_rejected() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();
    let png = update
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();
    fx.create_uc()
        .execute(CreateEmployeeInput {
            fields: fields("Bo", "bo@x.com"),
            department_id: None,
            photo: None,
        })
        .await
        .unwrap();

    let mut taken = ana();
    taken.email = "bo@x.com".to_owned();
    let result = update
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: taken,
                department_id: None,
                photo: PhotoUpdate::Replace(upload("pic2.jpg", b"JPG")),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(EmployeesServiceError::EmailAlreadyExists)
    ));
    let row = fx.employees.row(emp.id).unwrap();
    assert_eq!(row.photograph_path.as_deref(), Some(png.as_str()));
    assert!(fx.stored_file_exists(&png));
    assert!(!fx.stored_file_exists(&format!("emp_{}.jpg", emp.id)));
}

#[tokio::test]
async fn should_keep_old_photo_when_clear_is_rejected() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();
    let png = update
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();
    *fx.employees.fail_updates.lock().unwrap() = true;

    let result = update
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: None,
                photo: PhotoUpdate::Clear,
            },
        )
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::Internal(_))));
    assert!(fx.stored_file_exists(&png));
}

#[tokio::test]
async fn should_keep_old_photo_when_new_photo_cannot_be_saved() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let png = fx
        .update_uc()
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();

    let result = fx
        .update_uc_with(fx.flaky(true, false))
        .execute(emp.id, replace("pic2.jpg", b"JPG"))
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::Storage(_))));
    let row = fx.employees.row(emp.id).unwrap();
    assert_eq!(row.photograph_path.as_deref(), Some(png.as_str()));
    assert!(fx.stored_file_exists(&png));
}

#[tokio::test]
async fn should_clear_reference_when_failed_save_leaves_no_file() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let png = fx
        .update_uc()
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();
    fx.remove_stored_file(&png);

    let result = fx
        .update_uc_with(fx.flaky(true, false))
        .execute(emp.id, replace("pic.png", b"NEW"))
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::Storage(_))));
    assert_eq!(fx.employees.row(emp.id).unwrap().photograph_path, None);
}

#[tokio::test]
async fn should_overwrite_in_place_when_extension_is_unchanged() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let update = fx.update_uc();
    let first = update
        .execute(emp.id, replace("a.png", b"OLD"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();

    let second = update
        .execute(emp.id, replace("b.png", b"NEW"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();

    assert_eq!(first, second);
    let photo = fx.photo_uc().execute(emp.id).await.unwrap();
    assert_eq!(&photo.bytes[..], b"NEW");
}

#[tokio::test]
async fn should_reject_move_into_unknown_department() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;

    let result = fx
        .update_uc()
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: Some(DepartmentId(99)),
                photo: PhotoUpdate::Keep,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(EmployeesServiceError::DepartmentNotFound)
    ));
    assert_eq!(fx.employees.row(emp.id).unwrap().department_id, None);
}

#[tokio::test]
async fn should_allow_move_into_untracked_department() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;

    let moved = fx
        .update_uc()
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: Some(UNTRACKED_DEPT),
                photo: PhotoUpdate::Keep,
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.department_id, Some(UNTRACKED_DEPT));
    assert_eq!(moved.department_name.as_deref(), Some("Research"));
}

#[tokio::test]
async fn should_leave_photo_untouched_when_capacity_check_fails() {
    let fx = Fixture::new().await;
    let emp = fx.create_ana().await;
    let png = fx
        .update_uc()
        .execute(emp.id, replace("pic.png", b"PNG"))
        .await
        .unwrap()
        .photograph_path
        .unwrap();

    let result = fx
        .update_uc()
        .execute(
            emp.id,
            UpdateEmployeeInput {
                fields: ana(),
                department_id: Some(FULL_DEPT),
                photo: PhotoUpdate::Replace(upload("pic2.jpg", b"JPG")),
            },
        )
        .await;

    assert!(matches!(result, Err(EmployeesServiceError::NoSeatsLeft)));
    let row = fx.employees.row(emp.id).unwrap();
    assert_eq!(row.photograph_path.as_deref(), Some(png.as_str()));
    assert!(fx.stored_file_exists(&png));
    assert!(!fx.stored_file_exists(&format!("emp_{}.jpg", emp.id)));
}
