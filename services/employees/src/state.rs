use sea_orm::DatabaseConnection;

use crate::infra::db::{DbDepartmentRepository, DbEmployeeRepository};
use crate::infra::storage::LocalAssetStore;
use crate::usecase::capacity::CapacityTracker;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// The single photo store for this process.
    pub assets: LocalAssetStore,
}

impl AppState {
    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn department_repo(&self) -> DbDepartmentRepository {
        DbDepartmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn capacity(&self) -> CapacityTracker<DbDepartmentRepository> {
        CapacityTracker {
            departments: self.department_repo(),
        }
    }

    pub fn asset_store(&self) -> LocalAssetStore {
        self.assets.clone()
    }
}
