use std::path::PathBuf;

use serde::Deserialize;

use hrportal_core::config::Config;

/// Employees service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct EmployeesConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `EMPLOYEES_PORT`.
    #[serde(default = "default_port")]
    pub employees_port: u16,
    /// Base upload directory (default `./uploads`). Env var: `ASSET_ROOT`.
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    /// Photo sub-directory under the asset root (default `employee_photos`).
    /// Env var: `EMPLOYEE_PHOTOS_DIR`.
    #[serde(default = "default_photos_dir")]
    pub employee_photos_dir: String,
    /// Largest accepted request body in bytes (default 10 MiB). Env var: `MAX_UPLOAD_BYTES`.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Config for EmployeesConfig {}

fn default_port() -> u16 {
    8080
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_photos_dir() -> String {
    "employee_photos".to_owned()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}
