use sea_orm::Database;
use tracing::info;

use hrportal_core::config::Config;
use hrportal_core::tracing::init_tracing;
use hrportal_employees::config::EmployeesConfig;
use hrportal_employees::infra::storage::LocalAssetStore;
use hrportal_employees::router::build_router;
use hrportal_employees::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = EmployeesConfig::from_env();

    let assets = LocalAssetStore::open(&config.asset_root, &config.employee_photos_dir)
        .await
        .expect("photo directory must exist and be writable");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db, assets };

    let router = build_router(state, config.max_upload_bytes);
    let addr = format!("0.0.0.0:{}", config.employees_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("employees service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
