use sea_orm_migration::prelude::*;

use hrportal_employees_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
