use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Employees::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Title).string().not_null())
                    .col(
                        ColumnDef::new(Employees::PhotographPath)
                            .string_len(500)
                            .null(),
                    )
                    .col(ColumnDef::new(Employees::DepartmentId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::DepartmentId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::DepartmentId)
                    .name("idx_employees_department_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employees_department_id").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    EmployeeId,
    FirstName,
    LastName,
    Email,
    Title,
    PhotographPath,
    DepartmentId,
}

#[derive(Iden)]
enum Departments {
    Table,
    DepartmentId,
}
