use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Bikes {
    Table,
    Id,
    SerialNumber,
    ModelName,
    Status,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// status 取值 AVAILABLE / IN_USE / REPAIRING 只是约定，不加 CHECK
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bikes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bikes::SerialNumber).string_len(50).not_null())
                    .col(ColumnDef::new(Bikes::ModelName).string_len(100).null())
                    .col(
                        ColumnDef::new(Bikes::Status)
                            .string_len(20)
                            .not_null()
                            .default("AVAILABLE"),
                    )
                    .col(ColumnDef::new(Bikes::Latitude).double().null())
                    .col(ColumnDef::new(Bikes::Longitude).double().null())
                    .col(
                        ColumnDef::new(Bikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bikes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uk_bikes_serial_number")
                    .table(Bikes::Table)
                    .col(Bikes::SerialNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bikes_status")
                    .table(Bikes::Table)
                    .col(Bikes::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Bikes::Table).to_owned())
            .await
    }
}
