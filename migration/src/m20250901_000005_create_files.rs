use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Files {
    Table,
    Id,
    Category,
    OriginalName,
    FileName,
    Ext,
    Path,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::Category).string_len(50).null())
                    .col(ColumnDef::new(Files::OriginalName).string_len(255).not_null())
                    .col(ColumnDef::new(Files::FileName).string_len(255).not_null())
                    .col(ColumnDef::new(Files::Ext).string_len(20).null())
                    .col(ColumnDef::new(Files::Path).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Files::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Files::Table).to_owned())
            .await
    }
}
