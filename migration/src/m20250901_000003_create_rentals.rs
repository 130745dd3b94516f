use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_users::Users;
use crate::m20250901_000002_create_bikes::Bikes;

#[derive(DeriveIden)]
enum Rentals {
    Table,
    Id,
    UserId,
    BikeId,
    StartTime,
    EndTime,
    TotalDistance,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rentals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rentals::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Rentals::BikeId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rentals::StartTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Rentals::EndTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Rentals::TotalDistance)
                            .double()
                            .null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Rentals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Rentals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // SQLite 不支持 ALTER TABLE ADD CONSTRAINT，外键随建表声明
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_user")
                            .from(Rentals::Table, Rentals::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_bike")
                            .from(Rentals::Table, Rentals::BikeId)
                            .to(Bikes::Table, Bikes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rentals_user")
                    .table(Rentals::Table)
                    .col(Rentals::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rentals_bike")
                    .table(Rentals::Table)
                    .col(Rentals::BikeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Rentals::Table).to_owned())
            .await
    }
}
