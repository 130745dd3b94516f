use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_users::Users;
use crate::{PAYMENT_STATUSES, SchemaProfile};

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    UserId,
    Amount,
    RemainAmount,
    PaymentStatus,
    PaymentMethod,
    OrderId,
    TransactionId,
    CreatedAt,
    UpdatedAt,
}

pub struct Migration {
    pub profile: SchemaProfile,
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250901_000004_create_payments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut status = ColumnDef::new(Payments::PaymentStatus);
        status.string_len(20).not_null().default("READY");
        if self.profile.checks_payment_status() {
            status.check(Expr::col(Payments::PaymentStatus).is_in(PAYMENT_STATUSES));
        }

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::UserId).big_integer().not_null())
                    // 金额单位: 最小货币单位
                    .col(ColumnDef::new(Payments::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Payments::RemainAmount).big_integer().null())
                    .col(&mut status)
                    .col(ColumnDef::new(Payments::PaymentMethod).string_len(50).null())
                    .col(ColumnDef::new(Payments::OrderId).string_len(100).null())
                    .col(ColumnDef::new(Payments::TransactionId).string_len(100).null())
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Payments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_user")
                            .from(Payments::Table, Payments::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_user")
                    .table(Payments::Table)
                    .col(Payments::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Payments::Table).to_owned())
            .await
    }
}
