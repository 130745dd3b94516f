use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_users::Users;

#[derive(DeriveIden)]
enum UsedCoupons {
    Table,
    Id,
    CouponCode,
    UserId,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// coupon_code 全局唯一: 同一个码无论哪个用户都只能使用一次
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsedCoupons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsedCoupons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UsedCoupons::CouponCode).string_len(50).not_null())
                    .col(ColumnDef::new(UsedCoupons::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UsedCoupons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_used_coupons_user")
                            .from(UsedCoupons::Table, UsedCoupons::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uk_used_coupons_code")
                    .table(UsedCoupons::Table)
                    .col(UsedCoupons::CouponCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_used_coupons_user")
                    .table(UsedCoupons::Table)
                    .col(UsedCoupons::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(UsedCoupons::Table).to_owned())
            .await
    }
}
