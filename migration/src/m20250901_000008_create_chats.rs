use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_users::Users;

#[derive(DeriveIden)]
enum Chats {
    Table,
    Id,
    UserId,
    AdminId,
    ChatMsg,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// user_id / admin_id 都指向 users，两条外键都显式声明
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chats::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chats::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Chats::AdminId).big_integer().not_null())
                    .col(ColumnDef::new(Chats::ChatMsg).text().not_null())
                    .col(
                        ColumnDef::new(Chats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_user")
                            .from(Chats::Table, Chats::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_admin")
                            .from(Chats::Table, Chats::AdminId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chats_user")
                    .table(Chats::Table)
                    .col(Chats::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chats_admin")
                    .table(Chats::Table)
                    .col(Chats::AdminId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Chats::Table).to_owned())
            .await
    }
}
