use sea_orm_migration::prelude::*;

use crate::SchemaProfile;
use crate::m20250901_000001_create_users::Users;
use crate::m20250901_000005_create_files::Files;

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    UserId,
    Title,
    Content,
    AdminReply,
    ImageUrl,
    FileId,
    CreatedAt,
    UpdatedAt,
}

pub struct Migration {
    pub profile: SchemaProfile,
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250901_000006_create_inquiries"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inquiries::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Inquiries::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Inquiries::Content).text().null())
                    .col(ColumnDef::new(Inquiries::AdminReply).text().null())
                    .col(ColumnDef::new(Inquiries::ImageUrl).string_len(500).null())
                    .col(ColumnDef::new(Inquiries::FileId).big_integer().null())
                    .col(
                        ColumnDef::new(Inquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Inquiries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiries_user")
                            .from(Inquiries::Table, Inquiries::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiries_file")
                            .from(Inquiries::Table, Inquiries::FileId)
                            .to(Files::Table, Files::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inquiries_user")
                    .table(Inquiries::Table)
                    .col(Inquiries::UserId)
                    .to_owned(),
            )
            .await?;

        // enterprise: 一个文件最多对应一条咨询 (NULL 不受限)
        let mut file_index = Index::create();
        file_index
            .if_not_exists()
            .table(Inquiries::Table)
            .col(Inquiries::FileId);
        if self.profile.unique_inquiry_file() {
            file_index.name("uk_inquiries_file_id").unique();
        } else {
            file_index.name("idx_inquiries_file");
        }
        manager.create_index(file_index).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Inquiries::Table).to_owned())
            .await
    }
}
