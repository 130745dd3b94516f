use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category: Option<String>,
    /// 上传时的原始文件名
    pub original_name: String,
    /// 存储文件名 (uuid + 扩展名)
    pub file_name: String,
    pub ext: Option<String>,
    pub path: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inquiries::Entity")]
    Inquiries,
    #[sea_orm(has_many = "super::notices::Entity")]
    Notices,
}

impl Related<super::inquiries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inquiries.def()
    }
}

impl Related<super::notices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notices.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && matches!(self.created_at, ActiveValue::NotSet) {
            self.created_at = Set(Some(Utc::now()));
        }
        Ok(self)
    }
}
