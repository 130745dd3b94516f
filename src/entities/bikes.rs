use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, DeriveActiveEnum, EnumIter, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 车辆状态，只靠应用层约定，数据库不做校验
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BikeStatus {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "IN_USE")]
    InUse,
    #[sea_orm(string_value = "REPAIRING")]
    Repairing,
}

impl std::fmt::Display for BikeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BikeStatus::Available => write!(f, "AVAILABLE"),
            BikeStatus::InUse => write!(f, "IN_USE"),
            BikeStatus::Repairing => write!(f, "REPAIRING"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bikes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub serial_number: String,
    pub model_name: Option<String>,
    pub status: BikeStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// 坐标齐全时返回 (纬度, 经度)
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rentals::Entity")]
    Rentals,
}

impl Related<super::rentals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rentals.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert && matches!(self.created_at, ActiveValue::NotSet) {
            self.created_at = Set(Some(now));
        }
        self.updated_at = Set(Some(now));
        Ok(self)
    }
}
