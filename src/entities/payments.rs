use crate::models::PaymentStatus;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

/// 支付记录
/// - amount / remain_amount 以最小货币单位存储
/// - payment_status 保存为字符串: community 配置下数据库不校验取值,
///   读取时通过 [`Model::status`] 解析
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub remain_amount: Option<i64>,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub order_id: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// 无法识别的状态返回 None
    pub fn status(&self) -> Option<PaymentStatus> {
        PaymentStatus::parse_stored(&self.payment_status)
    }

    /// 未设置 remain_amount 的旧数据按全额计算
    pub fn remaining(&self) -> i64 {
        self.remain_amount.unwrap_or(self.amount)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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
