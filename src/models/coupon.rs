use crate::entities::used_coupon_entity as used_coupons;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsedCouponResponse {
    pub id: i64,
    pub coupon_code: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<used_coupons::Model> for UsedCouponResponse {
    fn from(coupon: used_coupons::Model) -> Self {
        Self {
            id: coupon.id,
            coupon_code: coupon.coupon_code,
            user_id: coupon.user_id,
            created_at: coupon.created_at.unwrap_or_else(Utc::now),
        }
    }
}
