use crate::entities::used_coupon_entity as used_coupons;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct CouponService {
    pool: DatabaseConnection,
}

impl CouponService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 使用优惠码
    ///
    /// 不先查询再插入：并发时以唯一约束为准，重复使用返回 UniqueViolation
    pub async fn redeem(&self, user_id: i64, coupon_code: &str) -> AppResult<UsedCouponResponse> {
        let code = normalize_code(coupon_code)?;
        let used = used_coupons::ActiveModel {
            coupon_code: Set(code),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| {
            let err = AppError::from(e);
            if let AppError::UniqueViolation(_) = &err {
                log::warn!("Coupon already used: {coupon_code}");
            }
            err
        })?;

        log::info!("Coupon redeemed: code={} user_id={user_id}", used.coupon_code);
        Ok(used.into())
    }

    pub async fn is_redeemed(&self, coupon_code: &str) -> AppResult<bool> {
        let code = normalize_code(coupon_code)?;
        let found = used_coupons::Entity::find()
            .filter(used_coupons::Column::CouponCode.eq(code))
            .one(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}

fn normalize_code(coupon_code: &str) -> AppResult<String> {
    let code = coupon_code.trim().to_ascii_uppercase();
    if code.is_empty() || code.len() > 50 {
        return Err(AppError::ValidationError(
            "Coupon code must be 1-50 characters".to_string(),
        ));
    }
    Ok(code)
}
