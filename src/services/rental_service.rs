use crate::entities::rental_entity as rentals;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

const DEFAULT_DAYS: i64 = 7;
const MAX_DAYS: i64 = 365;

#[derive(Clone)]
pub struct RentalService {
    pool: DatabaseConnection,
}

impl RentalService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 开始租借
    ///
    /// user_id / bike_id 的存在性由外键保证，这里不预先查询。
    /// 车辆状态不作为前置条件。
    pub async fn start_rental(&self, request: StartRentalRequest) -> AppResult<RentalResponse> {
        let rental = rentals::ActiveModel {
            user_id: Set(request.user_id),
            bike_id: Set(request.bike_id),
            start_time: Set(request.start_time.unwrap_or_else(Utc::now)),
            end_time: Set(None),
            total_distance: Set(Some(0.0)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Rental started: id={} user_id={} bike_id={}",
            rental.id,
            rental.user_id,
            rental.bike_id
        );
        Ok(rental.into())
    }

    /// 结束租借: end_time >= start_time，距离非负，只能结束一次
    pub async fn end_rental(
        &self,
        rental_id: i64,
        request: EndRentalRequest,
    ) -> AppResult<RentalResponse> {
        if !request.total_distance.is_finite() || request.total_distance < 0.0 {
            return Err(AppError::ValidationError(
                "total_distance must be a non-negative number".to_string(),
            ));
        }

        let rental = rentals::Entity::find_by_id(rental_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

        if rental.is_finished() {
            return Err(AppError::ValidationError(
                "Rental has already ended".to_string(),
            ));
        }

        let end_time = request.end_time.unwrap_or_else(Utc::now);
        if end_time < rental.start_time {
            log::warn!(
                "Rejected end_time before start_time: rental_id={rental_id} start={} end={end_time}",
                rental.start_time
            );
            return Err(AppError::ValidationError(
                "end_time must not be earlier than start_time".to_string(),
            ));
        }

        // end_time IS NULL 作为写入条件，保证只结束一次
        let result = rentals::Entity::update_many()
            .col_expr(rentals::Column::EndTime, Expr::value(Some(end_time)))
            .col_expr(
                rentals::Column::TotalDistance,
                Expr::value(Some(request.total_distance)),
            )
            .col_expr(rentals::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(rentals::Column::Id.eq(rental_id))
            .filter(rentals::Column::EndTime.is_null())
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::ValidationError(
                "Rental has already ended".to_string(),
            ));
        }
        let updated = rentals::Entity::find_by_id(rental_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

        log::info!(
            "Rental ended: id={} distance={}km",
            updated.id,
            request.total_distance
        );
        Ok(updated.into())
    }

    /// 最近 days 天内开始的租借，新的在前
    pub async fn list_recent(&self, user_id: i64, query: &RentalQuery) -> AppResult<Vec<RentalResponse>> {
        let days = query.days.unwrap_or(DEFAULT_DAYS);
        if !(1..=MAX_DAYS).contains(&days) {
            return Err(AppError::ValidationError(format!(
                "days must be between 1 and {MAX_DAYS}"
            )));
        }
        let since = Utc::now() - Duration::days(days);

        let list = rentals::Entity::find()
            .filter(rentals::Column::UserId.eq(user_id))
            .filter(rentals::Column::StartTime.gte(since))
            .order_by_desc(rentals::Column::StartTime)
            .order_by_desc(rentals::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 累计使用情况
    pub async fn usage_summary(&self, user_id: i64) -> AppResult<UsageSummaryResponse> {
        let list = rentals::Entity::find()
            .filter(rentals::Column::UserId.eq(user_id))
            .all(&self.pool)
            .await?;

        let mut summary = UsageSummaryResponse {
            user_id,
            total_rentals: list.len() as i64,
            completed_rentals: 0,
            total_distance: 0.0,
            total_minutes: 0,
        };
        for rental in &list {
            summary.total_distance += rental.total_distance.unwrap_or(0.0);
            if let Some(minutes) = rental.ridden_minutes() {
                summary.completed_rentals += 1;
                summary.total_minutes += minutes;
            }
        }
        summary.total_distance = (summary.total_distance * 1000.0).round() / 1000.0;

        Ok(summary)
    }
}
