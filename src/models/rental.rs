use crate::entities::rental_entity as rentals;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StartRentalRequest {
    pub user_id: i64,
    pub bike_id: i64,
    /// 默认当前时间
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndRentalRequest {
    /// 默认当前时间
    pub end_time: Option<DateTime<Utc>>,
    /// 公里
    pub total_distance: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RentalQuery {
    /// 最近几天，默认 7
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RentalResponse {
    pub id: i64,
    pub user_id: i64,
    pub bike_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_distance: f64,
    pub ridden_minutes: Option<i64>,
}

impl From<rentals::Model> for RentalResponse {
    fn from(rental: rentals::Model) -> Self {
        let ridden_minutes = rental.ridden_minutes();
        Self {
            id: rental.id,
            user_id: rental.user_id,
            bike_id: rental.bike_id,
            start_time: rental.start_time,
            end_time: rental.end_time,
            total_distance: rental.total_distance.unwrap_or(0.0),
            ridden_minutes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsageSummaryResponse {
    pub user_id: i64,
    pub total_rentals: i64,
    pub completed_rentals: i64,
    pub total_distance: f64,
    pub total_minutes: i64,
}
