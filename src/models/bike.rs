use crate::entities::{BikeStatus, bike_entity as bikes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterBikeRequest {
    #[schema(example = "SN-2025-0001")]
    pub serial_number: String,
    #[schema(example = "City Cruiser 3")]
    pub model_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailableBikesQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// 默认 1.0 公里
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BikeResponse {
    pub id: i64,
    pub serial_number: String,
    pub model_name: Option<String>,
    pub status: BikeStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// 仅在按坐标查询时返回
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl From<bikes::Model> for BikeResponse {
    fn from(bike: bikes::Model) -> Self {
        Self {
            id: bike.id,
            serial_number: bike.serial_number,
            model_name: bike.model_name,
            status: bike.status,
            latitude: bike.latitude,
            longitude: bike.longitude,
            distance_km: None,
            updated_at: bike.updated_at.unwrap_or_else(Utc::now),
        }
    }
}
