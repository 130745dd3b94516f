use crate::entities::{BikeStatus, bike_entity as bikes};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{bounding_box, haversine_km, optional_text, require_text, validate_coordinates};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

const DEFAULT_RADIUS_KM: f64 = 1.0;
const MAX_RADIUS_KM: f64 = 50.0;

#[derive(Clone)]
pub struct BikeService {
    pool: DatabaseConnection,
}

impl BikeService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 登记车辆，初始状态 AVAILABLE
    pub async fn register_bike(&self, request: RegisterBikeRequest) -> AppResult<BikeResponse> {
        let serial_number = require_text("serial_number", &request.serial_number, 50)?;
        let (latitude, longitude) = match (request.latitude, request.longitude) {
            (Some(lat), Some(lon)) => {
                check_coordinates(lat, lon)?;
                (Some(lat), Some(lon))
            }
            (None, None) => (None, None),
            _ => {
                return Err(AppError::ValidationError(
                    "latitude and longitude must be provided together".to_string(),
                ));
            }
        };

        let bike = bikes::ActiveModel {
            serial_number: Set(serial_number),
            model_name: Set(optional_text(request.model_name)),
            status: Set(BikeStatus::Available),
            latitude: Set(latitude),
            longitude: Set(longitude),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Bike registered: id={} serial={}", bike.id, bike.serial_number);
        Ok(bike.into())
    }

    pub async fn get_bike(&self, bike_id: i64) -> AppResult<BikeResponse> {
        Ok(self.find_bike(bike_id).await?.into())
    }

    pub async fn update_status(&self, bike_id: i64, status: BikeStatus) -> AppResult<BikeResponse> {
        let bike = self.find_bike(bike_id).await?;
        let previous = bike.status;
        let mut model = bike.into_active_model();
        model.status = Set(status);
        let updated = model.update(&self.pool).await?;
        log::info!("Bike {bike_id} status: {previous} -> {status}");
        Ok(updated.into())
    }

    pub async fn update_location(
        &self,
        bike_id: i64,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<BikeResponse> {
        check_coordinates(latitude, longitude)?;
        let mut model = self.find_bike(bike_id).await?.into_active_model();
        model.latitude = Set(Some(latitude));
        model.longitude = Set(Some(longitude));
        Ok(model.update(&self.pool).await?.into())
    }

    /// 可租借车辆
    ///
    /// - 给定坐标: 返回半径内的车辆，按距离由近到远
    /// - 未给坐标: 返回全部 AVAILABLE 车辆，按 id 排序
    pub async fn list_available(&self, query: &AvailableBikesQuery) -> AppResult<Vec<BikeResponse>> {
        let base = bikes::Entity::find().filter(bikes::Column::Status.eq(BikeStatus::Available));

        let (lat, lon) = match (query.lat, query.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            (None, None) => {
                let list = base.order_by_asc(bikes::Column::Id).all(&self.pool).await?;
                return Ok(list.into_iter().map(Into::into).collect());
            }
            _ => {
                return Err(AppError::ValidationError(
                    "lat and lon must be provided together".to_string(),
                ));
            }
        };
        check_coordinates(lat, lon)?;

        let radius_km = query.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !(radius_km > 0.0 && radius_km <= MAX_RADIUS_KM) {
            return Err(AppError::ValidationError(format!(
                "radius_km must be in (0, {MAX_RADIUS_KM}]"
            )));
        }

        // 先用外接矩形在数据库中粗筛，再按实际距离精筛
        let bbox = bounding_box(lat, lon, radius_km);
        let lon_filter = bbox
            .lon_ranges
            .iter()
            .fold(Condition::any(), |cond, (lo, hi)| {
                cond.add(bikes::Column::Longitude.between(*lo, *hi))
            });
        let candidates = base
            .filter(bikes::Column::Latitude.between(bbox.min_lat, bbox.max_lat))
            .filter(lon_filter)
            .all(&self.pool)
            .await?;

        let mut nearby: Vec<(f64, bikes::Model)> = candidates
            .into_iter()
            .filter_map(|bike| {
                let (b_lat, b_lon) = bike.position()?;
                let distance = haversine_km(lat, lon, b_lat, b_lon);
                (distance <= radius_km).then_some((distance, bike))
            })
            .collect();
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.id.cmp(&b.1.id)));

        Ok(nearby
            .into_iter()
            .map(|(distance, bike)| {
                let mut resp = BikeResponse::from(bike);
                resp.distance_km = Some((distance * 1000.0).round() / 1000.0);
                resp
            })
            .collect())
    }

    async fn find_bike(&self, bike_id: i64) -> AppResult<bikes::Model> {
        bikes::Entity::find_by_id(bike_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Bike not found".to_string()))
    }
}

fn check_coordinates(lat: f64, lon: f64) -> AppResult<()> {
    if !validate_coordinates(lat, lon) {
        return Err(AppError::ValidationError(
            "Coordinates out of range".to_string(),
        ));
    }
    Ok(())
}
