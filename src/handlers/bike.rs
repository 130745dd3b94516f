use crate::models::*;
use crate::services::BikeService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/bikes/available",
    tag = "bike",
    params(
        ("lat" = Option<f64>, Query, description = "纬度"),
        ("lon" = Option<f64>, Query, description = "经度"),
        ("radius_km" = Option<f64>, Query, description = "搜索半径 (km)，默认 1")
    ),
    responses(
        (status = 200, description = "附近可用车辆，按距离排序", body = [BikeResponse]),
        (status = 400, description = "坐标或半径不合法", body = ApiError)
    )
)]
pub async fn get_available(
    bike_service: web::Data<BikeService>,
    query: web::Query<AvailableBikesQuery>,
) -> Result<HttpResponse> {
    match bike_service.list_available(&query.into_inner()).await {
        Ok(bikes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": bikes
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn bike_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/bikes").route("/available", web::get().to(get_available)));
}
