use crate::models::*;
use crate::services::SchemaService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "服务与数据库正常", body = HealthResponse),
        (status = 503, description = "数据库不可用", body = HealthResponse)
    )
)]
pub async fn health(schema_service: web::Data<SchemaService>) -> Result<HttpResponse> {
    let health = schema_service.health().await;
    let mut builder = if health.database == "up" {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    Ok(builder.json(json!({
        "success": true,
        "data": health
    })))
}

#[utoipa::path(
    get,
    path = "/schema",
    tag = "system",
    responses(
        (status = 200, description = "当前约束配置与迁移状态", body = SchemaDescription)
    )
)]
pub async fn schema(schema_service: web::Data<SchemaService>) -> Result<HttpResponse> {
    match schema_service.describe().await {
        Ok(description) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": description
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn system_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/schema", web::get().to(schema));
}
