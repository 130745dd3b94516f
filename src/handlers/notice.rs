use crate::models::*;
use crate::services::NoticeService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/notices",
    tag = "notice",
    params(("limit" = Option<u64>, Query, description = "条数，默认 5")),
    responses(
        (status = 200, description = "最新公告", body = [NoticeResponse]),
        (status = 400, description = "请求参数错误", body = ApiError)
    )
)]
pub async fn get_notices(
    notice_service: web::Data<NoticeService>,
    query: web::Query<NoticeQuery>,
) -> Result<HttpResponse> {
    match notice_service.list_recent(&query.into_inner()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": list
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn notice_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/notices", web::get().to(get_notices));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{api, memory_db};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use migration::SchemaProfile;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_notices_default_limit_and_bounds() {
        let db = memory_db(SchemaProfile::Enterprise).await;
        let notices = NoticeService::new(db.clone());
        for i in 1..=6 {
            notices
                .create_notice(CreateNoticeRequest {
                    title: format!("Notice {i}"),
                    content: None,
                    file_id: None,
                })
                .await
                .unwrap();
        }
        let app = test::init_service(App::new().configure(api(db, SchemaProfile::Enterprise))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/notices").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(data[0]["title"], "Notice 6");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/notices?limit=101").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
