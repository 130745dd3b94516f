use crate::models::*;
use crate::services::{InquiryService, PaymentService, RentalService, UserService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/users/{id}/profile",
    tag = "user",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "获取用户资料成功", body = UserResponse),
        (status = 404, description = "用户不存在", body = ApiError)
    )
)]
pub async fn get_profile(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match user_service.get_user_profile(path.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": user
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/rentals",
    tag = "user",
    params(
        ("id" = i64, Path, description = "用户 ID"),
        ("days" = Option<i64>, Query, description = "最近天数，默认 7")
    ),
    responses(
        (status = 200, description = "最近的租借记录", body = [RentalResponse]),
        (status = 400, description = "请求参数错误", body = ApiError)
    )
)]
pub async fn get_rentals(
    rental_service: web::Data<RentalService>,
    path: web::Path<i64>,
    query: web::Query<RentalQuery>,
) -> Result<HttpResponse> {
    match rental_service
        .list_recent(path.into_inner(), &query.into_inner())
        .await
    {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": list
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/payments",
    tag = "user",
    params(
        ("id" = i64, Path, description = "用户 ID"),
        ("limit" = Option<u64>, Query, description = "条数，默认 10")
    ),
    responses(
        (status = 200, description = "最近的支付记录", body = [PaymentResponse]),
        (status = 400, description = "请求参数错误", body = ApiError)
    )
)]
pub async fn get_payments(
    payment_service: web::Data<PaymentService>,
    path: web::Path<i64>,
    query: web::Query<PaymentQuery>,
) -> Result<HttpResponse> {
    match payment_service
        .list_recent(path.into_inner(), &query.into_inner())
        .await
    {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": list
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/payments/total",
    tag = "user",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "已结算金额合计", body = PaymentTotalResponse)
    )
)]
pub async fn get_payment_total(
    payment_service: web::Data<PaymentService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match payment_service.total(path.into_inner()).await {
        Ok(total) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": total
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/payments/summary",
    tag = "user",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "按状态分组的费用汇总", body = PricingSummaryResponse)
    )
)]
pub async fn get_pricing_summary(
    payment_service: web::Data<PaymentService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match payment_service.pricing_summary(path.into_inner()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": summary
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/usage",
    tag = "user",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "骑行统计", body = UsageSummaryResponse)
    )
)]
pub async fn get_usage(
    rental_service: web::Data<RentalService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match rental_service.usage_summary(path.into_inner()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": summary
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/inquiries",
    tag = "user",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "用户的咨询列表", body = [InquiryResponse])
    )
)]
pub async fn get_inquiries(
    inquiry_service: web::Data<InquiryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match inquiry_service.list_by_user(path.into_inner()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": list
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users/{id}")
            .route("/profile", web::get().to(get_profile))
            .route("/rentals", web::get().to(get_rentals))
            .route("/payments", web::get().to(get_payments))
            .route("/payments/total", web::get().to(get_payment_total))
            .route("/payments/summary", web::get().to(get_pricing_summary))
            .route("/usage", web::get().to(get_usage))
            .route("/inquiries", web::get().to(get_inquiries)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{api, memory_db};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use migration::SchemaProfile;
    use serde_json::Value;

    async fn rider(db: &sea_orm::DatabaseConnection) -> UserResponse {
        UserService::new(db.clone(), 4)
            .create_user(CreateUserRequest {
                username: "rider01".to_string(),
                name: "Kim Minsu".to_string(),
                password: "Password123".to_string(),
                email: Some("rider01@example.com".to_string()),
                phone: Some("010-1234-5678".to_string()),
                card_number: None,
                admin_level: 0,
            })
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_profile_found_and_missing() {
        let db = memory_db(SchemaProfile::Enterprise).await;
        let user = rider(&db).await;
        let app = test::init_service(App::new().configure(api(db, SchemaProfile::Enterprise))).await;

        let uri = format!("/api/v1/users/{}/profile", user.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["username"], "rider01");
        assert!(body["data"].get("password").is_none());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/users/9999/profile").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_query_bounds_are_rejected() {
        let db = memory_db(SchemaProfile::Enterprise).await;
        let user = rider(&db).await;
        let app = test::init_service(App::new().configure(api(db, SchemaProfile::Enterprise))).await;

        for uri in [
            format!("/api/v1/users/{}/rentals?days=0", user.id),
            format!("/api/v1/users/{}/payments?limit=101", user.id),
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_payment_endpoints() {
        let db = memory_db(SchemaProfile::Enterprise).await;
        let user = rider(&db).await;
        let payments = PaymentService::new(db.clone());
        let paid = payments
            .create_payment(CreatePaymentRequest {
                user_id: user.id,
                amount: 1000,
                payment_method: Some("CARD".to_string()),
                order_id: Some("ORD-1".to_string()),
                transaction_id: None,
            })
            .await
            .unwrap();
        payments.complete(paid.id, Some("TX-1".to_string())).await.unwrap();
        payments
            .create_payment(CreatePaymentRequest {
                user_id: user.id,
                amount: 500,
                payment_method: None,
                order_id: Some("ORD-2".to_string()),
                transaction_id: None,
            })
            .await
            .unwrap();
        let app = test::init_service(App::new().configure(api(db, SchemaProfile::Enterprise))).await;

        let uri = format!("/api/v1/users/{}/payments", user.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let uri = format!("/api/v1/users/{}/payments/total", user.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["settled_count"], 1);
        assert_eq!(body["data"]["total_amount"], 1000);

        let uri = format!("/api/v1/users/{}/payments/summary", user.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["payment_count"], 2);
        assert_eq!(body["data"]["gross_amount"], 1500);
        assert_eq!(body["data"]["settled_amount"], 1000);
        assert_eq!(body["data"]["by_status"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_usage_and_inquiries_for_new_user() {
        let db = memory_db(SchemaProfile::Community).await;
        let user = rider(&db).await;
        let app = test::init_service(App::new().configure(api(db, SchemaProfile::Community))).await;

        let uri = format!("/api/v1/users/{}/usage", user.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total_rentals"], 0);

        let uri = format!("/api/v1/users/{}/inquiries", user.id);
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }
}
