use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::BikeStatus;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::system::health,
        handlers::system::schema,
        handlers::user::get_profile,
        handlers::user::get_rentals,
        handlers::user::get_payments,
        handlers::user::get_payment_total,
        handlers::user::get_pricing_summary,
        handlers::user::get_usage,
        handlers::user::get_inquiries,
        handlers::bike::get_available,
        handlers::notice::get_notices,
    ),
    components(
        schemas(
            ApiError,
            HealthResponse,
            SchemaDescription,
            TableInfo,
            UserResponse,
            RentalResponse,
            UsageSummaryResponse,
            PaymentStatus,
            PaymentResponse,
            PaymentTotalResponse,
            PaymentStatusBreakdown,
            PricingSummaryResponse,
            InquiryResponse,
            BikeStatus,
            BikeResponse,
            NoticeResponse,
        )
    ),
    tags(
        (name = "system", description = "Health and schema API"),
        (name = "user", description = "User read API"),
        (name = "bike", description = "Bike search API"),
        (name = "notice", description = "Notice API"),
    ),
    info(
        title = "Bike Rental Backend API",
        version = "1.0.0",
        description = "Bike rental persistence layer REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
