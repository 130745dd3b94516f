pub mod bike_service;
pub mod chat_service;
pub mod coupon_service;
pub mod file_service;
pub mod inquiry_service;
pub mod notice_service;
pub mod payment_service;
pub mod rental_service;
pub mod schema_service;
pub mod user_service;

pub use bike_service::BikeService;
pub use chat_service::ChatService;
pub use coupon_service::CouponService;
pub use file_service::FileService;
pub use inquiry_service::InquiryService;
pub use notice_service::NoticeService;
pub use payment_service::PaymentService;
pub use rental_service::RentalService;
pub use schema_service::SchemaService;
pub use user_service::UserService;
