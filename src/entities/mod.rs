pub mod bikes;
pub mod chats;
pub mod files;
pub mod inquiries;
pub mod notices;
pub mod payments;
pub mod rentals;
pub mod used_coupons;
pub mod users;

pub use bikes::BikeStatus;

pub use bikes as bike_entity;
pub use chats as chat_entity;
pub use files as file_entity;
pub use inquiries as inquiry_entity;
pub use notices as notice_entity;
pub use payments as payment_entity;
pub use rentals as rental_entity;
pub use used_coupons as used_coupon_entity;
pub use users as user_entity;
