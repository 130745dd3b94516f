pub mod bike;
pub mod chat;
pub mod common;
pub mod coupon;
pub mod file;
pub mod inquiry;
pub mod notice;
pub mod pagination;
pub mod payment;
pub mod rental;
pub mod schema;
pub mod user;

pub use bike::*;
pub use chat::*;
pub use common::*;
pub use coupon::*;
pub use file::*;
pub use inquiry::*;
pub use notice::*;
pub use pagination::*;
pub use payment::*;
pub use rental::*;
pub use schema::*;
pub use user::*;
