pub mod bike;
pub mod notice;
pub mod system;
pub mod user;

pub use bike::bike_config;
pub use notice::notice_config;
pub use system::system_config;
pub use user::user_config;
