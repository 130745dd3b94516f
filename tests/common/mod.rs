#![allow(dead_code)]

use bike_rental_backend::models::*;
use bike_rental_backend::services::{BikeService, UserService};
use migration::SchemaProfile;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// 测试用最低 bcrypt cost
pub const TEST_BCRYPT_COST: u32 = 4;

/// 单连接内存 SQLite，走与生产相同的迁移
pub async fn setup(profile: SchemaProfile) -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("connect in-memory sqlite");
    migration::migrate_up(&db, profile)
        .await
        .expect("run migrations");
    db
}

pub async fn create_user(db: &DatabaseConnection, username: &str) -> UserResponse {
    create_user_with_level(db, username, 0).await
}

pub async fn create_user_with_level(
    db: &DatabaseConnection,
    username: &str,
    admin_level: i32,
) -> UserResponse {
    UserService::new(db.clone(), TEST_BCRYPT_COST)
        .create_user(CreateUserRequest {
            username: username.to_string(),
            name: format!("{username} name"),
            password: "Password123".to_string(),
            email: None,
            phone: None,
            card_number: None,
            admin_level,
        })
        .await
        .expect("create user")
}

pub async fn create_bike(
    db: &DatabaseConnection,
    serial_number: &str,
    position: Option<(f64, f64)>,
) -> BikeResponse {
    BikeService::new(db.clone())
        .register_bike(RegisterBikeRequest {
            serial_number: serial_number.to_string(),
            model_name: None,
            latitude: position.map(|p| p.0),
            longitude: position.map(|p| p.1),
        })
        .await
        .expect("register bike")
}
