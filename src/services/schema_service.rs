use crate::database;
use crate::error::AppResult;
use crate::models::*;
use migration::{PAYMENT_STATUSES, SchemaProfile};
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct SchemaService {
    pool: DatabaseConnection,
    profile: SchemaProfile,
}

impl SchemaService {
    pub fn new(pool: DatabaseConnection, profile: SchemaProfile) -> Self {
        Self { pool, profile }
    }

    /// 当前配置下的表与约束，以及迁移状态
    pub async fn describe(&self) -> AppResult<SchemaDescription> {
        let applied = migration::applied_migrations(&self.pool, self.profile).await?;
        let pending = migration::pending_migrations(&self.pool, self.profile).await?;
        Ok(SchemaDescription {
            profile: self.profile.to_string(),
            tables: table_catalog(self.profile),
            applied_migrations: applied,
            pending_migrations: pending,
        })
    }

    pub async fn health(&self) -> HealthResponse {
        match database::ping(&self.pool).await {
            Ok(()) => HealthResponse {
                status: "ok".to_string(),
                database: "up".to_string(),
            },
            Err(e) => {
                log::error!("Database health check failed: {e}");
                HealthResponse {
                    status: "degraded".to_string(),
                    database: "down".to_string(),
                }
            }
        }
    }
}

fn table(name: &str, unique: &[&str], foreign_keys: &[&str], checks: Vec<String>) -> TableInfo {
    TableInfo {
        name: name.to_string(),
        unique: unique.iter().map(|s| s.to_string()).collect(),
        foreign_keys: foreign_keys.iter().map(|s| s.to_string()).collect(),
        checks,
    }
}

/// 与迁移保持一致的约束目录
pub fn table_catalog(profile: SchemaProfile) -> Vec<TableInfo> {
    let payment_checks = if profile.checks_payment_status() {
        vec![format!("payment_status IN ({})", PAYMENT_STATUSES.join(", "))]
    } else {
        Vec::new()
    };
    let inquiry_unique: &[&str] = if profile.unique_inquiry_file() {
        &["file_id"]
    } else {
        &[]
    };

    vec![
        table("users", &["username"], &[], Vec::new()),
        table("bikes", &["serial_number"], &[], Vec::new()),
        table(
            "rentals",
            &[],
            &["user_id -> users.id", "bike_id -> bikes.id"],
            Vec::new(),
        ),
        table("payments", &[], &["user_id -> users.id"], payment_checks),
        table("files", &[], &[], Vec::new()),
        table(
            "inquiries",
            inquiry_unique,
            &["user_id -> users.id", "file_id -> files.id"],
            Vec::new(),
        ),
        table("notices", &[], &["file_id -> files.id"], Vec::new()),
        table(
            "chats",
            &[],
            &["user_id -> users.id", "admin_id -> users.id"],
            Vec::new(),
        ),
        table(
            "used_coupons",
            &["coupon_code"],
            &["user_id -> users.id"],
            Vec::new(),
        ),
    ]
}
