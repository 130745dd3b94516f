pub use sea_orm_migration::prelude::*;

use sea_orm_migration::sea_orm::DatabaseConnection;
use std::fmt;
use std::str::FromStr;

mod m20250901_000001_create_users;
mod m20250901_000002_create_bikes;
mod m20250901_000003_create_rentals;
mod m20250901_000004_create_payments;
mod m20250901_000005_create_files;
mod m20250901_000006_create_inquiries;
mod m20250901_000007_create_notices;
mod m20250901_000008_create_chats;
mod m20250901_000009_create_used_coupons;

/// 数据库约束配置
///
/// - `Enterprise`: payment_status 带 CHECK 约束, inquiries.file_id 唯一
/// - `Community`: 上述两项均不由数据库约束
///
/// 两种配置的表结构与列完全一致，只在这两条约束上有区别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaProfile {
    #[default]
    Enterprise,
    Community,
}

impl SchemaProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaProfile::Enterprise => "enterprise",
            SchemaProfile::Community => "community",
        }
    }

    /// payment_status 是否由 CHECK 约束限定
    pub fn checks_payment_status(&self) -> bool {
        matches!(self, SchemaProfile::Enterprise)
    }

    /// 一个文件是否最多只能挂在一条咨询上
    pub fn unique_inquiry_file(&self) -> bool {
        matches!(self, SchemaProfile::Enterprise)
    }
}

impl fmt::Display for SchemaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enterprise" => Ok(SchemaProfile::Enterprise),
            "community" => Ok(SchemaProfile::Community),
            other => Err(format!("unknown schema profile: {other}")),
        }
    }
}

/// payment_status 在 enterprise 配置下允许的取值
pub const PAYMENT_STATUSES: [&str; 4] = ["READY", "DONE", "CANCELED", "PARTIAL_CANCELED"];

fn migrations_for(profile: SchemaProfile) -> Vec<Box<dyn MigrationTrait>> {
    vec![
        Box::new(m20250901_000001_create_users::Migration),
        Box::new(m20250901_000002_create_bikes::Migration),
        Box::new(m20250901_000003_create_rentals::Migration),
        Box::new(m20250901_000004_create_payments::Migration { profile }),
        Box::new(m20250901_000005_create_files::Migration),
        Box::new(m20250901_000006_create_inquiries::Migration { profile }),
        Box::new(m20250901_000007_create_notices::Migration),
        Box::new(m20250901_000008_create_chats::Migration),
        Box::new(m20250901_000009_create_used_coupons::Migration),
    ]
}

pub struct EnterpriseMigrator;

#[async_trait::async_trait]
impl MigratorTrait for EnterpriseMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        migrations_for(SchemaProfile::Enterprise)
    }
}

pub struct CommunityMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CommunityMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        migrations_for(SchemaProfile::Community)
    }
}

/// 按配置执行全部未应用的迁移
pub async fn migrate_up(db: &DatabaseConnection, profile: SchemaProfile) -> Result<(), DbErr> {
    match profile {
        SchemaProfile::Enterprise => EnterpriseMigrator::up(db, None).await,
        SchemaProfile::Community => CommunityMigrator::up(db, None).await,
    }
}

/// 已应用的迁移名称
pub async fn applied_migrations(
    db: &DatabaseConnection,
    profile: SchemaProfile,
) -> Result<Vec<String>, DbErr> {
    let list = match profile {
        SchemaProfile::Enterprise => EnterpriseMigrator::get_applied_migrations(db).await?,
        SchemaProfile::Community => CommunityMigrator::get_applied_migrations(db).await?,
    };
    Ok(list.iter().map(|m| m.name().to_string()).collect())
}

/// 尚未应用的迁移名称
pub async fn pending_migrations(
    db: &DatabaseConnection,
    profile: SchemaProfile,
) -> Result<Vec<String>, DbErr> {
    let list = match profile {
        SchemaProfile::Enterprise => EnterpriseMigrator::get_pending_migrations(db).await?,
        SchemaProfile::Community => CommunityMigrator::get_pending_migrations(db).await?,
    };
    Ok(list.iter().map(|m| m.name().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parse() {
        assert_eq!(
            "enterprise".parse::<SchemaProfile>().unwrap(),
            SchemaProfile::Enterprise
        );
        assert_eq!(
            " Community ".parse::<SchemaProfile>().unwrap(),
            SchemaProfile::Community
        );
        assert!("oracle".parse::<SchemaProfile>().is_err());
    }

    #[test]
    fn test_profile_constraints() {
        assert!(SchemaProfile::Enterprise.checks_payment_status());
        assert!(SchemaProfile::Enterprise.unique_inquiry_file());
        assert!(!SchemaProfile::Community.checks_payment_status());
        assert!(!SchemaProfile::Community.unique_inquiry_file());
    }

    #[test]
    fn test_both_profiles_share_migration_names() {
        let enterprise: Vec<String> = EnterpriseMigrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let community: Vec<String> = CommunityMigrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(enterprise.len(), 9);
        assert_eq!(enterprise, community);
        assert_eq!(enterprise[3], "m20250901_000004_create_payments");
    }

    async fn memory_db() -> DatabaseConnection {
        let mut options = sea_orm_migration::sea_orm::ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        sea_orm_migration::sea_orm::Database::connect(options)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_migrate_up_and_down_on_sqlite() {
        let db = memory_db().await;
        let profile = SchemaProfile::Community;

        assert_eq!(pending_migrations(&db, profile).await.unwrap().len(), 9);
        migrate_up(&db, profile).await.unwrap();
        assert!(pending_migrations(&db, profile).await.unwrap().is_empty());
        assert_eq!(applied_migrations(&db, profile).await.unwrap().len(), 9);

        CommunityMigrator::down(&db, None).await.unwrap();
        assert!(applied_migrations(&db, profile).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profile_is_fixed_after_creation() {
        let db = memory_db().await;
        migrate_up(&db, SchemaProfile::Enterprise).await.unwrap();
        // 同名迁移已应用，换配置不会重新建表
        assert!(
            pending_migrations(&db, SchemaProfile::Community)
                .await
                .unwrap()
                .is_empty()
        );
        migrate_up(&db, SchemaProfile::Community).await.unwrap();
    }
}
