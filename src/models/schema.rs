use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TableInfo {
    pub name: String,
    pub unique: Vec<String>,
    /// "column -> table.column"
    pub foreign_keys: Vec<String>,
    pub checks: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SchemaDescription {
    pub profile: String,
    pub tables: Vec<TableInfo>,
    pub applied_migrations: Vec<String>,
    pub pending_migrations: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
