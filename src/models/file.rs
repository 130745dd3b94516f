use crate::entities::file_entity as files;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterFileRequest {
    #[schema(example = "inquiry")]
    pub category: Option<String>,
    #[schema(example = "broken_chain.JPG")]
    pub original_name: String,
    /// 存储目录
    #[schema(example = "/data/uploads/inquiry")]
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileResponse {
    pub id: i64,
    pub category: Option<String>,
    pub original_name: String,
    pub file_name: String,
    pub ext: Option<String>,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl From<files::Model> for FileResponse {
    fn from(file: files::Model) -> Self {
        Self {
            id: file.id,
            category: file.category,
            original_name: file.original_name,
            file_name: file.file_name,
            ext: file.ext,
            path: file.path,
            created_at: file.created_at.unwrap_or_else(Utc::now),
        }
    }
}
