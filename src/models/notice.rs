use crate::entities::notice_entity as notices;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: Option<String>,
    pub file_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoticeQuery {
    /// 默认 5
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoticeResponse {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub file_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<notices::Model> for NoticeResponse {
    fn from(notice: notices::Model) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            content: notice.content,
            file_id: notice.file_id,
            created_at: notice.created_at.unwrap_or_else(Utc::now),
        }
    }
}
