use crate::entities::notice_entity as notices;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{optional_text, require_text};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};

const DEFAULT_LIMIT: u64 = 5;
const MAX_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct NoticeService {
    pool: DatabaseConnection,
}

impl NoticeService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_notice(&self, request: CreateNoticeRequest) -> AppResult<NoticeResponse> {
        let title = require_text("title", &request.title, 200)?;
        let notice = notices::ActiveModel {
            title: Set(title),
            content: Set(optional_text(request.content)),
            file_id: Set(request.file_id),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(notice.into())
    }

    /// 最新公告
    pub async fn list_recent(&self, query: &NoticeQuery) -> AppResult<Vec<NoticeResponse>> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::ValidationError(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let list = notices::Entity::find()
            .order_by_desc(notices::Column::CreatedAt)
            .order_by_desc(notices::Column::Id)
            .limit(limit)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
