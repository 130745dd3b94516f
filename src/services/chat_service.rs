use crate::entities::{chat_entity as chats, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::require_text;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct ChatService {
    pool: DatabaseConnection,
}

impl ChatService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 发送消息；admin_id 必须是管理员 (admin_level > 0)
    pub async fn send_message(&self, request: SendChatRequest) -> AppResult<ChatResponse> {
        let chat_msg = require_text("chat_msg", &request.chat_msg, 4000)?;

        let admin = users::Entity::find_by_id(request.admin_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;
        if !admin.is_admin() {
            log::warn!("Chat rejected: user {} is not an admin", admin.id);
            return Err(AppError::ValidationError(
                "admin_id does not refer to an administrator".to_string(),
            ));
        }

        let chat = chats::ActiveModel {
            user_id: Set(request.user_id),
            admin_id: Set(request.admin_id),
            chat_msg: Set(chat_msg),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(chat.into())
    }

    /// 某个用户的全部会话消息，按时间正序
    pub async fn list_conversation(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ChatResponse>> {
        let base = chats::Entity::find().filter(chats::Column::UserId.eq(user_id));

        let total = base.clone().count(&self.pool).await? as i64;
        let items = base
            .order_by_asc(chats::Column::CreatedAt)
            .order_by_asc(chats::Column::Id)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(Into::into).collect(),
            params.get_page(),
            params.get_limit(),
            total,
        ))
    }
}
