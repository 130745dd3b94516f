use crate::entities::chat_entity as chats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendChatRequest {
    pub user_id: i64,
    pub admin_id: i64,
    pub chat_msg: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub id: i64,
    pub user_id: i64,
    pub admin_id: i64,
    pub chat_msg: String,
    pub created_at: DateTime<Utc>,
}

impl From<chats::Model> for ChatResponse {
    fn from(chat: chats::Model) -> Self {
        Self {
            id: chat.id,
            user_id: chat.user_id,
            admin_id: chat.admin_id,
            chat_msg: chat.chat_msg,
            created_at: chat.created_at.unwrap_or_else(Utc::now),
        }
    }
}
