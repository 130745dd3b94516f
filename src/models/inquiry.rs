use crate::entities::inquiry_entity as inquiries;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateInquiryRequest {
    pub user_id: i64,
    #[schema(example = "Chain came off")]
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub file_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InquiryResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub admin_reply: Option<String>,
    pub image_url: Option<String>,
    pub file_id: Option<i64>,
    pub answered: bool,
    pub created_at: DateTime<Utc>,
}

impl From<inquiries::Model> for InquiryResponse {
    fn from(inquiry: inquiries::Model) -> Self {
        Self {
            id: inquiry.id,
            user_id: inquiry.user_id,
            title: inquiry.title,
            content: inquiry.content,
            answered: inquiry.admin_reply.is_some(),
            admin_reply: inquiry.admin_reply,
            image_url: inquiry.image_url,
            file_id: inquiry.file_id,
            created_at: inquiry.created_at.unwrap_or_else(Utc::now),
        }
    }
}
