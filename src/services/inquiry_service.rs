use crate::entities::inquiry_entity as inquiries;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{optional_text, require_text};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct InquiryService {
    pool: DatabaseConnection,
}

impl InquiryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 提交咨询；enterprise 配置下同一文件只能挂在一条咨询上 (由唯一约束保证)
    pub async fn create_inquiry(&self, request: CreateInquiryRequest) -> AppResult<InquiryResponse> {
        let title = require_text("title", &request.title, 200)?;

        let inquiry = inquiries::ActiveModel {
            user_id: Set(request.user_id),
            title: Set(title),
            content: Set(optional_text(request.content)),
            admin_reply: Set(None),
            image_url: Set(optional_text(request.image_url)),
            file_id: Set(request.file_id),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Inquiry created: id={} user_id={}",
            inquiry.id,
            inquiry.user_id
        );
        Ok(inquiry.into())
    }

    /// 管理员回复，重复回复会覆盖之前的内容
    pub async fn reply(&self, inquiry_id: i64, reply: &str) -> AppResult<InquiryResponse> {
        let reply = require_text("admin_reply", reply, 4000)?;
        let mut model = inquiries::Entity::find_by_id(inquiry_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?
            .into_active_model();
        model.admin_reply = Set(Some(reply));
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<InquiryResponse>> {
        let list = inquiries::Entity::find()
            .filter(inquiries::Column::UserId.eq(user_id))
            .order_by_desc(inquiries::Column::CreatedAt)
            .order_by_desc(inquiries::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
