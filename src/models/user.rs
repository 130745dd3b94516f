use crate::entities::user_entity as users;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "rider01")]
    pub username: String,
    #[schema(example = "Kim Minsu")]
    pub name: String,
    #[schema(example = "Password123")]
    pub password: String,
    #[schema(example = "rider01@example.com")]
    pub email: Option<String>,
    #[schema(example = "010-1234-5678")]
    pub phone: Option<String>,
    pub card_number: Option<String>,
    #[serde(default)]
    pub admin_level: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// 对外返回的用户信息，不包含 password / card_number / pass
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_point: i64,
    pub admin_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        let created_at = user.created_at.unwrap_or_else(Utc::now);
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            phone: user.phone,
            total_point: user.total_point,
            admin_level: user.admin_level,
            created_at,
            updated_at: user.updated_at.unwrap_or(created_at),
        }
    }
}
