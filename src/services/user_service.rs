use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{
    format_mobile_phone, hash_password, optional_text, require_text, validate_email,
    validate_password, verify_password,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(pool: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// 创建用户，username 唯一由数据库保证
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let username = request.username.trim().to_string();
        if username.chars().count() < 2 || username.chars().count() > 50 {
            return Err(AppError::ValidationError(
                "Username length must be between 2 and 50 characters".to_string(),
            ));
        }
        let name = require_text("name", &request.name, 100)?;
        validate_password(&request.password)?;

        let email = optional_text(request.email);
        if let Some(email) = &email {
            validate_email(email)?;
        }
        let phone = match optional_text(request.phone) {
            Some(p) => Some(format_mobile_phone(&p)?),
            None => None,
        };
        if request.admin_level < 0 {
            return Err(AppError::ValidationError(
                "admin_level must not be negative".to_string(),
            ));
        }

        let password = hash_password(&request.password, self.bcrypt_cost)?;

        let user = users::ActiveModel {
            username: Set(username),
            name: Set(name),
            password: Set(password),
            email: Set(email),
            phone: Set(phone),
            card_number: Set(optional_text(request.card_number)),
            pass: Set(None),
            total_point: Set(0),
            admin_level: Set(request.admin_level),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("User created: id={} username={}", user.id, user.username);
        Ok(user.into())
    }

    /// 获取用户资料（不含敏感字段）
    pub async fn get_user_profile(&self, user_id: i64) -> AppResult<UserResponse> {
        let user = self.find_user(user_id).await?;
        Ok(user.into())
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        if request.name.is_none() && request.email.is_none() && request.phone.is_none() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        let mut model = self.find_user(user_id).await?.into_active_model();
        if let Some(name) = &request.name {
            model.name = Set(require_text("name", name, 100)?);
        }
        if let Some(email) = request.email {
            // 空字符串表示清除
            let email = optional_text(Some(email));
            if let Some(e) = &email {
                validate_email(e)?;
            }
            model.email = Set(email);
        }
        if let Some(phone) = request.phone {
            let phone = match optional_text(Some(phone)) {
                Some(p) => Some(format_mobile_phone(&p)?),
                None => None,
            };
            model.phone = Set(phone);
        }

        let updated = model.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// 增减积分，结果不能为负
    pub async fn add_points(&self, user_id: i64, delta: i64) -> AppResult<UserResponse> {
        let required = delta
            .checked_neg()
            .ok_or_else(|| AppError::ValidationError("Point delta out of range".to_string()))?;
        let mut update = users::Entity::update_many()
            .col_expr(
                users::Column::TotalPoint,
                Expr::col(users::Column::TotalPoint).add(delta),
            )
            .col_expr(users::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(users::Column::Id.eq(user_id));
        if delta < 0 {
            update = update.filter(users::Column::TotalPoint.gte(required));
        }
        let result = update.exec(&self.pool).await?;

        if result.rows_affected == 0 {
            // 区分用户不存在与积分不足
            self.find_user(user_id).await?;
            log::warn!("Insufficient points: user_id={user_id} delta={delta}");
            return Err(AppError::ValidationError("Insufficient points".to_string()));
        }

        self.get_user_profile(user_id).await
    }

    /// 校验用户名与密码，用户名不存在与密码错误返回同一个错误
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<UserResponse> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username.trim()))
            .one(&self.pool)
            .await?;
        match user {
            Some(user) if verify_password(password, &user.password)? => Ok(user.into()),
            _ => {
                log::warn!("Credential check failed for username: {username}");
                Err(AppError::ValidationError(
                    "Invalid username or password".to_string(),
                ))
            }
        }
    }

    /// 删除用户；仍被租借/支付等记录引用时返回外键冲突
    pub async fn delete_user(&self, user_id: i64) -> AppResult<()> {
        let result = users::Entity::delete_by_id(user_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        log::info!("User deleted: id={user_id}");
        Ok(())
    }

    pub(crate) async fn find_user(&self, user_id: i64) -> AppResult<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
