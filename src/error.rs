use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, RuntimeErr};
use serde_json::json;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(DbErr),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Not-null constraint violated: {0}")]
    NotNullViolation(String),

    #[error("Check constraint violated: {0}")]
    CheckViolation(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 是否为数据库约束冲突
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            AppError::UniqueViolation(_)
                | AppError::ForeignKeyViolation(_)
                | AppError::NotNullViolation(_)
                | AppError::CheckViolation(_)
        )
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        let sqlx_err = match &err {
            DbErr::Exec(RuntimeErr::SqlxError(e))
            | DbErr::Query(RuntimeErr::SqlxError(e))
            | DbErr::Conn(RuntimeErr::SqlxError(e)) => e,
            _ => return AppError::DatabaseError(err),
        };
        let Some(db_err) = sqlx_err.as_database_error() else {
            return AppError::DatabaseError(err);
        };
        classify(db_err).unwrap_or(AppError::DatabaseError(err))
    }
}

/// 根据驱动返回的错误类别区分约束冲突，其余交给调用方按普通数据库错误处理
fn classify(db_err: &dyn DatabaseError) -> Option<AppError> {
    let detail = match db_err.constraint() {
        Some(name) => format!("{} ({name})", db_err.message()),
        None => db_err.message().to_string(),
    };
    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(AppError::UniqueViolation(detail)),
        ErrorKind::ForeignKeyViolation => Some(AppError::ForeignKeyViolation(detail)),
        ErrorKind::NotNullViolation => Some(AppError::NotNullViolation(detail)),
        ErrorKind::CheckViolation => Some(AppError::CheckViolation(detail)),
        _ => None,
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
            ),
            AppError::UniqueViolation(msg) => {
                log::warn!("Unique constraint violated: {msg}");
                (
                    actix_web::http::StatusCode::CONFLICT,
                    "UNIQUE_VIOLATION",
                    "Duplicate value".to_string(),
                )
            }
            AppError::ForeignKeyViolation(msg) => {
                log::warn!("Foreign key constraint violated: {msg}");
                (
                    actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                    "FOREIGN_KEY_VIOLATION",
                    "Referenced record does not exist or is still referenced".to_string(),
                )
            }
            AppError::NotNullViolation(msg) => {
                log::warn!("Not-null constraint violated: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "NOT_NULL_VIOLATION",
                    "Required field missing".to_string(),
                )
            }
            AppError::CheckViolation(msg) => {
                log::warn!("Check constraint violated: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "CHECK_VIOLATION",
                    "Value not allowed".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                log::warn!("Concurrent modification: {msg}");
                (
                    actix_web::http::StatusCode::CONFLICT,
                    "CONFLICT",
                    msg.clone(),
                )
            }
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error".to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}
