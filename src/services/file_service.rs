use crate::entities::file_entity as files;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{optional_text, require_text};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct FileService {
    pool: DatabaseConnection,
}

impl FileService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 登记文件元数据，存储文件名由 uuid 生成，避免与原始文件名冲突
    pub async fn register_file(&self, request: RegisterFileRequest) -> AppResult<FileResponse> {
        let original_name = require_text("original_name", &request.original_name, 255)?;
        let path = require_text("path", &request.path, 500)?;
        let ext = extension_of(&original_name);
        let file_name = stored_file_name(ext.as_deref());

        let file = files::ActiveModel {
            category: Set(optional_text(request.category)),
            original_name: Set(original_name),
            file_name: Set(file_name),
            ext: Set(ext),
            path: Set(path),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("File registered: id={} name={}", file.id, file.file_name);
        Ok(file.into())
    }

    pub async fn get_file(&self, file_id: i64) -> AppResult<FileResponse> {
        files::Entity::find_by_id(file_id)
            .one(&self.pool)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }
}

/// 小写扩展名，没有或过长时返回 None
fn extension_of(original_name: &str) -> Option<String> {
    let (stem, ext) = original_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > 20 {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn stored_file_name(ext: Option<&str>) -> String {
    match ext {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.JPG"), Some("jpg".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("weird.p n g"), None);
    }

    #[test]
    fn test_stored_file_name_is_unique() {
        let a = stored_file_name(Some("png"));
        let b = stored_file_name(Some("png"));
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert_eq!(stored_file_name(None).len(), 36);
    }
}
