//! 上传业务服务

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Bytes;

use super::model::UploadedFile;
use crate::core::error::ApiError;
use crate::infrastructure::storage::{CatalogStore, StorageError};

/// 多部分表单中携带文件的字段名
pub const FILE_FIELD: &str = "file";

/// 图片上传服务
#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn CatalogStore>,
    destination: PathBuf,
}

impl UploadService {
    pub fn new(store: Arc<dyn CatalogStore>, destination: impl Into<PathBuf>) -> Self {
        Self {
            store,
            destination: destination.into(),
        }
    }

    /// 上传目录，同时是静态文件根目录
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// 保存上传内容，文件名取目录的下一个可用 id 加声明的 MIME 子类型
    ///
    /// 子类型未经校验原样进入文件名。上传不创建也不关联任何产品记录，
    /// 所以之后再创建记录时文件名和记录 id 可能对不上。
    pub async fn store_file(
        &self,
        originalname: Option<String>,
        mimetype: String,
        data: Bytes,
    ) -> Result<UploadedFile, ApiError> {
        let catalog = self.store.load().await?;

        let extension = mimetype.splitn(2, '/').nth(1).unwrap_or("");
        let filename = format!("{}.{}", catalog.next_id(), extension);
        let path = self.destination.join(&filename);

        tokio::fs::write(&path, &data)
            .await
            .map_err(|err| StorageError::WriteFailed(err.to_string()))?;

        Ok(UploadedFile {
            fieldname: FILE_FIELD.to_string(),
            originalname,
            mimetype,
            destination: self.destination.display().to_string(),
            filename,
            path: path.display().to_string(),
            size: data.len() as u64,
        })
    }

    /// 把目录原样读出再写回，不做任何改动
    pub async fn rewrite_catalog(&self) -> Result<(), ApiError> {
        let catalog = self.store.load().await?;
        self.store.save(&catalog).await?;
        Ok(())
    }
}
