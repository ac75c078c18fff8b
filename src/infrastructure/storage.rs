//! 存储基础设施
//!
//! 产品目录整体保存在单个 JSON 文档中，每次操作都读取全量文档、
//! 在内存中修改后整体覆盖写回。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::app::products::model::Catalog;

/// 存储错误类型
#[derive(Debug)]
pub enum StorageError {
    ReadFailed(String),
    WriteFailed(String),
    Malformed(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "读取失败: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "写入失败: {}", msg),
            StorageError::Malformed(msg) => write!(f, "文档格式损坏: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// 产品目录存储接口
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// 读取并解析完整目录文档
    async fn load(&self) -> Result<Catalog, StorageError>;

    /// 序列化目录并整体覆盖写回
    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

/// 基于 JSON 文件的存储实现
///
/// 写入不做原子替换，写到一半崩溃会损坏文档。
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn load(&self) -> Result<Catalog, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| StorageError::ReadFailed(err.to_string()))?;
        serde_json::from_str(&raw).map_err(|err| StorageError::Malformed(err.to_string()))
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let raw = serde_json::to_string(catalog)
            .map_err(|err| StorageError::WriteFailed(err.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|err| StorageError::WriteFailed(err.to_string()))
    }
}

/// 内存存储实现，测试用的替身
#[derive(Default)]
pub struct MemoryStore {
    catalog: Mutex<Catalog>,
}

impl MemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load(&self) -> Result<Catalog, StorageError> {
        Ok(self.catalog.lock().await.clone())
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        *self.catalog.lock().await = catalog.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::products::model::ProductDraft;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        let draft = ProductDraft {
            name: Some("Tarantula".to_string()),
            price: Some(10.0),
            ..Default::default()
        };
        catalog.spiders.push(draft.into_product(catalog.next_id()));
        catalog
    }

    #[tokio::test]
    async fn test_json_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        store.save(&sample_catalog()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.spiders.len(), 1);
        assert_eq!(loaded.spiders[0].id, 1);
        assert_eq!(loaded.spiders[0].name.as_deref(), Some("Tarantula"));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        assert!(matches!(
            store.load().await,
            Err(StorageError::ReadFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = JsonFileStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(StorageError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_store_replaces_document() {
        let store = MemoryStore::default();
        store.save(&sample_catalog()).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.spiders.len(), 1);
    }
}
