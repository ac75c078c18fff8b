//! 产品业务服务

use std::sync::Arc;

use super::model::{Product, ProductDraft};
use crate::core::error::ApiError;
use crate::core::response::Page;
use crate::infrastructure::storage::CatalogStore;

/// 产品目录服务
///
/// 每个操作都是一次整体读取、内存修改、（写操作再加）一次整体写回，
/// 请求之间没有任何协调。
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn CatalogStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// 分页获取产品列表
    pub async fn list(&self, page: usize, per_page: usize) -> Result<Page<Product>, ApiError> {
        let catalog = self.store.load().await?;
        Ok(Page::slice(&catalog.spiders, page, per_page))
    }

    /// 创建产品并追加到目录末尾
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, ApiError> {
        let mut catalog = self.store.load().await?;
        let product = draft.into_product(catalog.next_id());
        catalog.spiders.push(product.clone());
        self.store.save(&catalog).await?;
        Ok(product)
    }

    /// 整体替换指定 id 的记录，保持原有位置
    pub async fn update(&self, id: u64, draft: ProductDraft) -> Result<Product, ApiError> {
        let mut catalog = self.store.load().await?;
        let slot = catalog
            .spiders
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ApiError::NotFound)?;
        *slot = draft.into_product(id);
        let updated = slot.clone();
        self.store.save(&catalog).await?;
        Ok(updated)
    }

    /// 删除指定 id 的记录
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let mut catalog = self.store.load().await?;
        let index = catalog
            .spiders
            .iter()
            .position(|item| item.id == id)
            .ok_or(ApiError::NotFound)?;
        catalog.spiders.remove(index);
        self.store.save(&catalog).await?;
        Ok(())
    }

    /// 当前目录中的记录数
    pub async fn count(&self) -> Result<usize, ApiError> {
        Ok(self.store.load().await?.spiders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::products::model::Catalog;
    use crate::infrastructure::storage::MemoryStore;

    fn service_with(catalog: Catalog) -> ProductService {
        ProductService::new(Arc::new(MemoryStore::new(catalog)))
    }

    fn named(name: &str) -> ProductDraft {
        ProductDraft {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let service = service_with(Catalog::default());

        let first = service.create(named("Tarantula")).await.unwrap();
        let second = service.create(named("Huntsman")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_skips_deleted_ids() {
        let service = service_with(Catalog::default());
        service.create(named("a")).await.unwrap();
        service.create(named("b")).await.unwrap();
        service.delete(1).await.unwrap();

        let next = service.create(named("c")).await.unwrap();

        // 删除留下的空洞不会被回收
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = service_with(Catalog::default());

        let result = service.update(42, named("ghost")).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let service = service_with(Catalog::default());
        service
            .create(ProductDraft {
                name: Some("Tarantula".to_string()),
                price: Some(10.0),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = service.update(1, named("Huntsman")).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name.as_deref(), Some("Huntsman"));
        // 请求体里缺失的字段被整体替换清掉
        assert_eq!(updated.price, None);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = service_with(Catalog::default());
        service.create(named("a")).await.unwrap();
        service.create(named("b")).await.unwrap();

        service.delete(1).await.unwrap();

        let page = service.list(0, 10).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let service = service_with(Catalog::default());

        assert!(matches!(service.delete(9).await, Err(ApiError::NotFound)));
    }
}
