//! 核心响应处理模块

use serde::Serialize;

/// 分页响应结构
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// 按存储顺序截取第 `page` 页，越界时返回空页
    pub fn slice(items: &[T], page: usize, per_page: usize) -> Self {
        let total = items.len();
        let start = page.saturating_mul(per_page).min(total);
        let end = start.saturating_add(per_page).min(total);
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            data: items[start..end].to_vec(),
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_returns_requested_window() {
        let items: Vec<u64> = (1..=5).collect();
        let page = Page::slice(&items, 1, 2);

        assert_eq!(page.data, vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_slice_partial_last_page() {
        let items: Vec<u64> = (1..=5).collect();
        let page = Page::slice(&items, 2, 2);

        assert_eq!(page.data, vec![5]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_slice_out_of_range_page_is_empty() {
        let items: Vec<u64> = (1..=3).collect();
        let page = Page::slice(&items, 9, 10);

        assert!(page.data.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_slice_empty_collection() {
        let page = Page::<u64>::slice(&[], 0, 10);

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }
}
