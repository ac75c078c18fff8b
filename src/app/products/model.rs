//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品记录
///
/// 除 id 外的字段全部可选，缺失的字段不会出现在存储文档和响应中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 创建 / 更新请求体，不做任何字段校验
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    pub image: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub classification: Option<String>,
    pub scientific_name: Option<String>,
    pub family: Option<String>,
    pub description: Option<String>,
}

impl ProductDraft {
    /// 以指定 id 生成完整记录
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            image: self.image,
            name: self.name,
            price: self.price,
            rating: self.rating,
            classification: self.classification,
            scientific_name: self.scientific_name,
            family: self.family,
            description: self.description,
        }
    }
}

/// 目录文档，对应存储文件的顶层结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub spiders: Vec<Product>,
}

impl Catalog {
    /// 下一个可用 id：现有最大 id 加一，空目录从 1 开始
    ///
    /// 每次创建和上传时重新计算，不单独持久化。
    pub fn next_id(&self) -> u64 {
        1 + self.spiders.iter().map(|item| item.id).max().unwrap_or(0)
    }
}

/// 分页查询参数，原样接收字符串，非数字时回退默认值
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    pub fn per_page(&self) -> usize {
        self.per_page
            .as_deref()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(10)
    }
}
