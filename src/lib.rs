//! # 蜘蛛产品目录服务
//!
//! 基于单个 JSON 文件存储的产品目录 CRUD 服务，包括：
//! - 分页查询产品列表
//! - 创建、更新、删除产品
//! - 图片上传（文件名取下一个可用 id）
//! - 已上传图片的静态文件服务

pub mod app;
pub mod core;
pub mod infrastructure;
