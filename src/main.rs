//! 产品目录 API 服务器

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use spider_catalog::app::products::service::ProductService;
use spider_catalog::app::uploads::service::UploadService;
use spider_catalog::app::{self, AppState};
use spider_catalog::infrastructure::logger::Logger;
use spider_catalog::infrastructure::storage::{CatalogStore, JsonFileStore};

/// 监听地址
const ADDR: &str = "127.0.0.1:3000";
/// 目录文档路径
const DB_PATH: &str = "db.json";
/// 上传文件目录，同时作为静态文件根目录
const UPLOAD_DIR: &str = "tmp/uploads/images";

#[tokio::main]
async fn main() {
    Logger::init(Level::INFO);

    info!("启动产品目录服务器...");

    tokio::fs::create_dir_all(UPLOAD_DIR)
        .await
        .expect("无法创建上传目录");

    let store: Arc<dyn CatalogStore> = Arc::new(JsonFileStore::new(DB_PATH));
    let state = AppState {
        products: ProductService::new(store.clone()),
        uploads: UploadService::new(store, UPLOAD_DIR),
    };

    let app = app::router(state);

    let listener = TcpListener::bind(ADDR).await.expect("无法绑定监听地址");

    info!("🚀 产品目录服务器运行在 http://{}", ADDR);
    info!("📖 API 端点:");
    info!("   GET    /products         - 分页获取产品列表");
    info!("   POST   /products         - 创建新产品");
    info!("   POST   /products/upload  - 上传产品图片");
    info!("   PUT    /products/:id     - 更新产品");
    info!("   DELETE /products/:id     - 删除产品");
    info!("   GET    /health           - 健康检查");

    axum::serve(listener, app).await.expect("服务器启动失败");
}
