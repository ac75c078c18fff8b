//! 应用模块

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;

pub mod products;
pub mod uploads;

use products::service::ProductService;
use uploads::service::UploadService;

/// 允许访问的前端来源
pub const CORS_ORIGIN: &str = "http://localhost:4200";

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub uploads: UploadService,
}

/// 组装完整路由：产品 CRUD、图片上传、健康检查和静态文件兜底
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(CORS_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    let static_files = ServeDir::new(state.uploads.destination());

    Router::new()
        .merge(products::handler::routes())
        .merge(uploads::handler::routes())
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    match state.products.count().await {
        Ok(count) => Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "database": {
                "status": "ok",
                "products": count,
            },
        })),
        Err(_) => Json(json!({
            "status": "degraded",
            "version": env!("CARGO_PKG_VERSION"),
            "database": {
                "status": "error",
            },
        })),
    }
}
