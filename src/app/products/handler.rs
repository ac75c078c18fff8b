//! 产品 HTTP 处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

use super::model::{ListQuery, Product, ProductDraft};
use crate::app::AppState;
use crate::core::error::ApiError;
use crate::core::response::Page;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
}

/// 分页获取产品列表
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Product>>, ApiError> {
    let page = state.products.list(query.page(), query.per_page()).await?;
    Ok(Json(page))
}

/// 创建新产品
pub async fn create_product(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.products.create(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 更新产品，id 以路径参数为准
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, ApiError> {
    let id = id.parse().map_err(|_| ApiError::NotFound)?;
    let product = state.products.update(id, draft).await?;
    Ok(Json(product))
}

/// 删除产品
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = id.parse().map_err(|_| ApiError::NotFound)?;
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
