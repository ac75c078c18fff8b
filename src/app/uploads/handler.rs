//! 上传 HTTP 处理器

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};

use super::model::UploadReceipt;
use super::service::FILE_FIELD;
use crate::app::AppState;
use crate::core::error::ApiError;
use crate::infrastructure::storage::StorageError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products/upload", post(upload_file))
}

/// 接收 `file` 字段的图片上传，其余字段忽略
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadReceipt>), ApiError> {
    let mut uploaded = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| StorageError::ReadFailed(err.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let originalname = field.file_name().map(str::to_string);
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| StorageError::ReadFailed(err.to_string()))?;

        uploaded = Some(
            state
                .uploads
                .store_file(originalname, mimetype, data)
                .await?,
        );
    }

    // 上传不改动产品目录，只原样回写一遍
    state.uploads.rewrite_catalog().await?;

    Ok((StatusCode::CREATED, Json(UploadReceipt { req: uploaded })))
}
