//! 上传文件元数据模型

use serde::Serialize;

/// 已存储文件的描述信息
#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    pub fieldname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originalname: Option<String>,
    pub mimetype: String,
    pub destination: String,
    pub filename: String,
    pub path: String,
    pub size: u64,
}

/// 上传接口的响应体，请求里没有文件字段时为空对象
#[derive(Debug, Serialize)]
pub struct UploadReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req: Option<UploadedFile>,
}
