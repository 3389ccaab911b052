use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// 错误响应体（由 `AppError` 生成），仅用于文档
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

pub fn result() -> Value {
    serde_json::json!({"code":200})
}
