use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use mongodb::error::Error as MongoError;
use serde::Serialize;
use thiserror::Error;

/// HTTP 错误响应结构
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
}

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    // ==== 调用方可修正的错误 ====
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),

    // ==== 系统错误 ====
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("MongoDB error: {0}")]
    Mongo(#[from] MongoError),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<::config::ConfigError> for AppError {
    fn from(e: ::config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut reasons: Vec<(String, String)> = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| {
                    // 有自定义 message 时 message 本身已包含字段名
                    let reason = match &err.message {
                        Some(message) => message.to_string(),
                        None => format!("{}: {}", field, err.code),
                    };
                    (field.to_string(), reason)
                })
            })
            .collect();
        reasons.sort();
        let message: Vec<String> = reasons.into_iter().map(|(_, reason)| reason).collect();
        AppError::InvalidInput(message.join("; "))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_) | AppError::Mongo(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) | AppError::MethodNotAllowed(msg) => msg.clone(),
            e => {
                error!("{:?}", e);
                "Service error".to_string()
            }
        };

        HttpResponse::build(status).json(ErrorResponse { code: status.as_u16(), message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::header::CONTENT_TYPE;
    use serde_json::Value;
    use validator::Validate;

    #[derive(Validate)]
    struct PageForm {
        #[validate(length(min = 3, message = "name is too short"))]
        name: String,
        #[validate(range(min = 1))]
        page: u64,
    }

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let resp = err.error_response();
        let status = resp.status();
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_invalid_input_is_bad_request() {
        let (status, body) = body_json(AppError::InvalidInput("page must be >= 1".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "page must be >= 1");
    }

    #[actix_web::test]
    async fn test_not_found() {
        let (status, body) = body_json(AppError::NotFound("gone".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], "gone");
    }

    #[actix_web::test]
    async fn test_method_not_allowed() {
        let (status, body) = body_json(AppError::MethodNotAllowed("DELETE is not supported".into())).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["code"], 405);
        assert_eq!(body["message"], "DELETE is not supported");
    }

    #[actix_web::test]
    async fn test_internal_detail_is_hidden() {
        let (status, body) = body_json(AppError::Internal("cursor exploded at node-3".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 500);
        assert_eq!(body["message"], "Service error");
    }

    #[test]
    fn test_validation_errors_name_each_field() {
        let form = PageForm { name: "ab".into(), page: 0 };
        let err = AppError::from(form.validate().unwrap_err());
        match err {
            AppError::InvalidInput(msg) => {
                assert_eq!(msg, "name is too short; page: range");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
