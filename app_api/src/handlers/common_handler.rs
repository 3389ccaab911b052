use crate::result::result;
use actix_web::{Responder, get, web};
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(status);
}
#[utoipa::path(
    get,
    path = "/status",
    tag = "Common",
    summary = "Get the status of the service",
    responses(
        (status = 200, description = "Service is up")
    )
)]
#[get("/status")]
pub async fn status() -> Result<impl Responder, AppError> {
    Ok(web::Json(result()))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_status() {
        let app = test::init_service(App::new().configure(super::configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/status").to_request()).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"code": 200}));
    }
}
