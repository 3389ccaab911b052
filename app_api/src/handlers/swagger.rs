use crate::handlers::common_handler::*;
use crate::handlers::request_handler::*;
use crate::result::ErrorBody;
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::biz_service::item_request_dto::{CreateItemRequestDto, EditStatusDto, ItemRequestPage};
use biz_service::entitys::item_request_entity::{ItemRequest, RequestStatus};
use common::repository_util::Pagination;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        status,
        list_requests,
        create_request,
        edit_status,
    ),
    components(schemas(
        ItemRequest,
        RequestStatus,
        ItemRequestPage,
        Pagination,
        CreateItemRequestDto,
        EditStatusDto,
        ErrorBody,
    )),
    tags(
        (name = "Request", description = "Item request submission and status lifecycle"),
        (name = "Common", description = "Liveness and API document")
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
#[get("/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};

    #[test]
    fn test_document_covers_request_resource() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let path = &doc["paths"]["/api/request"];
        assert!(path["get"].is_object());
        assert!(path["put"].is_object());
        assert!(path["patch"].is_object());
        assert!(doc["components"]["schemas"]["ItemRequest"].is_object());
    }

    #[actix_web::test]
    async fn test_openapi_endpoint() {
        let app = init_service(App::new().configure(configure)).await;
        let resp = call_service(&app, TestRequest::get().uri("/openapi.json").to_request()).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = read_body_json(resp).await;
        assert!(body["paths"]["/status"]["get"].is_object());
    }
}
