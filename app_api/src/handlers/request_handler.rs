use crate::result::ErrorBody;
use actix_web::{HttpRequest, HttpResponse, Responder, get, patch, put, web};
use biz_service::biz_service::item_request_dto::{CreateItemRequestDto, EditStatusDto, ItemRequestPage, ListRequestsQuery};
use biz_service::biz_service::item_request_service::ItemRequestService;
use biz_service::entitys::item_request_entity::ItemRequest;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // 请求体 / 查询串解析失败统一走 AppError，保证返回 JSON 400
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(format!("invalid JSON body: {}", err)).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(format!("invalid query string: {}", err)).into()),
    );
    cfg.service(list_requests);
    cfg.service(create_request);
    cfg.service(edit_status);
    // 其余方法落到这里，返回 JSON 405 而不是空的 404
    cfg.service(web::resource("/api/request").to(method_not_allowed));
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!("{} is not supported on {}", req.method(), req.path())))
}

#[utoipa::path(
    get,
    path = "/api/request",
    tag = "Request",
    summary = "List item requests, newest first, 10 per page",
    params(
        ("status" = Option<String>, Query, description = "pending | completed | approved | rejected"),
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of requests", body = ItemRequestPage),
        (status = 400, description = "Invalid page or status", body = ErrorBody),
        (status = 500, description = "Service error", body = ErrorBody)
    )
)]
#[get("/api/request")]
pub async fn list_requests(
    service: web::Data<ItemRequestService>,
    query: web::Query<ListRequestsQuery>,
) -> Result<impl Responder, AppError> {
    let page = service.list_requests(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[utoipa::path(
    put,
    path = "/api/request",
    tag = "Request",
    summary = "Submit a new item request",
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Created request, status pending", body = ItemRequest),
        (status = 400, description = "Invalid requestorName or itemRequested", body = ErrorBody),
        (status = 500, description = "Service error", body = ErrorBody)
    )
)]
#[put("/api/request")]
pub async fn create_request(
    service: web::Data<ItemRequestService>,
    dto: web::Json<CreateItemRequestDto>,
) -> Result<impl Responder, AppError> {
    let created = service.create_request(dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    patch,
    path = "/api/request",
    tag = "Request",
    summary = "Change the status of a request",
    request_body = EditStatusDto,
    responses(
        (status = 200, description = "Updated request", body = ItemRequest),
        (status = 400, description = "Invalid id or status", body = ErrorBody),
        (status = 404, description = "No request with this id", body = ErrorBody),
        (status = 500, description = "Service error", body = ErrorBody)
    )
)]
#[patch("/api/request")]
pub async fn edit_status(
    service: web::Data<ItemRequestService>,
    dto: web::Json<EditStatusDto>,
) -> Result<impl Responder, AppError> {
    let updated = service.edit_status(dto.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}
