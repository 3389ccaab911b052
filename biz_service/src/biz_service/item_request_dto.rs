use crate::entitys::item_request_entity::ItemRequest;
use common::repository_util::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 列表查询参数，原样保留字符串，由服务层校验
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRequestsQuery {
    pub status: Option<String>,
    pub page: Option<String>,
}

/// 新建申请请求体；调用方传入的 `status` 等其它字段一律忽略
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequestDto {
    #[validate(
        required(message = "requestorName is required"),
        length(min = 3, max = 30, message = "requestorName must be between 3 and 30 characters")
    )]
    pub requestor_name: Option<String>,

    #[validate(
        required(message = "itemRequested is required"),
        length(min = 2, max = 100, message = "itemRequested must be between 2 and 100 characters")
    )]
    pub item_requested: Option<String>,
}

/// 修改状态请求体
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct EditStatusDto {
    #[validate(required(message = "id is required"), length(min = 1, message = "id must be a non-empty string"))]
    pub id: Option<String>,

    /// pending / completed / approved / rejected
    #[validate(required(message = "status is required"))]
    pub status: Option<String>,
}

/// 分页列表结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemRequestPage {
    pub data: Vec<ItemRequest>,
    pub pagination: Pagination,
}
