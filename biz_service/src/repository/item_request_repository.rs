use crate::entitys::item_request_entity::{ItemRequest, NewItemRequest, RequestStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::errors::AppError;

/// 申请记录的存储接口
///
/// 列表按 `created_date` 倒序，`created_date` 相同时按 `id` 倒序。
#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    async fn find_page(&self, status: Option<RequestStatus>, skip: u64, limit: u64) -> Result<Vec<ItemRequest>, AppError>;

    async fn count(&self, status: Option<RequestStatus>) -> Result<u64, AppError>;

    async fn insert(&self, new: NewItemRequest) -> Result<ItemRequest, AppError>;

    /// 设置状态并把 `last_edited_date` 推进到 `edited_at`（不会回退）。
    /// 找不到 `id` 时返回 `Ok(None)`。
    async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
        edited_at: DateTime<Utc>,
    ) -> Result<Option<ItemRequest>, AppError>;
}
