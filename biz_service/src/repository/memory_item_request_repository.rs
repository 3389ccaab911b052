use crate::entitys::item_request_entity::{ItemRequest, NewItemRequest, RequestStatus};
use crate::repository::ItemRequestRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::errors::AppError;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;
use std::cmp::Reverse;

/// 进程内存仓储，ID 与 MongoDB 一样使用 ObjectId 十六进制
#[derive(Debug, Default)]
pub struct MemoryItemRequestRepository {
    rows: DashMap<String, ItemRequest>,
}

impl MemoryItemRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching(&self, status: Option<RequestStatus>) -> Vec<ItemRequest> {
        self.rows
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .map(|r| r.value().clone())
            .collect()
    }
}

#[async_trait]
impl ItemRequestRepository for MemoryItemRequestRepository {
    async fn find_page(&self, status: Option<RequestStatus>, skip: u64, limit: u64) -> Result<Vec<ItemRequest>, AppError> {
        let mut rows = self.matching(status);
        rows.sort_by_key(|r| Reverse((r.created_date, r.id.clone())));
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, status: Option<RequestStatus>) -> Result<u64, AppError> {
        Ok(self.matching(status).len() as u64)
    }

    async fn insert(&self, new: NewItemRequest) -> Result<ItemRequest, AppError> {
        let record = ItemRequest {
            id: ObjectId::new().to_hex(),
            requestor_name: new.requestor_name,
            item_requested: new.item_requested,
            status: new.status,
            created_date: new.created_date,
            last_edited_date: None,
        };
        self.rows.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
        edited_at: DateTime<Utc>,
    ) -> Result<Option<ItemRequest>, AppError> {
        let Some(mut row) = self.rows.get_mut(id) else {
            return Ok(None);
        };
        row.status = status;
        row.last_edited_date = Some(row.last_edited_date.map_or(edited_at, |prev| prev.max(edited_at)));
        Ok(Some(row.value().clone()))
    }
}
