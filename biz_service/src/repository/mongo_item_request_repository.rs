use crate::entitys::item_request_entity::{ItemRequest, ItemRequestEntity, NewItemRequest, RequestStatus};
use crate::repository::ItemRequestRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::errors::AppError;
use common::repository_util::{BaseRepository, Repository};
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};

pub const REQUEST_COLLECTION: &str = "requests";

pub struct MongoItemRequestRepository {
    pub dao: BaseRepository<ItemRequestEntity>,
}

impl MongoItemRequestRepository {
    pub fn new(db: &Database) -> Self {
        Self { dao: BaseRepository::new(db, REQUEST_COLLECTION) }
    }

    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        Ok(self.dao.ensure_indexes().await?)
    }
}

fn status_filter(status: Option<RequestStatus>) -> Document {
    match status {
        Some(status) => doc! { "status": status.as_ref() },
        None => doc! {},
    }
}

/// 按创建时间倒序，同一毫秒内再按 _id 倒序
fn newest_first() -> Document {
    doc! { "createdDate": -1, "_id": -1 }
}

/// 非法的 ObjectId 不可能命中任何文档
fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

fn status_update(status: RequestStatus, edited_at: DateTime<Utc>) -> Document {
    doc! {
        "$set": { "status": status.as_ref() },
        "$max": { "lastEditedDate": mongodb::bson::DateTime::from_chrono(edited_at) },
    }
}

#[async_trait]
impl ItemRequestRepository for MongoItemRequestRepository {
    async fn find_page(&self, status: Option<RequestStatus>, skip: u64, limit: u64) -> Result<Vec<ItemRequest>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let entities = self
            .dao
            .query_by_page(status_filter(status), newest_first(), skip, limit)
            .await?;
        entities.into_iter().map(ItemRequest::try_from).collect()
    }

    async fn count(&self, status: Option<RequestStatus>) -> Result<u64, AppError> {
        Ok(self.dao.count(status_filter(status)).await?)
    }

    async fn insert(&self, new: NewItemRequest) -> Result<ItemRequest, AppError> {
        let mut entity = ItemRequestEntity::from(new);
        let inserted_id = self.dao.insert(&entity).await?;
        let oid = inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal(format!("unexpected inserted id {inserted_id}")))?;
        entity.id = Some(oid);
        ItemRequest::try_from(entity)
    }

    async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
        edited_at: DateTime<Utc>,
    ) -> Result<Option<ItemRequest>, AppError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };
        let updated = self.dao.find_one_and_update(doc! { "_id": oid }, status_update(status, edited_at)).await?;
        updated.map(ItemRequest::try_from).transpose()
    }
}
