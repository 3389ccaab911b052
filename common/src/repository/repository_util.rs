use crate::index_trait::MongoIndexModelProvider;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database, error::Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use utoipa::ToSchema;

/// 分页元数据
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 当前页（从 1 开始）
    pub current_page: u64,
    /// 总页数 = ceil(总数 / 每页大小)
    pub total_pages: u64,
    /// 匹配条件的总记录数
    pub total_requests: u64,
}

impl Pagination {
    pub fn new(current_page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };
        Self { current_page, total_pages, total_requests: total }
    }
}

#[async_trait]
pub trait Repository<T> {
    async fn insert(&self, entity: &T) -> Result<Bson>;
    async fn count(&self, filter: Document) -> Result<u64>;
    async fn query_by_page(&self, filter: Document, sort: Document, skip: u64, limit: i64) -> Result<Vec<T>>;
    async fn find_one_and_update(&self, filter: Document, update: Document) -> Result<Option<T>>;
}

pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>,
    _marker: PhantomData<T>,
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self { collection: db.collection::<T>(collection_name), _marker: Default::default() }
    }

    pub async fn ensure_indexes(&self) -> Result<()>
    where
        T: MongoIndexModelProvider,
    {
        let models = T::index_models();
        if models.is_empty() {
            return Ok(());
        }
        self.collection.create_indexes(models).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Send + Sync> Repository<T> for BaseRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn insert(&self, entity: &T) -> Result<Bson> {
        let result = self.collection.insert_one(entity).await?;
        Ok(result.inserted_id)
    }

    async fn count(&self, filter: Document) -> Result<u64> {
        self.collection.count_documents(filter).await
    }

    async fn query_by_page(&self, filter: Document, sort: Document, skip: u64, limit: i64) -> Result<Vec<T>> {
        let find_options = FindOptions::builder().sort(sort).skip(skip).limit(limit).build();
        let cursor = self.collection.find(filter).with_options(find_options).await?;
        cursor.try_collect().await
    }

    async fn find_one_and_update(&self, filter: Document, update: Document) -> Result<Option<T>> {
        let options = FindOneAndUpdateOptions::builder().return_document(ReturnDocument::After).build();
        self.collection.find_one_and_update(filter, update).with_options(options).await
    }
}
