use chrono::{DateTime, Utc};
use common::errors::AppError;
use common::index_trait::MongoIndexModelProvider;
use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// 物品申请状态
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Completed,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// 严格解析（区分大小写），失败时返回可直接给调用方的错误
    pub fn parse(value: &str) -> Result<Self, AppError> {
        value.parse::<RequestStatus>().map_err(|_| {
            let allowed: Vec<String> = RequestStatus::iter().map(|s| s.to_string()).collect();
            AppError::InvalidInput(format!("status must be one of {}", allowed.join(", ")))
        })
    }
}

/// `requests` 集合中的文档
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub requestor_name: String,
    pub item_requested: String,
    pub status: RequestStatus,
    pub created_date: mongodb::bson::DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_date: Option<mongodb::bson::DateTime>,
}

impl MongoIndexModelProvider for ItemRequestEntity {
    fn index_models() -> Vec<IndexModel> {
        vec![
            IndexModel::builder().keys(doc! { "status": 1, "createdDate": -1 }).build(),
            IndexModel::builder().keys(doc! { "createdDate": -1 }).build(),
        ]
    }
}

/// 对外返回的申请记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    /// 存储生成的唯一 ID
    pub id: String,
    /// 申请人（3-30 个字符）
    pub requestor_name: String,
    /// 申请物品（2-100 个字符）
    pub item_requested: String,
    pub status: RequestStatus,
    pub created_date: DateTime<Utc>,
    /// 首次修改状态前不存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_date: Option<DateTime<Utc>>,
}

/// 新建记录（尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemRequest {
    pub requestor_name: String,
    pub item_requested: String,
    pub status: RequestStatus,
    pub created_date: DateTime<Utc>,
}

impl From<NewItemRequest> for ItemRequestEntity {
    fn from(new: NewItemRequest) -> Self {
        Self {
            id: None,
            requestor_name: new.requestor_name,
            item_requested: new.item_requested,
            status: new.status,
            created_date: mongodb::bson::DateTime::from_chrono(new.created_date),
            last_edited_date: None,
        }
    }
}

impl TryFrom<ItemRequestEntity> for ItemRequest {
    type Error = AppError;

    fn try_from(entity: ItemRequestEntity) -> Result<Self, Self::Error> {
        let id = entity.id.ok_or_else(|| AppError::Internal("request document without _id".to_string()))?;
        Ok(Self {
            id: id.to_hex(),
            requestor_name: entity.requestor_name,
            item_requested: entity.item_requested,
            status: entity.status,
            created_date: entity.created_date.to_chrono(),
            last_edited_date: entity.last_edited_date.map(|d| d.to_chrono()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert_eq!(RequestStatus::parse("approved").unwrap(), RequestStatus::Approved);
        assert_eq!(RequestStatus::parse("rejected").unwrap(), RequestStatus::Rejected);
        assert!(matches!(RequestStatus::parse("Approved"), Err(AppError::InvalidInput(_))));
        assert!(matches!(RequestStatus::parse("bogus-status"), Err(AppError::InvalidInput(_))));
        assert!(matches!(RequestStatus::parse(""), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(RequestStatus::Completed).unwrap(), "completed");
        assert_eq!(RequestStatus::Pending.as_ref(), "pending");
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    }

    #[test]
    fn test_entity_document_layout() {
        let created = common::util::date_util::now();
        let entity = ItemRequestEntity::from(NewItemRequest {
            requestor_name: "Alice".into(),
            item_requested: "Blanket".into(),
            status: RequestStatus::Pending,
            created_date: created,
        });
        let doc = mongodb::bson::to_document(&entity).unwrap();
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("lastEditedDate"));
        assert_eq!(doc.get_str("requestorName").unwrap(), "Alice");
        assert_eq!(doc.get_str("itemRequested").unwrap(), "Blanket");
        assert_eq!(doc.get_str("status").unwrap(), "pending");
        assert_eq!(doc.get_datetime("createdDate").unwrap().to_chrono(), created);
    }

    #[test]
    fn test_entity_without_id_is_rejected() {
        let entity = ItemRequestEntity::from(NewItemRequest {
            requestor_name: "Alice".into(),
            item_requested: "Blanket".into(),
            status: RequestStatus::Pending,
            created_date: common::util::date_util::now(),
        });
        assert!(matches!(ItemRequest::try_from(entity), Err(AppError::Internal(_))));
    }

    #[test]
    fn test_model_json_omits_absent_last_edited_date() {
        let model = ItemRequest {
            id: ObjectId::new().to_hex(),
            requestor_name: "Alice".into(),
            item_requested: "Blanket".into(),
            status: RequestStatus::Pending,
            created_date: common::util::date_util::now(),
            last_edited_date: None,
        };
        let json = serde_json::to_value(&model).unwrap();
        assert!(json.get("lastEditedDate").is_none());
        assert_eq!(json["requestorName"], "Alice");
        assert_eq!(json["status"], "pending");
    }
}
