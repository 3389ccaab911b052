use crate::biz_service::item_request_dto::{CreateItemRequestDto, EditStatusDto, ItemRequestPage, ListRequestsQuery};
use crate::entitys::item_request_entity::{ItemRequest, NewItemRequest, RequestStatus};
use crate::repository::ItemRequestRepository;
use common::errors::AppError;
use common::repository_util::Pagination;
use common::util::date_util::now;
use log::debug;
use std::sync::Arc;
use validator::Validate;

/// 每页固定条数
pub const PAGE_SIZE: u64 = 10;

pub struct ItemRequestService {
    repo: Arc<dyn ItemRequestRepository>,
}

impl ItemRequestService {
    pub fn new(repo: Arc<dyn ItemRequestRepository>) -> Self {
        Self { repo }
    }

    /// 分页查询，可按状态过滤，按创建时间倒序
    pub async fn list_requests(&self, query: ListRequestsQuery) -> Result<ItemRequestPage, AppError> {
        let page = parse_page(query.page.as_deref())?;
        let status = match query.status.as_deref() {
            None | Some("") => None,
            Some(s) => Some(RequestStatus::parse(s)?),
        };
        // 驱动以 i64 传 skip
        let skip = (page - 1)
            .checked_mul(PAGE_SIZE)
            .filter(|skip| i64::try_from(*skip).is_ok())
            .ok_or_else(|| AppError::InvalidInput(format!("page {page} is out of range")))?;

        let data = self.repo.find_page(status, skip, PAGE_SIZE).await?;
        let total = self.repo.count(status).await?;
        Ok(ItemRequestPage { data, pagination: Pagination::new(page, PAGE_SIZE, total) })
    }

    /// 新建申请，状态固定为 pending
    pub async fn create_request(&self, dto: CreateItemRequestDto) -> Result<ItemRequest, AppError> {
        dto.validate()?;
        let (Some(requestor_name), Some(item_requested)) = (dto.requestor_name, dto.item_requested) else {
            return Err(AppError::InvalidInput("requestorName and itemRequested are required".to_string()));
        };

        let created = self
            .repo
            .insert(NewItemRequest { requestor_name, item_requested, status: RequestStatus::Pending, created_date: now() })
            .await?;
        debug!("created request {} for {}", created.id, created.requestor_name);
        Ok(created)
    }

    /// 修改状态并刷新 last_edited_date；并发修改时后写入者生效
    pub async fn edit_status(&self, dto: EditStatusDto) -> Result<ItemRequest, AppError> {
        dto.validate()?;
        let (Some(id), Some(status)) = (dto.id, dto.status) else {
            return Err(AppError::InvalidInput("id and status are required".to_string()));
        };
        let status = RequestStatus::parse(&status)?;

        match self.repo.update_status(&id, status, now()).await? {
            Some(updated) => {
                debug!("request {} -> {}", updated.id, updated.status);
                Ok(updated)
            }
            None => Err(AppError::NotFound("Request with the specified ID not found.".to_string())),
        }
    }
}

/// 缺省或空字符串视为第 1 页；其余必须是 >= 1 的十进制整数
fn parse_page(raw: Option<&str>) -> Result<u64, AppError> {
    let raw = match raw {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };
    match raw.parse::<u64>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(AppError::InvalidInput(format!("page must be an integer >= 1, got {raw:?}"))),
    }
}
