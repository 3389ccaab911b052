pub mod item_request_dto;
pub mod item_request_service;
