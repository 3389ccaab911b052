pub mod item_request_entity;
