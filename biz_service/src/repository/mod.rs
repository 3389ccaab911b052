pub mod item_request_repository;
#[cfg(any(test, feature = "test-util"))]
pub mod memory_item_request_repository;
pub mod mongo_item_request_repository;

pub use item_request_repository::ItemRequestRepository;
#[cfg(any(test, feature = "test-util"))]
pub use memory_item_request_repository::MemoryItemRequestRepository;
pub use mongo_item_request_repository::MongoItemRequestRepository;
