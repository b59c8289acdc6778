pub mod analytics;
pub mod calendar_service;
pub mod error_reporter;
pub mod share_service;
pub mod storage_service;

pub use share_service::ShareOutcome;
pub use storage_service::{KeyValueStore, LocalStore, MemoryStore};
