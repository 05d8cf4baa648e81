//! Configuration types module

pub mod app;
pub mod cache;
pub mod lock;
pub mod logging;
pub mod source;
pub mod store;

// Re-export main types
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use lock::LockConfig;
pub use logging::LoggingConfig;
pub use source::SourceConfig;
pub use store::{StoreConfig, StoreProvider};
