//! Shared Store Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemorySharedStore`] | Local | Single-process store with lazy expiry |
//! | [`RedisSharedStore`] | Distributed | Redis-backed, shared by every node |
//!
//! ## Provider Selection Guide
//!
//! - **Tests / single process**: `InMemorySharedStore`
//! - **Multiple processes or nodes**: `RedisSharedStore`

#[cfg(feature = "store-memory")]
pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::InMemorySharedStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisSharedStore;
