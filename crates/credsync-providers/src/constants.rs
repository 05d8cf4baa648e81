//! Provider constants

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://127.0.0.1:6379";

/// Default capacity of the broadcast observer channel
pub const BROADCAST_DEFAULT_CAPACITY: usize = 256;
