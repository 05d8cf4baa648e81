//! # credsync - Provider Implementations
//!
//! Adapters implementing the ports defined in `credsync-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Shared store | `SharedStore` | Redis, InMemory |
//! | Observers | `ChangeObserver` | Broadcast (tokio channel) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! credsync-providers = { version = "0.1", default-features = false, features = ["store-redis"] }
//! ```

// Re-export credsync-domain types commonly used with providers
pub use credsync_domain::error::{Error, Result};
pub use credsync_domain::ports::{ChangeObserver, SharedStore};

/// Provider-specific constants
pub mod constants;

/// Shared store implementations
///
/// Implements the `SharedStore` trait for key/value backends.
pub mod store;

/// Observer adapters
///
/// Implements the `ChangeObserver` trait for event transports.
pub mod events;
