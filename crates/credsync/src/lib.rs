//! # credsync
//!
//! Shares short-lived access credentials (access tokens, JS-API tickets)
//! between every process of a deployment so that each expiry triggers a
//! single call to the issuer.
//!
//! ## Example
//!
//! ```ignore
//! use credsync::infrastructure::{ConfigLoader, CredentialSourceFactory};
//!
//! let config = ConfigLoader::new().load()?;
//! let manager = CredentialSourceFactory::create_manager(&config, None, issuer)?;
//! let token = manager.access_token().await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Keys, values, events, errors and the store/lock/observer ports
//! - `application` - Distributed lock, credential cache, notifier, credential sources
//! - `providers` - Redis and in-memory shared stores, broadcast observer
//! - `infrastructure` - Configuration, logging and wiring

/// Domain layer - value objects, events, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use credsync_domain::*;
}

/// Application layer - credential sources and their building blocks
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use credsync_application::*;
}

/// Provider implementations - shared stores and observer adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use credsync_providers::*;
}

/// Infrastructure layer - config, logging and factories
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use credsync_infrastructure::*;
}

/// Operator command line
pub mod cli;

// Re-export commonly used types at the crate root
pub use application::{
    CredentialIssuer, CredentialManager, CredentialSource, RefreshCoordinator, SourceMode,
};
pub use domain::*;
