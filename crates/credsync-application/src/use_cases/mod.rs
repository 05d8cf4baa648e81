//! Use cases
//!
//! Credential sources and the per-owner manager built on top of them.

pub mod credential_manager;
pub mod local_source;
pub mod refresh_coordinator;

pub use credential_manager::CredentialManager;
pub use local_source::{DEFAULT_LOCAL_MAX_ENTRIES, LocalCredentialSource};
pub use refresh_coordinator::{RefreshCoordinator, RefreshSettings};
