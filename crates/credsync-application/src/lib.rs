//! Application Layer - credsync
//!
//! Orchestrates the cache-aside-with-lock refresh protocol on top of the
//! ports declared in `credsync-domain`.
//!
//! ## Building blocks
//!
//! - [`DistributedLock`]: lease-based lock over a `SharedStore`
//! - [`CredentialCache`]: namespaced credential reads/writes with a TTL
//! - [`ChangeNotifier`]: fan-out of refresh events to observers
//!
//! ## Credential sources
//!
//! | Mode | Type | Coordination |
//! |------|------|--------------|
//! | `SharedViaLock` | [`RefreshCoordinator`] | Shared store + distributed lock |
//! | `LocalOnly` | [`LocalCredentialSource`] | In-process cache, single-flight refresh |
//!
//! [`CredentialManager`] sits on top of either source and exposes the
//! per-owner API (`access_token`, `js_api_ticket`, ...).

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
