//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that turn a configuration file into a
//! ready-to-use credential source.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`constants`] | File names, environment prefixes, logging defaults |
//!
//! ### Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`factory`] | Builds shared stores and credential sources from configuration |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors into domain errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use factory::{CredentialSourceFactory, SharedStoreFactory};
