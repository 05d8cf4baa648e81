//! Configuration management
//!
//! Typed configuration sections and the Figment loader that fills them from
//! defaults, a TOML file and environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::*;
