//! # credsync - Domain Layer
//!
//! Core types shared by every layer of the credential refresh coordinator:
//!
//! - [`value_objects`]: credential keys, values and lock handles
//! - [`events`]: the change event fanned out after a successful refresh
//! - [`ports`]: contracts for the shared store, locks and observers
//! - [`error`]: the error taxonomy used across the workspace
//!
//! This crate performs no I/O. Adapters live in `credsync-providers`.

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::{ChangeEvent, ChangeKind};
pub use value_objects::{CredentialField, CredentialKey, CredentialValue, LockHandle};
