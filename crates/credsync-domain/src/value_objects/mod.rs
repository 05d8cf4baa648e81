//! Value Objects
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CredentialKey`] | `<namespace>:<owner>:<field>` address of a credential |
//! | [`CredentialField`] | Which credential of an owner is addressed |
//! | [`CredentialValue`] | Opaque, never-empty credential payload |
//! | [`LockHandle`] | Proof of a lock acquisition (key + fencing token + lease) |

pub mod credential;
pub mod lock;

pub use credential::{CredentialField, CredentialKey, CredentialValue, validate_component};
pub use lock::LockHandle;
