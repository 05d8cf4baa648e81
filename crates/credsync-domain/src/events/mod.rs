//! Domain Events
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`ChangeEvent`] | A credential was refreshed and stored |
//! | [`ChangeKind`] | Discriminates what changed |

/// Change event definitions
pub mod change_event;

pub use change_event::{ChangeEvent, ChangeKind};
