//! Observer Adapters
//!
//! | Adapter | Description |
//! |---------|-------------|
//! | [`BroadcastObserver`] | Forwards change events into a tokio broadcast channel |

pub mod broadcast;

pub use broadcast::{BroadcastObserver, ChangeEventStream};
