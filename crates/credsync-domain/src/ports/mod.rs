//! Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`SharedStore`] | Atomic get / set-with-expiry / set-if-absent / compare-delete |
//! | [`LockProvider`] | Lease-based mutual exclusion with fencing tokens |
//! | [`ChangeObserver`] | Callback for refresh notifications |

pub mod lock;
pub mod observer;
pub mod store;

pub use lock::LockProvider;
pub use observer::ChangeObserver;
pub use store::SharedStore;
