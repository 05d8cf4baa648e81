//! Domain services
//!
//! Building blocks the credential sources are composed from.

pub mod cache;
pub mod lock;
pub mod notifier;

pub use cache::CredentialCache;
pub use lock::DistributedLock;
pub use notifier::{ChangeNotifier, FnObserver};
