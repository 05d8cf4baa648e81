//! Change Observer Port

use crate::error::Result;
use crate::events::ChangeEvent;

/// Receives change events synchronously on the publishing thread
///
/// An error (or panic) in one observer is isolated by the notifier and never
/// reaches the refresh flow.
pub trait ChangeObserver: Send + Sync {
    /// Handle one event
    fn on_change(&self, event: &ChangeEvent) -> Result<()>;

    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
