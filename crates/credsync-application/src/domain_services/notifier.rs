//! Change notifier
//!
//! Owned event bus for refresh notifications. `publish` runs every observer
//! synchronously on the calling task; an observer that errors or panics is
//! logged and skipped, the rest still receive the event.

use credsync_domain::error::Result;
use credsync_domain::events::ChangeEvent;
use credsync_domain::ports::ChangeObserver;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Fan-out of change events to registered observers
#[derive(Default)]
pub struct ChangeNotifier {
    observers: RwLock<Vec<Arc<dyn ChangeObserver>>>,
}

impl ChangeNotifier {
    /// Create a notifier with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer
    ///
    /// Returns false if this exact observer (same allocation) is already registered.
    pub fn subscribe(&self, observer: Arc<dyn ChangeObserver>) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        if observers.iter().any(|existing| Arc::ptr_eq(existing, &observer)) {
            return false;
        }
        debug!(observer = observer.name(), "Observer subscribed");
        observers.push(observer);
        true
    }

    /// Remove an observer
    ///
    /// Returns whether the observer was registered.
    pub fn unsubscribe(&self, observer: &Arc<dyn ChangeObserver>) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|existing| !Arc::ptr_eq(existing, observer));
        before != observers.len()
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Deliver an event to every current observer
    ///
    /// Observers run outside the registry lock, so they may subscribe or
    /// unsubscribe from within `on_change`.
    ///
    /// # Returns
    /// The number of observers that handled the event successfully
    pub fn publish(&self, event: &ChangeEvent) -> usize {
        let snapshot: Vec<Arc<dyn ChangeObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut delivered = 0;
        for observer in &snapshot {
            match catch_unwind(AssertUnwindSafe(|| observer.on_change(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => {
                    warn!(
                        observer = observer.name(),
                        key = %event.key(),
                        error = %e,
                        "Observer failed"
                    );
                }
                Err(_) => {
                    warn!(observer = observer.name(), key = %event.key(), "Observer panicked");
                }
            }
        }

        debug!(
            key = %event.key(),
            delivered,
            observers = snapshot.len(),
            "Change event published"
        );
        delivered
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Observer backed by a closure
///
/// # Example
///
/// ```
/// use credsync_application::{ChangeNotifier, FnObserver};
/// use std::sync::Arc;
///
/// let notifier = ChangeNotifier::new();
/// notifier.subscribe(Arc::new(FnObserver::new("audit", |event| {
///     println!("refreshed {}", event.key());
///     Ok(())
/// })));
/// assert_eq!(notifier.observer_count(), 1);
/// ```
pub struct FnObserver<F> {
    name: String,
    callback: F,
}

impl<F> FnObserver<F>
where
    F: Fn(&ChangeEvent) -> Result<()> + Send + Sync,
{
    /// Wrap a closure under a log-friendly name
    pub fn new<S: Into<String>>(name: S, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> ChangeObserver for FnObserver<F>
where
    F: Fn(&ChangeEvent) -> Result<()> + Send + Sync,
{
    fn on_change(&self, event: &ChangeEvent) -> Result<()> {
        (self.callback)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
