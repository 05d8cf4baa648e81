//! Tokio Broadcast Observer
//!
//! Bridges the synchronous change notifier to async consumers: every event
//! delivered to the observer is sent into a tokio broadcast channel, and any
//! number of tasks can subscribe to a stream of events.
//!
//! ## Example
//!
//! ```ignore
//! use credsync_providers::events::BroadcastObserver;
//! use futures::StreamExt;
//!
//! let observer = BroadcastObserver::new_shared();
//! manager.subscribe(observer.clone());
//!
//! let mut events = observer.subscribe_events();
//! while let Some(event) = events.next().await {
//!     println!("refreshed {}", event.key());
//! }
//! ```

use crate::constants::BROADCAST_DEFAULT_CAPACITY;
use credsync_domain::error::Result;
use credsync_domain::events::ChangeEvent;
use credsync_domain::ports::ChangeObserver;
use futures::stream::{self, Stream};
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{trace, warn};

/// Boxed async stream of change events
pub type ChangeEventStream = Pin<Box<dyn Stream<Item = ChangeEvent> + Send + 'static>>;

/// Observer publishing into a tokio broadcast channel
///
/// When the channel is full, the oldest events are dropped for lagging
/// receivers. An event published with no receivers is discarded.
#[derive(Clone)]
pub struct BroadcastObserver {
    sender: broadcast::Sender<ChangeEvent>,
    capacity: usize,
}

impl BroadcastObserver {
    /// Create an observer with the default capacity (256)
    pub fn new() -> Self {
        Self::with_capacity(BROADCAST_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender, capacity }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Raw broadcast receiver
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Stream of events, skipping over lag
    pub fn subscribe_events(&self) -> ChangeEventStream {
        let receiver = self.sender.subscribe();
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Change event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });
        Box::pin(stream)
    }

    /// Current number of receivers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeObserver for BroadcastObserver {
    fn on_change(&self, event: &ChangeEvent) -> Result<()> {
        match self.sender.send(event.clone()) {
            Ok(count) => trace!("Forwarded change event to {} receivers", count),
            Err(_) => trace!("Change event dropped, no receivers"),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "broadcast"
    }
}

impl std::fmt::Debug for BroadcastObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastObserver")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}
