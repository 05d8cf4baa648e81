//! Broadcast observer tests

use credsync_domain::ports::ChangeObserver;
use credsync_domain::{ChangeEvent, CredentialField, CredentialKey, CredentialValue};
use credsync_providers::events::BroadcastObserver;
use futures::StreamExt;

fn event(value: &str) -> ChangeEvent {
    let key = CredentialKey::new("cred", "app1", CredentialField::AccessToken).unwrap();
    ChangeEvent::refreshed(&key, CredentialValue::new(value).unwrap())
}

#[tokio::test]
async fn test_events_reach_stream_subscribers() {
    let observer = BroadcastObserver::new();
    let mut first = observer.subscribe_events();
    let mut second = observer.subscribe_events();
    assert_eq!(observer.subscriber_count(), 2);

    observer.on_change(&event("TOK1")).unwrap();
    observer.on_change(&event("TOK2")).unwrap();

    assert_eq!(first.next().await.unwrap().new_value.as_str(), "TOK1");
    assert_eq!(first.next().await.unwrap().new_value.as_str(), "TOK2");
    assert_eq!(second.next().await.unwrap().new_value.as_str(), "TOK1");
}

#[test]
fn test_publish_without_receivers_is_ok() {
    let observer = BroadcastObserver::new();
    assert!(observer.on_change(&event("TOK")).is_ok());
    assert_eq!(observer.name(), "broadcast");
}

#[tokio::test]
async fn test_lagging_stream_skips_dropped_events() {
    let observer = BroadcastObserver::with_capacity(2);
    let mut events = observer.subscribe_events();

    for i in 0..5 {
        observer.on_change(&event(&format!("TOK{i}"))).unwrap();
    }

    // The two most recent events survive
    assert_eq!(events.next().await.unwrap().new_value.as_str(), "TOK3");
    assert_eq!(events.next().await.unwrap().new_value.as_str(), "TOK4");
}
