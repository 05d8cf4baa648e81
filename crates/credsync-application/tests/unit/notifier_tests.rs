//! Change notifier tests

use crate::test_utils::{recording_observer, token_key};
use credsync_application::{ChangeNotifier, FnObserver};
use credsync_domain::error::Error;
use credsync_domain::ports::ChangeObserver;
use credsync_domain::value_objects::CredentialValue;
use credsync_domain::ChangeEvent;
use std::sync::Arc;

fn refreshed(value: &str) -> ChangeEvent {
    ChangeEvent::refreshed(&token_key("app1"), CredentialValue::new(value).unwrap())
}

#[test]
fn test_subscribe_is_idempotent_per_observer() {
    let notifier = ChangeNotifier::new();
    let (observer, _) = recording_observer();

    assert!(notifier.subscribe(Arc::clone(&observer)));
    assert!(!notifier.subscribe(Arc::clone(&observer)));
    assert_eq!(notifier.observer_count(), 1);

    // A distinct observer with the same behaviour is a separate registration
    let (other, _) = recording_observer();
    assert!(notifier.subscribe(other));
    assert_eq!(notifier.observer_count(), 2);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let notifier = ChangeNotifier::new();
    let (observer, events) = recording_observer();
    notifier.subscribe(Arc::clone(&observer));

    assert_eq!(notifier.publish(&refreshed("TOK1")), 1);
    assert!(notifier.unsubscribe(&observer));
    assert!(!notifier.unsubscribe(&observer));
    assert_eq!(notifier.publish(&refreshed("TOK2")), 0);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].new_value.as_str(), "TOK1");
}

#[test]
fn test_failing_observers_do_not_block_others() {
    let notifier = ChangeNotifier::new();
    let erroring: Arc<dyn ChangeObserver> = Arc::new(FnObserver::new("erroring", |_| {
        Err(Error::observer_failed("erroring", "downstream rejected the token"))
    }));
    let panicking: Arc<dyn ChangeObserver> = Arc::new(FnObserver::new("panicking", |_| {
        panic!("observer bug");
    }));
    let (recorder, events) = recording_observer();

    notifier.subscribe(erroring);
    notifier.subscribe(panicking);
    notifier.subscribe(recorder);

    assert_eq!(notifier.publish(&refreshed("TOK123")), 1);
    assert_eq!(events.lock().unwrap().len(), 1);

    // The notifier is still usable after a panic
    assert_eq!(notifier.publish(&refreshed("TOK456")), 1);
    assert_eq!(notifier.observer_count(), 3);
}

#[test]
fn test_observer_may_unsubscribe_during_publish() {
    let notifier = Arc::new(ChangeNotifier::new());
    let slot: Arc<std::sync::Mutex<Option<Arc<dyn ChangeObserver>>>> =
        Arc::new(std::sync::Mutex::new(None));

    let notifier_ref = Arc::clone(&notifier);
    let slot_ref = Arc::clone(&slot);
    let once: Arc<dyn ChangeObserver> = Arc::new(FnObserver::new("once", move |_| {
        if let Some(me) = slot_ref.lock().unwrap().take() {
            notifier_ref.unsubscribe(&me);
        }
        Ok(())
    }));
    *slot.lock().unwrap() = Some(Arc::clone(&once));
    notifier.subscribe(once);

    assert_eq!(notifier.publish(&refreshed("TOK1")), 1);
    assert_eq!(notifier.observer_count(), 0);
}
