//! Distributed lock tests

use credsync_application::DistributedLock;
use credsync_domain::error::Error;
use credsync_domain::ports::{LockProvider, SharedStore};
use credsync_providers::store::InMemorySharedStore;
use std::sync::Arc;
use std::time::Duration;

const LOCK_KEY: &str = "cred:app1:sync";
const LEASE: Duration = Duration::from_secs(10);

fn lock_over(store: &Arc<InMemorySharedStore>) -> DistributedLock {
    DistributedLock::new(Arc::clone(store) as Arc<dyn SharedStore>)
}

#[tokio::test]
async fn test_acquire_and_release() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store);

    let handle = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap();
    assert_eq!(handle.key, LOCK_KEY);
    assert_eq!(handle.lease, LEASE);
    assert_eq!(
        store.get(LOCK_KEY).await.unwrap().as_deref(),
        Some(handle.token.as_str())
    );

    assert!(lock.release_lock(handle).await.unwrap());
    assert_eq!(store.get(LOCK_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_non_blocking_acquire_reports_contention() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store);
    let _held = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap();

    let err = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap_err();
    assert!(err.is_lock_contended());

    // A zero timeout behaves like no timeout
    let err = lock
        .acquire_lock(LOCK_KEY, LEASE, Some(Duration::ZERO))
        .await
        .unwrap_err();
    assert!(err.is_lock_contended());
}

#[tokio::test]
async fn test_tokens_are_unique_per_acquisition() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store);

    let first = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap();
    let first_token = first.token.clone();
    lock.release_lock(first).await.unwrap();
    let second = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap();

    assert_ne!(first_token, second.token);
}

#[tokio::test(start_paused = true)]
async fn test_blocking_acquire_waits_for_lease_expiry() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store);
    let _crashed_holder = lock
        .acquire_lock(LOCK_KEY, Duration::from_secs(1), None)
        .await
        .unwrap();

    let started = tokio::time::Instant::now();
    let handle = lock
        .acquire_lock(LOCK_KEY, LEASE, Some(Duration::from_secs(3)))
        .await
        .unwrap();

    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(1));
    assert!(waited < Duration::from_secs(2));
    assert_eq!(handle.lease, LEASE);
}

#[tokio::test(start_paused = true)]
async fn test_blocking_acquire_times_out() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store).with_poll_interval(Duration::from_millis(50));
    let _held = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap();

    let started = tokio::time::Instant::now();
    let err = lock
        .acquire_lock(LOCK_KEY, LEASE, Some(Duration::from_millis(500)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LockContended { ref key } if key == LOCK_KEY));
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(started.elapsed() < LEASE);
}

#[tokio::test]
async fn test_zero_lease_is_rejected() {
    let store = InMemorySharedStore::new_shared();
    let err = lock_over(&store)
        .acquire_lock(LOCK_KEY, Duration::ZERO, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_renew_keeps_lock_alive() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store);
    let mut handle = lock
        .acquire_lock(LOCK_KEY, Duration::from_secs(2), None)
        .await
        .unwrap();

    tokio::time::advance(Duration::from_millis(1500)).await;
    assert!(lock.renew_lock(&mut handle).await.unwrap());
    assert_eq!(handle.renewals, 1);
    tokio::time::advance(Duration::from_millis(1500)).await;

    let err = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap_err();
    assert!(err.is_lock_contended());
    assert!(lock.release_lock(handle).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_stale_holder_cannot_release_new_lock() {
    let store = InMemorySharedStore::new_shared();
    let lock = lock_over(&store);
    let mut stale = lock
        .acquire_lock(LOCK_KEY, Duration::from_secs(1), None)
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;
    let current = lock.acquire_lock(LOCK_KEY, LEASE, None).await.unwrap();

    assert!(!lock.renew_lock(&mut stale).await.unwrap());
    assert_eq!(stale.renewals, 0);
    assert!(!lock.release_lock(stale).await.unwrap());
    assert_eq!(
        store.get(LOCK_KEY).await.unwrap().as_deref(),
        Some(current.token.as_str())
    );
}
