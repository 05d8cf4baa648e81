//! Error context tests

use credsync_domain::error::Error;
use credsync_infrastructure::ErrorContext;
use std::error::Error as _;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
}

#[test]
fn test_context_maps_to_internal() {
    let err = io_failure().context("Loading credentials").unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert!(err.to_string().contains("Loading credentials: refused"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = io_failure()
        .with_context(|| format!("owner {}", "wx42"))
        .unwrap_err();
    assert!(err.to_string().contains("owner wx42"));
}

#[test]
fn test_config_context_keeps_source() {
    let err = io_failure().config_context("Reading credsync.toml").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_store_context_is_retryable() {
    let err = io_failure().store_context("Redis GET").unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable { .. }));
    assert!(err.is_retryable());
}
