//! Error taxonomy tests

use credsync_domain::Error;

#[test]
fn test_retryable_classification() {
    assert!(Error::store_unavailable("down").is_retryable());
    assert!(Error::lock_contended("cred:app:sync").is_retryable());
    assert!(Error::not_yet_available("cred:app:token").is_retryable());

    assert!(!Error::refresh_failed("issuer said no").is_retryable());
    assert!(!Error::invalid_argument("bad").is_retryable());
    assert!(!Error::observer_failed("audit", "boom").is_retryable());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::not_yet_available("cred:app1:token").to_string(),
        "Credential not yet available: cred:app1:token"
    );
    assert_eq!(
        Error::observer_failed("audit", "disk full").to_string(),
        "Observer 'audit' failed: disk full"
    );
    assert_eq!(
        Error::lock_contended("cred:app1:sync").to_string(),
        "Lock contended: cred:app1:sync"
    );
}

#[test]
fn test_into_refresh_failure_keeps_refresh_errors() {
    let original = Error::refresh_failed("errcode 40013");
    match original.into_refresh_failure() {
        Error::RefreshFailed { message, source } => {
            assert_eq!(message, "errcode 40013");
            assert!(source.is_none());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_into_refresh_failure_wraps_other_errors() {
    let wrapped = Error::store_unavailable("timeout").into_refresh_failure();
    match wrapped {
        Error::RefreshFailed { message, source } => {
            assert!(message.contains("timeout"));
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_source_is_exposed() {
    use std::error::Error as _;

    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
    let err = Error::store_unavailable_with_source("GET failed", io);
    assert!(err.source().is_some());
    assert!(err.is_retryable());
}
