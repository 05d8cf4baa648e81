//! Configuration validation tests

use credsync_domain::error::Error;
use credsync_infrastructure::config::{AppConfig, StoreProvider, validate_app_config};

fn rejects(config: &AppConfig, needle: &str) {
    let err = validate_app_config(config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(
        err.to_string().contains(needle),
        "expected '{needle}' in '{err}'"
    );
}

#[test]
fn test_defaults_are_valid() {
    assert!(validate_app_config(&AppConfig::default()).is_ok());
}

#[test]
fn test_zero_lease_is_rejected() {
    let mut config = AppConfig::default();
    config.lock.lease_ms = 0;
    rejects(&config, "lease");
}

#[test]
fn test_zero_poll_interval_is_rejected() {
    let mut config = AppConfig::default();
    config.lock.poll_interval_ms = 0;
    rejects(&config, "poll interval");
}

#[test]
fn test_renew_fraction_must_be_inside_unit_interval() {
    for fraction in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
        let mut config = AppConfig::default();
        config.lock.renew_fraction = fraction;
        rejects(&config, "renew fraction");
    }
}

#[test]
fn test_ttl_must_outlive_lease() {
    let mut config = AppConfig::default();
    config.cache.ttl_secs = 0;
    rejects(&config, "TTL");

    let mut config = AppConfig::default();
    config.cache.ttl_secs = 10;
    config.lock.lease_ms = 10_000;
    rejects(&config, "longer than the lock lease");
}

#[test]
fn test_redis_requires_url() {
    let mut config = AppConfig::default();
    config.store.provider = StoreProvider::Redis;
    rejects(&config, "Redis URL");

    config.store.redis_url = Some("   ".to_string());
    rejects(&config, "Redis URL");

    config.store.redis_url = Some("redis://127.0.0.1:6379".to_string());
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_namespace_and_owner_cannot_hold_separator() {
    let mut config = AppConfig::default();
    config.source.namespace = "cred:prod".to_string();
    rejects(&config, "Namespace");

    let mut config = AppConfig::default();
    config.source.namespace = String::new();
    rejects(&config, "Namespace");

    let mut config = AppConfig::default();
    config.source.owner_id = Some("wx:1".to_string());
    rejects(&config, "Owner id");
}
