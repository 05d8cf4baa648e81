//! Configuration loader tests

use credsync_application::SourceMode;
use credsync_domain::error::Error;
use credsync_infrastructure::config::{AppConfig, ConfigLoader, StoreProvider};
use std::io::Write;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.source.mode, SourceMode::SharedViaLock);
    assert_eq!(config.source.namespace, "cred");
    assert_eq!(config.source.owner_id, None);
    assert_eq!(config.store.provider, StoreProvider::Memory);
    assert_eq!(config.lock.lease(), Duration::from_secs(10));
    assert_eq!(config.lock.acquire_timeout(), None);
    assert_eq!(config.lock.poll_interval(), Duration::from_millis(100));
    assert_eq!(config.lock.renew_fraction, 0.5);
    assert_eq!(config.cache.ttl(), Duration::from_secs(7100));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_from_file_overrides_defaults() {
    let file = write_config(
        r#"
[source]
mode = "local_only"
namespace = "wechat"
owner_id = "wx42"

[store]
provider = "redis"
redis_url = "redis://cache.internal:6379"

[lock]
lease_ms = 5000
acquire_timeout_ms = 2000

[cache]
ttl_secs = 3600
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("CREDSYNC_LOADER_TEST_UNUSED")
        .load()
        .unwrap();

    assert_eq!(config.source.mode, SourceMode::LocalOnly);
    assert_eq!(config.source.namespace, "wechat");
    assert_eq!(config.source.owner_id.as_deref(), Some("wx42"));
    assert_eq!(config.store.provider, StoreProvider::Redis);
    assert_eq!(
        config.store.redis_url.as_deref(),
        Some("redis://cache.internal:6379")
    );
    assert_eq!(config.lock.lease_ms, 5000);
    assert_eq!(config.lock.acquire_timeout(), Some(Duration::from_secs(2)));
    // Untouched keys keep their defaults
    assert_eq!(config.lock.poll_interval_ms, 100);
    assert_eq!(config.cache.ttl_secs, 3600);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let file = write_config("[lock]\nlease_ms = \"ten seconds\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let file = write_config("[store]\nprovider = \"redis\"\n");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("Redis URL"));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credsync.toml");
    let mut config = AppConfig::default();
    config.source.owner_id = Some("wx42".to_string());
    config.lock.acquire_timeout_ms = 1500;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let reloaded = loader.load().unwrap();

    assert_eq!(reloaded, config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_rendered_toml_uses_snake_case_mode() {
    let rendered = credsync_infrastructure::config::loader::to_toml(&AppConfig::default()).unwrap();
    assert!(rendered.contains("mode = \"shared_via_lock\""));
    assert!(rendered.contains("provider = \"memory\""));
    assert!(rendered.contains("lease_ms = 10000"));
}
