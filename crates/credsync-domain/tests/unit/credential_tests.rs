//! Credential key and value tests

use credsync_domain::{CredentialField, CredentialKey, CredentialValue, Error};

#[test]
fn test_cache_key_format() {
    let key = CredentialKey::new("cred", "app123", CredentialField::AccessToken).unwrap();
    assert_eq!(key.cache_key(), "cred:app123:token");
    assert_eq!(key.to_string(), "cred:app123:token");

    let ticket = CredentialKey::new("cred", "app123", CredentialField::JsApiTicket).unwrap();
    assert_eq!(ticket.cache_key(), "cred:app123:ticket");
}

#[test]
fn test_lock_key_is_shared_by_all_fields_of_an_owner() {
    let token = CredentialKey::new("cred", "app1", CredentialField::AccessToken).unwrap();
    let ticket = CredentialKey::new("cred", "app1", CredentialField::JsApiTicket).unwrap();
    let other = CredentialKey::new("cred", "app2", CredentialField::AccessToken).unwrap();

    assert_eq!(token.lock_key(), "cred:app1:sync");
    assert_eq!(token.lock_key(), ticket.lock_key());
    assert_ne!(token.lock_key(), other.lock_key());
}

#[test]
fn test_default_namespace() {
    let key = CredentialKey::in_default_namespace("app1", CredentialField::AccessToken).unwrap();
    assert_eq!(key.namespace(), "cred");
    assert_eq!(key.owner_id(), "app1");
    assert_eq!(key.field(), &CredentialField::AccessToken);
}

#[test]
fn test_components_cannot_collide() {
    // "a:b" + "c" would otherwise collide with "a" + "b:c"
    assert!(CredentialKey::new("cred", "a:b", CredentialField::AccessToken).is_err());
    assert!(CredentialKey::new("cred:x", "a", CredentialField::AccessToken).is_err());
    assert!(
        CredentialKey::new("cred", "a", CredentialField::Custom("b:c".to_string())).is_err()
    );
}

#[test]
fn test_empty_components_rejected() {
    assert!(matches!(
        CredentialKey::new("", "app", CredentialField::AccessToken),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(CredentialKey::new("cred", "  ", CredentialField::AccessToken).is_err());
    assert!(CredentialField::parse("").is_err());
}

#[test]
fn test_field_parse() {
    assert_eq!(CredentialField::parse("token").unwrap(), CredentialField::AccessToken);
    assert_eq!(CredentialField::parse("ticket").unwrap(), CredentialField::JsApiTicket);
    assert_eq!(
        CredentialField::parse("card").unwrap(),
        CredentialField::Custom("card".to_string())
    );
    // The lock field is reserved
    assert!(CredentialField::parse("sync").is_err());
    assert!(CredentialKey::new("cred", "app", CredentialField::Custom("sync".into())).is_err());
}

#[test]
fn test_credential_value_rejects_blank() {
    assert!(CredentialValue::new("").is_err());
    assert!(CredentialValue::new("   ").is_err());

    let value = CredentialValue::new("TOK123").unwrap();
    assert_eq!(value.as_str(), "TOK123");
    assert_eq!(value.into_inner(), "TOK123");
}

#[test]
fn test_credential_value_debug_is_redacted() {
    let value = CredentialValue::new("super-secret-token").unwrap();
    let debug = format!("{value:?}");
    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("redacted"));
    assert_eq!(value.preview(), "supe... (18 chars)");
}

#[test]
fn test_credential_value_serde_rejects_blank() {
    let value: CredentialValue = serde_json::from_str("\"abc\"").unwrap();
    assert_eq!(value.as_str(), "abc");
    assert!(serde_json::from_str::<CredentialValue>("\"\"").is_err());
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"abc\"");
}
