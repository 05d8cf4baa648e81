//! Change event tests

use credsync_domain::{ChangeEvent, ChangeKind, CredentialField, CredentialKey, CredentialValue};

#[test]
fn test_refreshed_event() {
    let key = CredentialKey::new("cred", "app1", CredentialField::AccessToken).unwrap();
    let event = ChangeEvent::refreshed(&key, CredentialValue::new("TOK123").unwrap());

    assert_eq!(event.owner_id, "app1");
    assert_eq!(event.key(), &key);
    assert_eq!(event.new_value.as_str(), "TOK123");
    assert!(matches!(event.kind, ChangeKind::CredentialRefreshed { .. }));
}

#[test]
fn test_event_serialization() {
    let key = CredentialKey::new("cred", "app1", CredentialField::JsApiTicket).unwrap();
    let event = ChangeEvent::refreshed(&key, CredentialValue::new("TICKET").unwrap());

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["owner_id"], "app1");
    assert_eq!(json["new_value"], "TICKET");
    assert_eq!(json["kind"]["CredentialRefreshed"]["key"]["field"], "ticket");

    let back: ChangeEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
