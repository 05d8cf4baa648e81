//! Credential value objects
//!
//! A credential is addressed by `<namespace>:<owner>:<field>` and carries an
//! opaque, never-empty string payload.

use crate::constants::{
    ACCESS_TOKEN_FIELD, DEFAULT_NAMESPACE, JS_API_TICKET_FIELD, KEY_SEPARATOR, LOCK_FIELD,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validate a single key component
///
/// Components must be non-empty and must not contain the separator, otherwise
/// two distinct owners could produce the same key.
pub fn validate_component(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{kind} cannot be empty")));
    }
    if value.contains(KEY_SEPARATOR) {
        return Err(Error::invalid_argument(format!(
            "{kind} '{value}' cannot contain '{KEY_SEPARATOR}'"
        )));
    }
    Ok(())
}

/// Which credential of an owner is addressed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CredentialField {
    /// Access token used to call the issuer's APIs
    AccessToken,
    /// JS-API ticket, obtained with a valid access token
    JsApiTicket,
    /// Any other named credential
    Custom(String),
}

impl CredentialField {
    /// Parse a field name, mapping the well-known names to their variants
    pub fn parse(name: &str) -> Result<Self> {
        validate_component("field", name)?;
        if name == LOCK_FIELD {
            return Err(Error::invalid_argument(format!(
                "field '{LOCK_FIELD}' is reserved for the owner lock"
            )));
        }
        Ok(match name {
            ACCESS_TOKEN_FIELD => Self::AccessToken,
            JS_API_TICKET_FIELD => Self::JsApiTicket,
            other => Self::Custom(other.to_string()),
        })
    }

    /// Field name as it appears in the key
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccessToken => ACCESS_TOKEN_FIELD,
            Self::JsApiTicket => JS_API_TICKET_FIELD,
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CredentialField {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CredentialField> for String {
    fn from(field: CredentialField) -> Self {
        field.as_str().to_string()
    }
}

/// Identifies one cached credential across all processes
///
/// # Example
///
/// ```
/// use credsync_domain::{CredentialField, CredentialKey};
///
/// let key = CredentialKey::new("cred", "app123", CredentialField::AccessToken).unwrap();
/// assert_eq!(key.cache_key(), "cred:app123:token");
/// assert_eq!(key.lock_key(), "cred:app123:sync");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialKey {
    namespace: String,
    owner_id: String,
    field: CredentialField,
}

impl CredentialKey {
    /// Build a key, validating every component
    pub fn new<N: Into<String>, O: Into<String>>(
        namespace: N,
        owner_id: O,
        field: CredentialField,
    ) -> Result<Self> {
        let namespace = namespace.into();
        let owner_id = owner_id.into();
        validate_component("namespace", &namespace)?;
        validate_component("owner id", &owner_id)?;
        if let CredentialField::Custom(name) = &field {
            // Re-parse so hand-built custom fields get the same checks
            CredentialField::parse(name)?;
        }
        Ok(Self {
            namespace,
            owner_id,
            field,
        })
    }

    /// Build a key in the default namespace
    pub fn in_default_namespace<O: Into<String>>(
        owner_id: O,
        field: CredentialField,
    ) -> Result<Self> {
        Self::new(DEFAULT_NAMESPACE, owner_id, field)
    }

    /// Namespace prefix
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Owner / application identifier
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Addressed field
    pub fn field(&self) -> &CredentialField {
        &self.field
    }

    /// Store key holding the credential value
    pub fn cache_key(&self) -> String {
        format!(
            "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}",
            self.namespace, self.owner_id, self.field
        )
    }

    /// Store key of the lock guarding every field of this owner
    pub fn lock_key(&self) -> String {
        format!(
            "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{LOCK_FIELD}",
            self.namespace, self.owner_id
        )
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cache_key())
    }
}

/// Opaque credential payload
///
/// Never empty or blank. `Debug` output is redacted so values do not leak
/// into logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CredentialValue(String);

impl CredentialValue {
    /// Wrap a raw payload, rejecting blank values
    pub fn new<S: Into<String>>(value: S) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::invalid_argument("credential value cannot be empty"));
        }
        Ok(Self(value))
    }

    /// Borrow the raw payload
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw payload
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short redacted form for operator output
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(4).collect();
        format!("{head}... ({} chars)", self.0.chars().count())
    }
}

impl fmt::Debug for CredentialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialValue(<redacted, {} bytes>)", self.0.len())
    }
}

impl TryFrom<String> for CredentialValue {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CredentialValue> for String {
    fn from(value: CredentialValue) -> Self {
        value.0
    }
}
