//! Credential change events
//!
//! Emitted once per successful refresh, after the new value has been stored.

use crate::value_objects::{CredentialKey, CredentialValue};
use serde::{Deserialize, Serialize};

/// What changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A credential was refreshed from the issuer and stored
    CredentialRefreshed {
        /// Key of the refreshed credential
        key: CredentialKey,
    },
}

/// Immutable notification fanned out to every subscribed observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Owner / application identifier
    pub owner_id: String,
    /// What changed
    pub kind: ChangeKind,
    /// The freshly stored value
    pub new_value: CredentialValue,
}

impl ChangeEvent {
    /// Event for a refreshed credential
    pub fn refreshed(key: &CredentialKey, new_value: CredentialValue) -> Self {
        Self {
            owner_id: key.owner_id().to_string(),
            kind: ChangeKind::CredentialRefreshed { key: key.clone() },
            new_value,
        }
    }

    /// Key of the credential this event is about
    pub fn key(&self) -> &CredentialKey {
        match &self.kind {
            ChangeKind::CredentialRefreshed { key } => key,
        }
    }
}
