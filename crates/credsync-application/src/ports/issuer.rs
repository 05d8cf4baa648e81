//! Credential Issuer Port
//!
//! The remote call that mints credentials. HTTP and response parsing live
//! behind this trait.

use async_trait::async_trait;
use credsync_domain::error::Result;
use credsync_domain::value_objects::{CredentialField, CredentialValue};

/// Mints fresh credentials for an owner
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Obtain a new credential
    ///
    /// `access_token` is provided for fields that require one (the JS-API
    /// ticket). Implementations return the raw payload; blank payloads are
    /// rejected by the caller as a refresh failure.
    async fn issue(
        &self,
        owner_id: &str,
        field: &CredentialField,
        access_token: Option<&CredentialValue>,
    ) -> Result<String>;
}
