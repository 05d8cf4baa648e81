//! Credential Manager Use Case
//!
//! Owner-scoped entry point: resolves access tokens and JS-API tickets of one
//! application through a [`CredentialSource`], using a [`CredentialIssuer`] as
//! the refresh function.

use crate::ports::{CredentialIssuer, CredentialSource, refresh_with};
use credsync_domain::error::{Error, Result};
use credsync_domain::ports::ChangeObserver;
use credsync_domain::value_objects::{
    CredentialField, CredentialKey, CredentialValue, validate_component,
};
use std::sync::Arc;
use tracing::debug;

/// Credentials of one owner
pub struct CredentialManager {
    namespace: String,
    owner_id: String,
    source: Arc<dyn CredentialSource>,
    issuer: Arc<dyn CredentialIssuer>,
    js_api_enabled: bool,
}

impl CredentialManager {
    /// Create a manager for `owner_id` with JS-API tickets disabled
    pub fn new<N: Into<String>, O: Into<String>>(
        namespace: N,
        owner_id: O,
        source: Arc<dyn CredentialSource>,
        issuer: Arc<dyn CredentialIssuer>,
    ) -> Result<Self> {
        let namespace = namespace.into();
        let owner_id = owner_id.into();
        validate_component("namespace", &namespace)?;
        validate_component("owner id", &owner_id)?;
        Ok(Self {
            namespace,
            owner_id,
            source,
            issuer,
            js_api_enabled: false,
        })
    }

    /// Enable or disable JS-API tickets
    pub fn with_js_api(mut self, enabled: bool) -> Self {
        self.js_api_enabled = enabled;
        self
    }

    /// Owner identifier
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Whether JS-API tickets are enabled
    pub fn js_api_enabled(&self) -> bool {
        self.js_api_enabled
    }

    /// Credential source backing this manager
    pub fn source(&self) -> &Arc<dyn CredentialSource> {
        &self.source
    }

    /// Key of one of this owner's credentials
    pub fn key(&self, field: CredentialField) -> Result<CredentialKey> {
        CredentialKey::new(self.namespace.clone(), self.owner_id.clone(), field)
    }

    /// Current access token, refreshed on a miss
    pub async fn access_token(&self) -> Result<CredentialValue> {
        self.fetch(CredentialField::AccessToken, None).await
    }

    /// Current JS-API ticket, refreshed on a miss
    ///
    /// The access token is resolved first, outside the ticket refresh, so the
    /// issuer call never waits on this owner's lock.
    pub async fn js_api_ticket(&self) -> Result<CredentialValue> {
        if !self.js_api_enabled {
            return Err(Error::invalid_argument(format!(
                "JS-API tickets are not enabled for owner '{}'",
                self.owner_id
            )));
        }
        let access_token = self.access_token().await?;
        self.fetch(CredentialField::JsApiTicket, Some(access_token))
            .await
    }

    /// Any credential of this owner
    pub async fn credential(&self, field: CredentialField) -> Result<CredentialValue> {
        match field {
            CredentialField::JsApiTicket => self.js_api_ticket().await,
            other => self.fetch(other, None).await,
        }
    }

    /// Read a credential without refreshing it
    pub async fn peek(&self, field: CredentialField) -> Result<Option<CredentialValue>> {
        self.source.peek(&self.key(field)?).await
    }

    /// Populate the enabled credentials ahead of the first request
    ///
    /// Another process refreshing at the same time is not an error.
    pub async fn warm_up(&self) -> Result<()> {
        tolerate_in_flight(self.access_token().await, "token")?;
        if self.js_api_enabled {
            tolerate_in_flight(self.js_api_ticket().await, "ticket")?;
        }
        Ok(())
    }

    /// Register an observer for this manager's source
    pub fn subscribe(&self, observer: Arc<dyn ChangeObserver>) -> bool {
        self.source.notifier().subscribe(observer)
    }

    /// Remove an observer from this manager's source
    pub fn unsubscribe(&self, observer: &Arc<dyn ChangeObserver>) -> bool {
        self.source.notifier().unsubscribe(observer)
    }

    async fn fetch(
        &self,
        field: CredentialField,
        access_token: Option<CredentialValue>,
    ) -> Result<CredentialValue> {
        let key = self.key(field.clone())?;
        let issuer = Arc::clone(&self.issuer);
        let owner_id = self.owner_id.clone();
        self.source
            .get_or_refresh(
                &key,
                refresh_with(move || async move {
                    issuer.issue(&owner_id, &field, access_token.as_ref()).await
                }),
            )
            .await
    }
}

fn tolerate_in_flight(result: Result<CredentialValue>, field: &str) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.is_not_yet_available() => {
            debug!(field, "Warm-up skipped, another process is refreshing");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

impl std::fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialManager")
            .field("namespace", &self.namespace)
            .field("owner_id", &self.owner_id)
            .field("mode", &self.source.mode())
            .field("js_api_enabled", &self.js_api_enabled)
            .finish()
    }
}
